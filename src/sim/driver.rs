//! Side-by-side simulation of both policies.

use crate::common::Result;
use crate::trace::{PositionIndex, Trace};

use super::fifo::FifoSimulator;
use super::observer::StepObserver;
use super::optimal::OptimalSimulator;
use super::result::SimulationResult;

/// Results of running both policies over the same trace and capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Result of the FIFO run.
    pub fifo: SimulationResult,

    /// Result of the optimal run.
    pub optimal: SimulationResult,
}

impl Comparison {
    /// How close FIFO comes to the optimal policy, as a percentage.
    ///
    /// Defined as `optimal_faults / fifo_faults * 100`; a trace on which
    /// FIFO never faults scores 100.0.
    pub fn efficiency(&self) -> f64 {
        let fifo_faults = self.fifo.fault_count();
        if fifo_faults == 0 {
            100.0
        } else {
            self.optimal.fault_count() as f64 / fifo_faults as f64 * 100.0
        }
    }
}

/// Run FIFO and Optimal over the same trace with the same frame capacity.
///
/// The runs share only the read-only trace and position index. Each
/// simulator owns its queue, resident set, and cursors, so neither can
/// observe the other's intermediate state, and the two results are exactly
/// what each policy would produce on its own.
///
/// # Errors
/// Returns [`Error::InvalidFrameCount`](crate::Error::InvalidFrameCount) if
/// `num_frames` is zero.
pub fn compare(trace: &Trace, num_frames: usize) -> Result<Comparison> {
    let index = PositionIndex::build(trace);

    let fifo = FifoSimulator::new(num_frames)?.run(trace);
    let optimal = OptimalSimulator::new(num_frames)?.run(trace, &index);

    Ok(Comparison { fifo, optimal })
}

/// Like [`compare`], but narrating each run to its own observer.
///
/// The FIFO run completes before the optimal run starts, so observers see
/// the two narrations in sequence, never interleaved.
pub fn compare_with_observers(
    trace: &Trace,
    num_frames: usize,
    fifo_observer: &mut dyn StepObserver,
    optimal_observer: &mut dyn StepObserver,
) -> Result<Comparison> {
    let index = PositionIndex::build(trace);

    let fifo = FifoSimulator::new(num_frames)?.run_with_observer(trace, fifo_observer);
    let optimal =
        OptimalSimulator::new(num_frames)?.run_with_observer(trace, &index, optimal_observer);

    Ok(Comparison { fifo, optimal })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_rejects_zero_frames() {
        let trace = Trace::from_lines(["A"]);
        assert!(compare(&trace, 0).is_err());
    }

    #[test]
    fn test_compare_empty_trace() {
        let comparison = compare(&Trace::new(), 4).unwrap();
        assert_eq!(comparison.fifo.fault_count(), 0);
        assert_eq!(comparison.optimal.fault_count(), 0);
        assert_eq!(comparison.efficiency(), 100.0);
    }

    #[test]
    fn test_runs_are_independent() {
        let trace = Trace::from_lines(["A", "B", "C", "A", "B", "C", "A", "B"]);

        // Results from the combined driver equal standalone runs.
        let comparison = compare(&trace, 2).unwrap();
        let fifo_alone = FifoSimulator::new(2).unwrap().run(&trace);
        let index = PositionIndex::build(&trace);
        let optimal_alone = OptimalSimulator::new(2).unwrap().run(&trace, &index);

        assert_eq!(comparison.fifo, fifo_alone);
        assert_eq!(comparison.optimal, optimal_alone);
    }

    #[test]
    fn test_efficiency_with_faults() {
        let comparison = Comparison {
            fifo: fabricated(8),
            optimal: fabricated(6),
        };
        assert!((comparison.efficiency() - 75.0).abs() < f64::EPSILON);
    }

    /// Build a result with `n` faults on a single synthetic page.
    fn fabricated(n: u64) -> SimulationResult {
        use crate::common::PageId;

        let mut result = SimulationResult::new();
        for _ in 0..n {
            result.record_fault(PageId::new(0));
        }
        result
    }
}
