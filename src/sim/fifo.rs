//! FIFO (First-In-First-Out) page replacement.

use std::collections::{HashSet, VecDeque};

use crate::common::{Error, PageId, Result};
use crate::trace::Trace;

use super::observer::{NoopObserver, StepEvent, StepObserver, StepOutcome};
use super::result::SimulationResult;

/// Simulates the FIFO replacement policy over a reference trace.
///
/// Resident pages form a queue in arrival order. On a miss with full memory
/// the front of the queue (the longest-resident page) is evicted,
/// regardless of how recently or how often it was referenced. Re-referencing
/// a resident page does not reorder the queue.
///
/// A membership set mirrors the queue for O(1) hit checks, so a run is O(N)
/// over a trace of N references.
///
/// # Example
/// ```
/// use pagesim::sim::FifoSimulator;
/// use pagesim::trace::Trace;
///
/// let trace = Trace::from_lines(["A", "B", "A"]);
/// let result = FifoSimulator::new(1).unwrap().run(&trace);
/// // A faults, B evicts A, A faults again
/// assert_eq!(result.fault_count(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FifoSimulator {
    /// Frame capacity. Always ≥ 1.
    num_frames: usize,
}

impl FifoSimulator {
    /// Create a simulator for the given frame capacity.
    ///
    /// # Errors
    /// Returns [`Error::InvalidFrameCount`] if `num_frames` is zero.
    pub fn new(num_frames: usize) -> Result<Self> {
        if num_frames == 0 {
            return Err(Error::InvalidFrameCount(num_frames));
        }
        Ok(Self { num_frames })
    }

    /// Frame capacity of this simulator.
    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    /// Replay the trace and return fault statistics.
    ///
    /// Runs are independent and re-entrant: calling this twice on the same
    /// trace yields identical results.
    pub fn run(&self, trace: &Trace) -> SimulationResult {
        self.run_with_observer(trace, &mut NoopObserver)
    }

    /// Replay the trace, reporting every step to `observer`.
    pub fn run_with_observer(
        &self,
        trace: &Trace,
        observer: &mut dyn StepObserver,
    ) -> SimulationResult {
        // Arrival queue: front = longest-resident page.
        let mut queue: VecDeque<PageId> = VecDeque::with_capacity(self.num_frames);
        // Mirrors the queue for O(1) membership checks.
        let mut resident: HashSet<PageId> = HashSet::with_capacity(self.num_frames);
        let mut result = SimulationResult::new();

        // Scratch buffer for the observer's view of the frames.
        let mut frame_state: Vec<PageId> = Vec::with_capacity(self.num_frames);

        for (step, &page) in trace.refs().iter().enumerate() {
            let outcome = if resident.contains(&page) {
                StepOutcome::Hit
            } else {
                result.record_fault(page);

                let evicted = if queue.len() == self.num_frames {
                    queue.pop_front().map(|victim| {
                        resident.remove(&victim);
                        victim
                    })
                } else {
                    None
                };

                queue.push_back(page);
                resident.insert(page);

                StepOutcome::Fault { evicted }
            };

            frame_state.clear();
            frame_state.extend(queue.iter().copied());
            observer.on_step(&StepEvent {
                step,
                page,
                outcome,
                resident: &frame_state,
            });
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::super::observer::RecordingObserver;
    use super::*;

    #[test]
    fn test_zero_frames_rejected() {
        assert!(matches!(
            FifoSimulator::new(0),
            Err(Error::InvalidFrameCount(0))
        ));
    }

    #[test]
    fn test_empty_trace() {
        let result = FifoSimulator::new(4).unwrap().run(&Trace::new());
        assert_eq!(result.fault_count(), 0);
        assert!(result.load_counts().is_empty());
    }

    #[test]
    fn test_evicts_in_arrival_order() {
        // 2 frames: C must evict A (oldest), then A must evict B.
        let trace = Trace::from_lines(["A", "B", "C", "A"]);
        let mut observer = RecordingObserver::new();
        let result = FifoSimulator::new(2)
            .unwrap()
            .run_with_observer(&trace, &mut observer);

        assert_eq!(result.fault_count(), 4);

        let a = trace.page_id("A").unwrap();
        let b = trace.page_id("B").unwrap();
        assert_eq!(
            observer.outcomes,
            vec![
                StepOutcome::Fault { evicted: None },
                StepOutcome::Fault { evicted: None },
                StepOutcome::Fault { evicted: Some(a) },
                StepOutcome::Fault { evicted: Some(b) },
            ]
        );
    }

    #[test]
    fn test_reaccess_does_not_reorder() {
        // A is re-referenced while resident, but stays oldest and is
        // still the first evicted.
        let trace = Trace::from_lines(["A", "B", "A", "C"]);
        let mut observer = RecordingObserver::new();
        FifoSimulator::new(2)
            .unwrap()
            .run_with_observer(&trace, &mut observer);

        let a = trace.page_id("A").unwrap();
        assert_eq!(
            observer.outcomes[3],
            StepOutcome::Fault { evicted: Some(a) }
        );
    }

    #[test]
    fn test_hits_do_not_fault() {
        let trace = Trace::from_lines(["A", "A", "A", "A"]);
        let result = FifoSimulator::new(1).unwrap().run(&trace);

        assert_eq!(result.fault_count(), 1);
        assert_eq!(result.load_count(trace.page_id("A").unwrap()), 1);
    }

    #[test]
    fn test_resident_never_exceeds_capacity() {
        let trace = Trace::from_lines(["A", "B", "C", "D", "E", "A", "B"]);
        let mut observer = RecordingObserver::new();
        FifoSimulator::new(3)
            .unwrap()
            .run_with_observer(&trace, &mut observer);

        assert_eq!(observer.final_resident.len(), 3);
    }

    #[test]
    fn test_load_counts_match_faults() {
        let trace = Trace::from_lines(["A", "B", "C", "A", "B", "C", "A"]);
        let result = FifoSimulator::new(2).unwrap().run(&trace);
        assert_eq!(result.total_loads(), result.fault_count());
    }
}
