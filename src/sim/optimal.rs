//! Optimal (Belady's MIN) page replacement.

use std::collections::HashSet;

use crate::common::{Error, PageId, Result};
use crate::trace::{PositionIndex, Trace};

use super::observer::{NoopObserver, StepEvent, StepObserver, StepOutcome};
use super::result::SimulationResult;

/// Simulates the optimal offline replacement policy.
///
/// On a miss with full memory the victim is the resident page whose next
/// reference lies farthest in the future; a page that is never referenced
/// again wins outright. This needs the whole trace up front: it is the
/// clairvoyant lower bound that online policies are measured against, not
/// something an OS could run.
///
/// # Victim selection
/// Resident pages are scanned in frame order. A page with no future
/// reference is taken immediately, ending the scan; among pages with equal
/// next-reference positions, the first one scanned wins. Both tie-breaks are
/// deterministic, so identical inputs always produce identical evictions.
///
/// # Forward cursors
/// Each page's next use is found by walking its precomputed position list
/// (see [`PositionIndex`]) through a per-page cursor. Cursors only ever move
/// forward: positions at or before the current step are skipped once and
/// never rescanned, so victim selection costs amortized O(1) per resident
/// page per fault instead of a rescan of the remaining trace.
///
/// # Example
/// ```
/// use pagesim::sim::OptimalSimulator;
/// use pagesim::trace::{PositionIndex, Trace};
///
/// let trace = Trace::from_lines(["A", "B", "C", "A"]);
/// let index = PositionIndex::build(&trace);
/// let result = OptimalSimulator::new(2).unwrap().run(&trace, &index);
/// // The C fault evicts B (never referenced again), so the last A hits.
/// assert_eq!(result.fault_count(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OptimalSimulator {
    /// Frame capacity. Always ≥ 1.
    num_frames: usize,
}

impl OptimalSimulator {
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
    /// `index` must have been built from `trace`. Runs are independent and
    /// re-entrant: calling this twice on the same inputs yields identical
    /// results.
    pub fn run(&self, trace: &Trace, index: &PositionIndex) -> SimulationResult {
        self.run_with_observer(trace, index, &mut NoopObserver)
    }

    /// Replay the trace, reporting every step to `observer`.
    pub fn run_with_observer(
        &self,
        trace: &Trace,
        index: &PositionIndex,
        observer: &mut dyn StepObserver,
    ) -> SimulationResult {
        // Frame slots in arrival order; eviction overwrites in place.
        let mut frames: Vec<PageId> = Vec::with_capacity(self.num_frames);
        // Mirrors the frames for O(1) membership checks.
        let mut resident: HashSet<PageId> = HashSet::with_capacity(self.num_frames);
        // Per-page cursor into its position list. Never moves backward.
        let mut cursors: Vec<usize> = vec![0; trace.distinct_pages()];
        let mut result = SimulationResult::new();

        for (step, &page) in trace.refs().iter().enumerate() {
            let outcome = if resident.contains(&page) {
                StepOutcome::Hit
            } else {
                result.record_fault(page);

                let evicted = if frames.len() == self.num_frames {
                    let slot = select_victim(&frames, index, &mut cursors, step);
                    let victim = frames[slot];
                    resident.remove(&victim);
                    frames[slot] = page;
                    Some(victim)
                } else {
                    frames.push(page);
                    None
                };
                resident.insert(page);

                StepOutcome::Fault { evicted }
            };

            observer.on_step(&StepEvent {
                step,
                page,
                outcome,
                resident: &frames,
            });
        }

        result
    }
}

/// Pick the frame slot whose page is referenced farthest in the future.
///
/// Only called with full frames, so the slice is non-empty.
fn select_victim(
    frames: &[PageId],
    index: &PositionIndex,
    cursors: &mut [usize],
    step: usize,
) -> usize {
    let mut victim = 0;
    let mut farthest: Option<usize> = None;

    for (slot, &page) in frames.iter().enumerate() {
        let positions = index.positions(page);
        let cursor = &mut cursors[page.index()];

        // Positions at or before the current step are in the past now;
        // skip them for good.
        while *cursor < positions.len() && positions[*cursor] <= step {
            *cursor += 1;
        }

        match positions.get(*cursor) {
            // Never referenced again: unconditional victim, stop scanning.
            None => return slot,
            Some(&next) => {
                // Strict comparison keeps the first-scanned page on ties.
                if farthest.map_or(true, |f| next > f) {
                    farthest = Some(next);
                    victim = slot;
                }
            }
        }
    }

    victim
}
