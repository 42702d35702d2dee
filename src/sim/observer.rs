//! Per-step observation hook.

use crate::common::PageId;

/// What happened at one trace step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The referenced page was already resident.
    Hit,
    /// The referenced page was loaded, evicting `evicted` if memory was full.
    Fault {
        /// The page that lost its frame, if memory was full.
        evicted: Option<PageId>,
    },
}

/// One simulation step, as seen by an observer.
#[derive(Debug, Clone, Copy)]
pub struct StepEvent<'a> {
    /// Position in the trace (0-based).
    pub step: usize,

    /// The page referenced at this step.
    pub page: PageId,

    /// Hit or fault, with the evicted page if any.
    pub outcome: StepOutcome,

    /// Resident pages after the step, in frame order.
    pub resident: &'a [PageId],
}

/// Observer invoked once per trace step.
///
/// Observers are a pure side channel for narration and debugging: they see
/// each step after it has been applied and have no way to feed anything back
/// into the simulation. Attaching or detaching one never changes a run's
/// [`SimulationResult`](super::SimulationResult).
pub trait StepObserver {
    /// Called after each step of the trace has been applied.
    fn on_step(&mut self, event: &StepEvent<'_>);
}

/// Observer that ignores every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _event: &StepEvent<'_>) {}
}

/// Collects outcomes and the last resident set, for simulator tests.
#[cfg(test)]
pub(crate) struct RecordingObserver {
    pub outcomes: Vec<StepOutcome>,
    pub final_resident: Vec<PageId>,
}

#[cfg(test)]
impl RecordingObserver {
    pub(crate) fn new() -> Self {
        Self {
            outcomes: Vec::new(),
            final_resident: Vec::new(),
        }
    }
}

#[cfg(test)]
impl StepObserver for RecordingObserver {
    fn on_step(&mut self, event: &StepEvent<'_>) {
        self.outcomes.push(event.outcome);
        self.final_resident = event.resident.to_vec();
    }
}
