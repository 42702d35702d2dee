//! Step-by-step narration of a simulation run.

use std::io::Write;

use crate::sim::{StepEvent, StepObserver, StepOutcome};
use crate::trace::Trace;

/// A [`StepObserver`] that prints a line-by-line account of a run.
///
/// Intended for small traces and teaching: every reference is printed with
/// its hit/fault classification, any eviction, and the memory contents
/// afterwards. Narration is best-effort: a failed write drops the line,
/// never the run.
///
/// # Example output
/// ```text
/// [FIFO - step 3] referencing page C
///   -> PAGE FAULT
///      evicted A
///      loaded  C
///   memory: ["B", "C"]
/// ```
pub struct StepNarrator<'a, W: Write> {
    /// Resolves page ids back to their original spellings.
    trace: &'a Trace,
    /// Printed in every step header, e.g. "FIFO" or "Optimal".
    label: &'a str,
    out: W,
}

impl<'a, W: Write> StepNarrator<'a, W> {
    /// Create a narrator writing to `out`.
    pub fn new(trace: &'a Trace, label: &'a str, out: W) -> Self {
        Self { trace, label, out }
    }
}

impl<W: Write> StepObserver for StepNarrator<'_, W> {
    fn on_step(&mut self, event: &StepEvent<'_>) {
        let name = self.trace.name(event.page);

        // Steps are numbered from 1 for human consumption.
        let _ = writeln!(
            self.out,
            "[{} - step {}] referencing page {}",
            self.label,
            event.step + 1,
            name
        );

        match event.outcome {
            StepOutcome::Hit => {
                let _ = writeln!(self.out, "  -> hit");
            }
            StepOutcome::Fault { evicted } => {
                let _ = writeln!(self.out, "  -> PAGE FAULT");
                if let Some(victim) = evicted {
                    let _ = writeln!(self.out, "     evicted {}", self.trace.name(victim));
                }
                let _ = writeln!(self.out, "     loaded  {}", name);
            }
        }

        let frames: Vec<&str> = event
            .resident
            .iter()
            .map(|&page| self.trace.name(page))
            .collect();
        let _ = writeln!(self.out, "  memory: {:?}", frames);
    }
}
