//! Page-replacement simulation.
//!
//! Both simulators replay a read-only [`Trace`](crate::trace::Trace) one
//! reference at a time, classify each step as a hit or a fault, and account
//! for every load. They differ only in who gets evicted when memory is full.
//!
//! # Components
//! - [`FifoSimulator`] - evicts the longest-resident page
//! - [`OptimalSimulator`] - evicts the page referenced farthest in the future
//! - [`SimulationResult`] - fault and load accounting for one run
//! - [`StepObserver`] - per-step narration hook (pure side channel)
//! - [`compare`] - drives both policies over the same trace and capacity

mod driver;
mod fifo;
mod observer;
mod optimal;
mod result;

pub use driver::{compare, compare_with_observers, Comparison};
pub use fifo::FifoSimulator;
pub use observer::{NoopObserver, StepEvent, StepObserver, StepOutcome};
pub use optimal::OptimalSimulator;
pub use result::SimulationResult;
