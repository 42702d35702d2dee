//! pagesim - A virtual-memory page-replacement simulator.
//!
//! Replays a page-reference trace against two eviction policies (FIFO and
//! the optimal offline policy, Belady's MIN) with the same frame capacity,
//! and reports how close FIFO comes to the theoretical lower bound.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                        pagesim                          │
//! ├─────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────┐   │
//! │  │             Report Layer (report/)               │   │
//! │  │       summary + load table + step narration      │   │
//! │  └─────────────────────────────────────────────────┘   │
//! │                           ↑                             │
//! │  ┌─────────────────────────────────────────────────┐   │
//! │  │           Simulation Core (sim/)                 │   │
//! │  │   ┌─────────────────────────────────────────┐   │   │
//! │  │   │  Policies: FIFO | Optimal (Belady MIN)  │   │   │
//! │  │   └─────────────────────────────────────────┘   │   │
//! │  │    SimulationResult + StepObserver + compare     │   │
//! │  └─────────────────────────────────────────────────┘   │
//! │                           ↑                             │
//! │  ┌─────────────────────────────────────────────────┐   │
//! │  │             Trace Layer (trace/)                 │   │
//! │  │    Trace + PositionIndex + line-oriented reader  │   │
//! │  └─────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config, memory parsing)
//! - [`trace`] - Reference traces and the future-position index
//! - [`sim`] - The two simulators, results, and the comparison driver
//! - [`report`] - Human-readable rendering of results and step narration
//!
//! # Quick Start
//! ```
//! use pagesim::sim;
//! use pagesim::trace::Trace;
//!
//! let trace = Trace::from_lines(["A", "B", "C", "A", "B"]);
//! let comparison = sim::compare(&trace, 2).unwrap();
//!
//! assert!(comparison.optimal.fault_count() <= comparison.fifo.fault_count());
//! ```

pub mod common;
pub mod report;
pub mod sim;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::config::{frames_for_memory, parse_memory_size, PAGE_SIZE};
pub use common::{Error, PageId, Result};

pub use sim::{compare, Comparison, FifoSimulator, OptimalSimulator, SimulationResult};
pub use trace::{read_trace, read_trace_file, PositionIndex, Trace};
