//! Error types for pagesim.

use thiserror::Error;

use crate::common::config::PAGE_SIZE;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Everything the core can reject happens before a simulation starts: once a
/// simulator holds a valid trace and a positive frame count, a run cannot
/// fail.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading a reference trace.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A simulator was asked to run with no frames at all.
    #[error("frame count must be at least 1, got {0}")]
    InvalidFrameCount(usize),

    /// A memory-size string could not be parsed.
    #[error("invalid memory size: {0:?}")]
    InvalidMemorySize(String),

    /// The requested physical memory cannot hold even a single page.
    #[error("memory of {0} bytes is smaller than one page ({page} bytes)", page = PAGE_SIZE)]
    MemoryTooSmall(u64),
}
