//! Configuration constants and memory-size parsing for pagesim.

use crate::common::{Error, Result};

/// Size of a page in bytes (4KB).
///
/// This value is chosen to match:
/// - OS page size on most systems (4096 bytes)
/// - Common database page sizes
///
/// The frame count of a simulation is `physical_memory_bytes / PAGE_SIZE`.
pub const PAGE_SIZE: usize = 4096;

/// Size of one page-table entry in bytes.
///
/// Used only for the report's single-level page-table size estimate.
pub const PTE_SIZE: usize = 4;

/// Parse a human-readable memory size into a byte count.
///
/// Accepts an optional `KB`, `MB`, or `GB` suffix (case-insensitive) after a
/// decimal integer; a bare integer is a byte count. Surrounding whitespace is
/// ignored.
///
/// # Example
/// ```
/// use pagesim::parse_memory_size;
///
/// assert_eq!(parse_memory_size("8MB").unwrap(), 8 * 1024 * 1024);
/// assert_eq!(parse_memory_size("16kb").unwrap(), 16 * 1024);
/// assert_eq!(parse_memory_size("4096").unwrap(), 4096);
/// ```
///
/// # Errors
/// Returns [`Error::InvalidMemorySize`] if the number is missing, malformed,
/// or overflows a `u64` after applying the suffix.
pub fn parse_memory_size(input: &str) -> Result<u64> {
    let normalized = input.trim().to_ascii_uppercase();

    let (digits, multiplier) = if let Some(d) = normalized.strip_suffix("KB") {
        (d, 1024u64)
    } else if let Some(d) = normalized.strip_suffix("MB") {
        (d, 1024 * 1024)
    } else if let Some(d) = normalized.strip_suffix("GB") {
        (d, 1024 * 1024 * 1024)
    } else {
        (normalized.as_str(), 1)
    };

    let value: u64 = digits
        .parse()
        .map_err(|_| Error::InvalidMemorySize(input.to_string()))?;

    value
        .checked_mul(multiplier)
        .ok_or_else(|| Error::InvalidMemorySize(input.to_string()))
}

/// Number of page frames that fit in `bytes` of physical memory.
///
/// # Errors
/// Returns [`Error::MemoryTooSmall`] if `bytes` cannot hold even one
/// [`PAGE_SIZE`]-byte page.
pub fn frames_for_memory(bytes: u64) -> Result<usize> {
    if bytes < PAGE_SIZE as u64 {
        return Err(Error::MemoryTooSmall(bytes));
    }
    Ok((bytes / PAGE_SIZE as u64) as usize)
}
