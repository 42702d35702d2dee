//! The results summary and the per-page load table.

use std::io::{self, Write};

use crate::common::config::PTE_SIZE;
use crate::common::PageId;
use crate::sim::Comparison;
use crate::trace::Trace;

/// Write the headline comparison: capacity, distinct pages, the estimated
/// single-level page-table size, fault totals, and FIFO's efficiency
/// relative to the optimal policy.
pub fn write_summary<W: Write>(
    out: &mut W,
    trace: &Trace,
    num_frames: usize,
    comparison: &Comparison,
) -> io::Result<()> {
    let distinct = trace.distinct_pages();

    writeln!(out, "--- SIMULATION RESULTS ---")?;
    writeln!(out, "Physical memory holds {num_frames} pages.")?;
    writeln!(out, "The trace references {distinct} distinct pages.")?;
    writeln!(
        out,
        "Estimated single-level page table: {} bytes ({distinct} entries x {PTE_SIZE} bytes each)",
        distinct * PTE_SIZE
    )?;
    writeln!(
        out,
        "The Optimal policy incurs {} page faults.",
        comparison.optimal.fault_count()
    )?;
    writeln!(
        out,
        "The FIFO policy incurs {} page faults,",
        comparison.fifo.fault_count()
    )?;
    writeln!(
        out,
        "reaching {:.2}% of Optimal's performance.",
        comparison.efficiency()
    )?;

    Ok(())
}

/// Write the per-page load-count table, sorted by page identifier.
pub fn write_load_table<W: Write>(
    out: &mut W,
    trace: &Trace,
    comparison: &Comparison,
) -> io::Result<()> {
    let mut pages: Vec<PageId> = trace.pages().collect();
    pages.sort_by(|a, b| trace.name(*a).cmp(trace.name(*b)));

    writeln!(out, "Page\tOptimal\tFIFO")?;
    writeln!(out, "----\t-------\t----")?;
    for page in pages {
        writeln!(
            out,
            "{}\t{}\t{}",
            trace.name(page),
            comparison.optimal.load_count(page),
            comparison.fifo.load_count(page)
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim;

    fn rendered<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary_contents() {
        let trace = Trace::from_lines(["A", "B", "C", "A", "B", "C"]);
        let comparison = sim::compare(&trace, 2).unwrap();

        let text = rendered(|out| write_summary(out, &trace, 2, &comparison));

        assert!(text.contains("Physical memory holds 2 pages."));
        assert!(text.contains("3 distinct pages"));
        assert!(text.contains("12 bytes (3 entries x 4 bytes each)"));
        assert!(text.contains(&format!(
            "Optimal policy incurs {} page faults",
            comparison.optimal.fault_count()
        )));
    }

    #[test]
    fn test_summary_efficiency_formatting() {
        let trace = Trace::from_lines(["A", "A"]);
        let comparison = sim::compare(&trace, 1).unwrap();

        // One fault each: efficiency is exactly 100.00%
        let text = rendered(|out| write_summary(out, &trace, 1, &comparison));
        assert!(text.contains("100.00%"));
    }

    #[test]
    fn test_load_table_is_lexically_sorted() {
        // First-appearance order differs from lexical order on purpose.
        let trace = Trace::from_lines(["beta", "alpha", "gamma", "beta"]);
        let comparison = sim::compare(&trace, 2).unwrap();

        let text = rendered(|out| write_load_table(out, &trace, &comparison));
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[2].starts_with("alpha\t"));
        assert!(lines[3].starts_with("beta\t"));
        assert!(lines[4].starts_with("gamma\t"));
    }

    #[test]
    fn test_load_table_counts() {
        let trace = Trace::from_lines(["A", "B", "A"]);
        let comparison = sim::compare(&trace, 1).unwrap();

        let text = rendered(|out| write_load_table(out, &trace, &comparison));
        // A is loaded twice by both policies with a single frame.
        assert!(text.contains("A\t2\t2"));
        assert!(text.contains("B\t1\t1"));
    }
}
