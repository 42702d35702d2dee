//! Per-page occurrence positions.

use crate::common::PageId;

use super::Trace;

/// For every page, the ascending list of trace positions where it occurs.
///
/// Built in one linear pass and read-only afterwards. The optimal simulator
/// walks these lists through per-page forward cursors to find each resident
/// page's next use without rescanning the trace.
///
/// # Example
/// ```
/// use pagesim::trace::{PositionIndex, Trace};
///
/// let trace = Trace::from_lines(["A", "B", "A"]);
/// let index = PositionIndex::build(&trace);
///
/// let a = trace.page_id("A").unwrap();
/// assert_eq!(index.positions(a), &[0, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct PositionIndex {
    /// Occurrence positions per page, indexed by PageId.
    positions: Vec<Vec<usize>>,
}

impl PositionIndex {
    /// Build the index from a trace.
    pub fn build(trace: &Trace) -> Self {
        let mut positions = vec![Vec::new(); trace.distinct_pages()];
        for (i, page) in trace.refs().iter().enumerate() {
            positions[page.index()].push(i);
        }
        Self { positions }
    }

    /// The ascending occurrence positions of a page.
    ///
    /// # Panics
    /// Panics if `page` did not come from the trace this index was built on.
    pub fn positions(&self, page: PageId) -> &[usize] {
        &self.positions[page.index()]
    }

    /// Number of distinct pages in the index.
    pub fn page_count(&self) -> usize {
        self.positions.len()
    }
}
