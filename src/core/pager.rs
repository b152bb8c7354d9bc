use std::ops::Range;

/// 1-based pagination state over a record list of known length.
///
/// The pager never stores the list itself; every derivation takes the current
/// record count so the state can be re-clamped whenever the list is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            // A page size of 0 would divide by zero in total_pages.
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `max(1, ceil(record_count / page_size))`; an empty list still has one
    /// (empty) page.
    pub fn total_pages(&self, record_count: usize) -> usize {
        record_count.div_ceil(self.page_size).max(1)
    }

    /// Half-open index window of the current page, clamped to the list bounds.
    pub fn window(&self, record_count: usize) -> Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(record_count);
        let end = (start + self.page_size).min(record_count);
        start..end
    }

    /// Moves to the next page, clamped to `total_pages`. Returns whether the
    /// page changed; a no-op on the last page.
    pub fn next_page(&mut self, record_count: usize) -> bool {
        if self.current_page < self.total_pages(record_count) {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous page, clamped to 1. Returns whether the page
    /// changed; a no-op on page 1.
    pub fn previous_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Back to page 1. Called whenever the underlying list is replaced, which
    /// also keeps `current_page` in range when the new list is shorter.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}
