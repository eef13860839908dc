//! Pagination state: page index and size with clamped navigation.

use std::ops::Range;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Tracks the current page over a row count it does not own.
///
/// The page index is 0-based and always kept inside
/// `[0, max(page_count - 1, 0)]`; navigation past either end is a no-op,
/// never an error. The total row count is passed in by the engine since the
/// dataset can change between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_index: usize,
    page_size: usize,
}

impl Pager {
    /// Creates a pager at page 0 with the default page size.
    pub fn new() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the page size. Zero is treated as one.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }

    /// Returns the current 0-based page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Returns the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of pages for `total` rows: `ceil(total / size)`.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Returns the page index clamped against `total` rows, without mutating.
    fn clamped_index(&self, total: usize) -> usize {
        self.page_index
            .min(self.page_count(total).saturating_sub(1))
    }

    /// Clamps the stored index down after the dataset shrank.
    pub fn clamp(&mut self, total: usize) {
        self.page_index = self.clamped_index(total);
    }

    /// Returns the row range for the current page, clamped to `total`.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.clamped_index(total) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    /// Returns `true` if there is a page after the current one.
    pub fn can_next(&self, total: usize) -> bool {
        self.clamped_index(total) + 1 < self.page_count(total)
    }

    /// Returns `true` if there is a page before the current one.
    pub fn can_prev(&self) -> bool {
        self.page_index > 0
    }

    /// Advances to the next page. Returns `true` if the index changed.
    pub fn next(&mut self, total: usize) -> bool {
        self.clamp(total);
        if self.can_next(total) {
            self.page_index += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous page. Returns `true` if the index changed.
    pub fn prev(&mut self, total: usize) -> bool {
        self.clamp(total);
        if self.can_prev() {
            self.page_index -= 1;
            true
        } else {
            false
        }
    }

    /// Human-readable pagination label: `"Page {index+1} of {count}"`, or
    /// the empty string when there are no pages at all.
    pub fn label(&self, total: usize) -> String {
        let count = self.page_count(total);
        if count == 0 {
            String::new()
        } else {
            format!("Page {} of {}", self.clamped_index(total) + 1, count)
        }
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_is_ceiling_division() {
        let pager = Pager::new();
        assert_eq!(pager.page_count(0), 0);
        assert_eq!(pager.page_count(1), 1);
        assert_eq!(pager.page_count(10), 1);
        assert_eq!(pager.page_count(11), 2);
        assert_eq!(pager.page_count(25), 3);
    }

    #[test]
    fn navigation_clamps_at_boundaries() {
        let mut pager = Pager::new();

        assert!(!pager.prev(25));
        assert_eq!(pager.page_index(), 0);

        assert!(pager.next(25));
        assert!(pager.next(25));
        assert_eq!(pager.page_index(), 2);

        // Already on the last page of 25 rows.
        assert!(!pager.next(25));
        assert_eq!(pager.page_index(), 2);
    }

    #[test]
    fn range_covers_partial_last_page() {
        let mut pager = Pager::new();
        pager.next(25);
        pager.next(25);
        assert_eq!(pager.range(25), 20..25);
    }

    #[test]
    fn shrinking_data_clamps_the_index() {
        let mut pager = Pager::new();
        pager.next(25);
        pager.next(25);
        assert_eq!(pager.page_index(), 2);

        pager.clamp(5);
        assert_eq!(pager.page_index(), 0);
        assert_eq!(pager.range(5), 0..5);
    }

    #[test]
    fn range_is_clamped_without_mutation() {
        let mut pager = Pager::new();
        pager.next(25);
        pager.next(25);

        // Dataset shrank but clamp() has not run: range still never reads
        // out of bounds.
        assert_eq!(pager.range(5), 0..5);
        assert_eq!(pager.page_index(), 2);
    }

    #[test]
    fn empty_dataset_has_no_pages_and_no_label() {
        let mut pager = Pager::new();
        assert_eq!(pager.page_count(0), 0);
        assert_eq!(pager.label(0), "");
        assert_eq!(pager.range(0), 0..0);
        assert!(!pager.can_next(0));
        assert!(!pager.can_prev());
        assert!(!pager.next(0));
    }

    #[test]
    fn label_format() {
        let mut pager = Pager::new();
        assert_eq!(pager.label(25), "Page 1 of 3");
        pager.next(25);
        assert_eq!(pager.label(25), "Page 2 of 3");
    }
}
