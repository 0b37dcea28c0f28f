//! Page arithmetic for listings.
//!
//! Out-of-range page numbers are not an error: they land on the last page.

use serde::Serialize;

/// Past events shown per home page.
pub const PAST_EVENTS_PER_PAGE: u64 = 10;

/// Splits `total` items into pages of `per_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total: u64,
    per_page: u64,
}

impl Paginator {
    pub fn new(total: u64, per_page: u64) -> Self {
        Self {
            total,
            per_page: per_page.max(1),
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Number of pages. An empty listing still has one (empty) page.
    pub fn num_pages(&self) -> u32 {
        let pages = self.total.div_ceil(self.per_page).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Map a 1-based requested page onto an existing page.
    ///
    /// Anything outside `1..=num_pages` resolves to the last page.
    pub fn page_number(&self, requested: u32) -> u32 {
        let last = self.num_pages();
        if requested == 0 || requested > last {
            last
        } else {
            requested
        }
    }

    /// Offset of the first item on `number` (assumed in range).
    pub fn offset(&self, number: u32) -> u64 {
        u64::from(number.saturating_sub(1)) * self.per_page
    }

    /// Wrap already-fetched items for page `number`.
    pub fn page<T>(&self, number: u32, items: Vec<T>) -> Page<T> {
        Page {
            items,
            number,
            num_pages: self.num_pages(),
            total: self.total,
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based.
    pub number: u32,
    pub num_pages: u32,
    /// Items across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn previous_number(&self) -> Option<u32> {
        self.has_previous().then(|| self.number - 1)
    }

    pub fn next_number(&self) -> Option<u32> {
        self.has_next().then(|| self.number + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_listing_has_one_page() {
        let p = Paginator::new(0, 10);
        assert_eq!(p.num_pages(), 1);
        assert_eq!(p.page_number(1), 1);
        assert_eq!(p.page_number(5), 1);
    }

    #[test]
    fn num_pages_rounds_up() {
        assert_eq!(Paginator::new(10, 10).num_pages(), 1);
        assert_eq!(Paginator::new(11, 10).num_pages(), 2);
        assert_eq!(Paginator::new(20, 10).num_pages(), 2);
    }

    #[test]
    fn overflow_clamps_to_last_page() {
        let p = Paginator::new(15, 10);
        assert_eq!(p.page_number(999), 2);
        assert_eq!(p.page_number(u32::MAX), 2);
    }

    #[test]
    fn page_zero_clamps_to_last_page() {
        let p = Paginator::new(35, 10);
        assert_eq!(p.page_number(0), 4);
    }

    #[test]
    fn in_range_pages_pass_through() {
        let p = Paginator::new(35, 10);
        assert_eq!(p.page_number(1), 1);
        assert_eq!(p.page_number(3), 3);
    }

    #[test]
    fn offset_is_zero_based() {
        let p = Paginator::new(35, 10);
        assert_eq!(p.offset(1), 0);
        assert_eq!(p.offset(4), 30);
    }

    #[test]
    fn zero_per_page_is_treated_as_one() {
        let p = Paginator::new(3, 0);
        assert_eq!(p.per_page(), 1);
        assert_eq!(p.num_pages(), 3);
    }

    #[test]
    fn page_navigation() {
        let p = Paginator::new(25, 10);
        let first = p.page(1, vec![1; 10]);
        assert!(!first.has_previous());
        assert_eq!(first.next_number(), Some(2));

        let last = p.page(3, vec![1; 5]);
        assert_eq!(last.previous_number(), Some(2));
        assert!(!last.has_next());
        assert_eq!(last.total, 25);
    }
}
