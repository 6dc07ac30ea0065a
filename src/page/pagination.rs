//! "Load more" pagination over the in-memory records.

use serde::Serialize;

/// Records materialized per page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Pagination cursor. The page counter only ever grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    page: usize,
    page_size: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn advance(&mut self) {
        self.page += 1;
    }

    /// Requested prefix length, before clamping to the record count.
    pub fn requested(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    /// The prefix of `items` the current page materializes.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.requested().min(items.len())]
    }

    /// Whether every one of `total` records is already materialized.
    pub fn is_exhausted(&self, total: usize) -> bool {
        self.requested() >= total
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let pages = PageState::default();
        let items: Vec<usize> = (0..20).collect();
        assert_eq!(pages.page(), 1);
        assert_eq!(pages.slice(&items).len(), 6);
        assert!(!pages.is_exhausted(items.len()));
    }

    #[test]
    fn test_advance_extends_prefix_and_clamps() {
        let items: Vec<usize> = (0..14).collect();
        let mut pages = PageState::default();

        for k in 0..5 {
            assert_eq!(pages.slice(&items).len(), ((k + 1) * 6).min(14));
            pages.advance();
        }
        assert_eq!(pages.slice(&items), &items[..]);
    }

    #[test]
    fn test_exhaustion_boundary() {
        let mut pages = PageState::default();
        assert!(!pages.is_exhausted(12));
        pages.advance();
        assert!(pages.is_exhausted(12));
        assert!(pages.is_exhausted(0));
    }

    #[test]
    fn test_custom_page_size() {
        let pages = PageState::new(2);
        assert_eq!(pages.slice(&[1, 2, 3]), &[1, 2]);
        assert_eq!(pages.page_size(), 2);
    }
}
