//! Windowed pagination math.
//!
//! Computes the contiguous run of page numbers shown as direct links around
//! the current page, and answers the boundary questions the navigation bar
//! asks (edge links, ellipses, disabled first/last controls). The window is
//! anchored on the current page and re-anchored near the right edge so it
//! stays full-width whenever enough pages exist.
//!
//! This module is pure: no I/O, no state, total over its integer inputs for
//! any `window_size >= 1`. Out-of-range `current_page` values are accepted
//! without clamping; callers validate user input at the boundary.

/// Number of direct page links shown by default.
pub const DEFAULT_WINDOW_SIZE: u32 = 5;

/// The visible run of page numbers around the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: u32,
    pub total_pages: u32,
    /// First page in the window. Always >= 1.
    pub start: u32,
    /// Last page in the window. 0 when the listing is empty.
    pub end: u32,
    /// The contiguous run `start..=end`, empty when `total_pages == 0`.
    pub pages: Vec<u32>,
}

impl PageWindow {
    /// Compute the window of page links for `current_page` out of
    /// `total_pages`.
    ///
    /// The window is centered on the current page, clamped at both edges,
    /// and re-anchored leftward when the right edge would truncate it, so
    /// `pages.len() == min(window_size, total_pages)` always holds.
    pub fn compute(current_page: u32, total_pages: u32, window_size: u32) -> Self {
        debug_assert!(window_size >= 1);

        let mut start = current_page.saturating_sub(window_size / 2).max(1);
        let end = total_pages.min(start.saturating_add(window_size - 1));

        // Near the right edge the forward reach is short; pull the start
        // back so the window keeps its full width (mirrors the left clamp).
        if end.saturating_sub(start) + 1 < window_size {
            start = end.saturating_sub(window_size - 1).max(1);
        }

        // An empty listing leaves end == 0 < start, so the range is empty.
        let pages: Vec<u32> = (start..=end).collect();

        Self {
            current_page,
            total_pages,
            start,
            end,
            pages,
        }
    }

    /// A bare link to page 1 is shown before the window.
    pub fn has_leading_edge(&self) -> bool {
        self.start > 1
    }

    /// An ellipsis separates page 1 from the window.
    pub fn has_leading_ellipsis(&self) -> bool {
        self.start > 2
    }

    /// A bare link to the last page is shown after the window.
    pub fn has_trailing_edge(&self) -> bool {
        self.end < self.total_pages
    }

    /// An ellipsis separates the window from the last page.
    pub fn has_trailing_ellipsis(&self) -> bool {
        self.end + 1 < self.total_pages
    }

    /// First/Previous controls are disabled here.
    pub fn on_first_page(&self) -> bool {
        self.current_page == 1
    }

    /// Next/Last controls are disabled here.
    pub fn on_last_page(&self) -> bool {
        self.current_page == self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_at_first_page() {
        let window = PageWindow::compute(1, 10, 5);
        assert_eq!(window.pages, vec![1, 2, 3, 4, 5]);
        assert!(!window.has_leading_edge());
        assert!(!window.has_leading_ellipsis());
        assert!(window.has_trailing_edge());
        assert!(window.has_trailing_ellipsis());
        assert!(window.on_first_page());
        assert!(!window.on_last_page());
    }

    #[test]
    fn test_window_at_last_page() {
        let window = PageWindow::compute(10, 10, 5);
        assert_eq!(window.pages, vec![6, 7, 8, 9, 10]);
        assert!(window.has_leading_edge());
        assert!(window.has_leading_ellipsis());
        assert!(!window.has_trailing_edge());
        assert!(!window.has_trailing_ellipsis());
        assert!(window.on_last_page());
    }

    #[test]
    fn test_window_in_the_middle() {
        let window = PageWindow::compute(5, 10, 5);
        assert_eq!(window.pages, vec![3, 4, 5, 6, 7]);
        assert!(window.has_leading_edge());
        assert!(window.has_leading_ellipsis());
        assert!(window.has_trailing_edge());
        assert!(window.has_trailing_ellipsis());
    }

    #[test]
    fn test_edge_link_without_ellipsis() {
        // Window starts exactly at page 2: the "1" link is shown but nothing
        // is skipped, so no ellipsis.
        let window = PageWindow::compute(4, 10, 5);
        assert_eq!(window.pages, vec![2, 3, 4, 5, 6]);
        assert!(window.has_leading_edge());
        assert!(!window.has_leading_ellipsis());

        // Symmetric case on the right: window ends at total_pages - 1.
        let window = PageWindow::compute(7, 10, 5);
        assert_eq!(window.pages, vec![5, 6, 7, 8, 9]);
        assert!(window.has_trailing_edge());
        assert!(!window.has_trailing_ellipsis());
    }

    #[test]
    fn test_empty_listing() {
        let window = PageWindow::compute(1, 0, 5);
        assert!(window.pages.is_empty());
        assert!(!window.has_leading_edge());
        assert!(!window.has_leading_ellipsis());
        assert!(!window.has_trailing_edge());
        assert!(!window.has_trailing_ellipsis());
    }

    #[test]
    fn test_fewer_pages_than_window() {
        let window = PageWindow::compute(2, 3, 5);
        assert_eq!(window.pages, vec![1, 2, 3]);
        assert!(!window.has_leading_edge());
        assert!(!window.has_trailing_edge());
    }

    #[test]
    fn test_out_of_range_current_page_still_well_formed() {
        // Accepted without clamping; the window math still yields a
        // contiguous in-range run.
        let window = PageWindow::compute(20, 10, 5);
        assert_eq!(window.pages, vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_extreme_current_page_does_not_overflow() {
        // Totality at the edge of the integer domain: the window math must
        // not panic for any u32 current_page.
        let window = PageWindow::compute(u32::MAX, 10, 5);
        assert_eq!(window.pages, vec![6, 7, 8, 9, 10]);

        let window = PageWindow::compute(u32::MAX, u32::MAX, 5);
        assert_eq!(window.end, u32::MAX);
        assert_eq!(window.pages.len(), 5);
    }

    #[test]
    fn test_window_size_one() {
        let window = PageWindow::compute(4, 10, 1);
        assert_eq!(window.pages, vec![4]);
        assert!(window.has_leading_edge());
        assert!(window.has_trailing_edge());
    }

    #[test]
    fn test_window_shape_invariants() {
        for total_pages in 0..=15 {
            for current_page in 1..=15 {
                let window = PageWindow::compute(current_page, total_pages, 5);

                assert_eq!(
                    window.pages.len() as u32,
                    5.min(total_pages),
                    "len mismatch for current={current_page} total={total_pages}"
                );
                for pair in window.pages.windows(2) {
                    assert_eq!(pair[1], pair[0] + 1, "window must be contiguous");
                }
                if let (Some(first), Some(last)) = (window.pages.first(), window.pages.last()) {
                    assert!(*first >= 1);
                    assert!(*last <= total_pages);
                    assert_eq!(*first, window.start);
                    assert_eq!(*last, window.end);
                }
            }
        }
    }
}
