//! Bounded pagination window.
//!
//! Pure function computing which page numbers and prev/next markers to show
//! for a given current page and page count.

/// Number of page buttons shown by default.
pub const DEFAULT_MAX_VISIBLE: u32 = 5;

/// One element of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    /// "«" - go to `current - 1`.
    Previous,
    /// A concrete page number.
    Page(u32),
    /// "»" - go to `current + 1`.
    Next,
}

impl PageMarker {
    /// Page this marker navigates to.
    pub fn target(self, current: u32) -> u32 {
        match self {
            PageMarker::Previous => current.saturating_sub(1).max(1),
            PageMarker::Page(n) => n,
            PageMarker::Next => current.saturating_add(1),
        }
    }

    /// Previous/next are shown but disabled at the first/last page.
    pub fn is_enabled(self, current: u32, total: u32) -> bool {
        match self {
            PageMarker::Previous => current > 1,
            PageMarker::Page(_) => true,
            PageMarker::Next => current < total,
        }
    }

    /// True for the number of the current page.
    pub fn is_active(self, current: u32) -> bool {
        self == PageMarker::Page(current)
    }

    /// Button label.
    pub fn label(self) -> String {
        match self {
            PageMarker::Previous => "«".to_string(),
            PageMarker::Page(n) => n.to_string(),
            PageMarker::Next => "»".to_string(),
        }
    }
}

/// Compute the pagination window.
///
/// Emits `Previous` iff the first shown number is above 1, the numbers
/// `[start, end]`, then `Next` iff `end < total`. The number range always lies
/// in `[1, total]`, holds at most `max_visible` pages and contains `current`
/// (which is clamped into `[1, total]`). No window at all when `total <= 1`.
pub fn window(current: u32, total: u32, max_visible: u32) -> Vec<PageMarker> {
    if total <= 1 {
        return Vec::new();
    }

    let max_visible = max_visible.max(1);
    let current = current.clamp(1, total);
    let half = max_visible / 2;

    let mut start = current.saturating_sub(half).max(1);
    let end = total.min(start.saturating_add(max_visible - 1));
    if end - start + 1 < max_visible {
        // Short span: pull the start down so the window stays full near the end.
        start = end.saturating_sub(max_visible - 1).max(1);
    }

    let mut markers = Vec::with_capacity((end - start + 3) as usize);
    if start > 1 {
        markers.push(PageMarker::Previous);
    }
    markers.extend((start..=end).map(PageMarker::Page));
    if end < total {
        markers.push(PageMarker::Next);
    }
    markers
}

/// Page numbers contained in a window, markers dropped.
pub fn page_numbers(markers: &[PageMarker]) -> Vec<u32> {
    markers
        .iter()
        .filter_map(|m| match m {
            PageMarker::Page(n) => Some(*n),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Next, Page, Previous};

    #[test]
    fn first_page_of_ten() {
        assert_eq!(
            window(1, 10, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Next]
        );
    }

    #[test]
    fn last_page_of_ten() {
        assert_eq!(
            window(10, 10, 5),
            vec![Previous, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn exact_fit_has_no_markers() {
        assert_eq!(
            window(5, 5, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn middle_page_is_centered() {
        assert_eq!(
            window(6, 20, 5),
            vec![Previous, Page(4), Page(5), Page(6), Page(7), Page(8), Next]
        );
    }

    #[test]
    fn near_start_extends_end() {
        assert_eq!(
            window(2, 10, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Next]
        );
    }

    #[test]
    fn near_end_pulls_start_down() {
        assert_eq!(
            window(9, 10, 5),
            vec![Previous, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn fewer_pages_than_window() {
        assert_eq!(window(2, 3, 5), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn no_window_for_single_or_zero_pages() {
        assert!(window(1, 1, 5).is_empty());
        assert!(window(1, 0, 5).is_empty());
    }

    #[test]
    fn even_window_keeps_length_bound() {
        let markers = window(5, 10, 4);
        let numbers = page_numbers(&markers);
        assert_eq!(numbers.len(), 4);
        assert!(numbers.contains(&5));
    }

    #[test]
    fn current_out_of_range_is_clamped() {
        assert_eq!(page_numbers(&window(50, 10, 5)), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_numbers(&window(0, 10, 5)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn markers_disabled_at_edges() {
        assert!(!Previous.is_enabled(1, 10));
        assert!(Previous.is_enabled(2, 10));
        assert!(!Next.is_enabled(10, 10));
        assert!(Next.is_enabled(9, 10));
        assert!(Page(3).is_enabled(1, 10));
    }

    #[test]
    fn marker_targets() {
        assert_eq!(Previous.target(4), 3);
        assert_eq!(Previous.target(1), 1);
        assert_eq!(Next.target(4), 5);
        assert_eq!(Page(7).target(4), 7);
    }

    #[test]
    fn active_marker_is_current_page_only() {
        assert!(Page(3).is_active(3));
        assert!(!Page(2).is_active(3));
        assert!(!Next.is_active(3));
    }
}
