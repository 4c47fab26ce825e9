//! Page-window arithmetic for `GET /questions`.

pub const DEFAULT_PAGE: i64 = 1;

/// Rows `[offset, offset + limit)` of the id-ordered question list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64,
}

impl PageWindow {
    /// Returns `None` for pages below 1. Offsets saturate, so pages far past
    /// the end still describe an (empty) window.
    pub fn for_page(page: i64, page_size: u32) -> Option<Self> {
        if page < 1 {
            return None;
        }
        let limit = i64::from(page_size);
        let offset = (page - 1).saturating_mul(limit);
        Some(Self { offset, limit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(PageWindow::for_page(1, 10), Some(PageWindow { offset: 0, limit: 10 }));
    }

    #[test]
    fn later_pages_advance_by_page_size() {
        assert_eq!(PageWindow::for_page(3, 10), Some(PageWindow { offset: 20, limit: 10 }));
        assert_eq!(PageWindow::for_page(3, 8), Some(PageWindow { offset: 16, limit: 8 }));
    }

    #[test]
    fn pages_below_one_are_rejected() {
        assert_eq!(PageWindow::for_page(0, 10), None);
        assert_eq!(PageWindow::for_page(-4, 10), None);
    }

    #[test]
    fn huge_pages_saturate_instead_of_failing() {
        assert_eq!(
            PageWindow::for_page(i64::MAX, 10),
            Some(PageWindow { offset: i64::MAX, limit: 10 })
        );
        let w = PageWindow::for_page(i64::MAX / 5, 10).unwrap();
        assert_eq!(w.offset, i64::MAX);
    }
}
