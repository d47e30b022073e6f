//! Common functionality for paging lists of records.

/// Records shown per page when not configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page counts up to this are shown in full; above it the window collapses
pub const MAX_VISIBLE_PAGES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIndicator {
    Page(usize),
    CurrPage(usize),
    Ellipsis,
}

/// Position within a paged list, pages numbered from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: usize,
    total: usize,
}

impl Pagination {
    /// `current` is clamped into `1..=total` (or 1 when there are no pages)
    pub fn new(current: usize, total: usize) -> Self {
        Self {
            current: current.clamp(1, total.max(1)),
            total,
        }
    }

    /// Pagination for `item_count` records split into pages of `page_size`
    pub fn for_items(current: usize, item_count: usize, page_size: usize) -> Self {
        Self::new(current, page_count(item_count, page_size))
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn can_go_prev(&self) -> bool {
        self.current > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current < self.total
    }

    /// The page-number strip: the first page, the current page with its
    /// neighbours, and the last page, with ellipses over the gaps
    pub fn indicators(&self) -> Vec<PageIndicator> {
        let (current, total) = (self.current, self.total);
        let map_page = |page| {
            if page == current {
                PageIndicator::CurrPage(page)
            } else {
                PageIndicator::Page(page)
            }
        };

        if total <= MAX_VISIBLE_PAGES {
            return (1..=total).map(map_page).collect();
        }

        let mut indicators = vec![map_page(1)];

        if current > 3 {
            indicators.push(PageIndicator::Ellipsis);
        }

        let start = current.saturating_sub(1).max(2);
        let end = (current + 1).min(total - 1);
        indicators.extend((start..=end).map(map_page));

        if current + 2 < total {
            indicators.push(PageIndicator::Ellipsis);
        }

        indicators.push(map_page(total));
        indicators
    }

    /// "Page X of Y"
    pub fn info(&self) -> String {
        format!("Page {} of {}", self.current, self.total)
    }

    /// The records on the current page
    pub fn slice<'a, T>(&self, items: &'a [T], page_size: usize) -> &'a [T] {
        let page_size = page_size.max(1);
        let start = ((self.current - 1) * page_size).min(items.len());
        let end = (start + page_size).min(items.len());
        &items[start..end]
    }
}

/// Number of pages needed for `item_count` records
pub fn page_count(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1))
}

#[cfg(test)]
mod tests {
    use crate::pagination::{page_count, PageIndicator, Pagination};

    use PageIndicator::{CurrPage, Ellipsis, Page};

    #[test]
    fn shows_all_pages() {
        let got = Pagination::new(2, 5).indicators();
        assert_eq!(got, [Page(1), CurrPage(2), Page(3), Page(4), Page(5)]);
    }

    #[test]
    fn shows_trailing_ellipsis_near_start() {
        let got = Pagination::new(1, 10).indicators();
        assert_eq!(got, [CurrPage(1), Page(2), Ellipsis, Page(10)]);

        let got = Pagination::new(3, 10).indicators();
        assert_eq!(
            got,
            [Page(1), Page(2), CurrPage(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn shows_both_ellipses_in_middle() {
        let got = Pagination::new(5, 10).indicators();
        assert_eq!(
            got,
            [Page(1), Ellipsis, Page(4), CurrPage(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn shows_leading_ellipsis_near_end() {
        let got = Pagination::new(10, 10).indicators();
        assert_eq!(got, [Page(1), Ellipsis, Page(9), CurrPage(10)]);

        let got = Pagination::new(8, 10).indicators();
        assert_eq!(
            got,
            [Page(1), Ellipsis, Page(7), CurrPage(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn prev_next_availability() {
        let first = Pagination::new(1, 3);
        assert!(!first.can_go_prev());
        assert!(first.can_go_next());

        let last = Pagination::new(3, 3);
        assert!(last.can_go_prev());
        assert!(!last.can_go_next());
        assert_eq!(last.info(), "Page 3 of 3");
    }

    #[test]
    fn clamps_out_of_range_pages() {
        assert_eq!(Pagination::new(0, 4).current(), 1);
        assert_eq!(Pagination::new(9, 4).current(), 4);
        assert_eq!(Pagination::new(3, 0).current(), 1);
        assert!(Pagination::new(1, 0).indicators().is_empty());
    }

    #[test]
    fn slices_items() {
        let items: Vec<u32> = (1..=23).collect();
        assert_eq!(page_count(items.len(), 10), 3);
        assert_eq!(page_count(0, 10), 0);

        let page = Pagination::for_items(3, items.len(), 10);
        assert_eq!(page.slice(&items, 10), &[21, 22, 23]);
        assert_eq!(Pagination::for_items(1, 0, 10).slice(&items[..0], 10), &[] as &[u32]);
    }
}
