//! Pagination stage
//!
//! Pages are 1-indexed. Requests outside `[1, total_pages]` are clamped
//! rather than rejected, and an empty view still has one (empty) page.

use serde::{Deserialize, Serialize};

/// Number of pages needed for `len` items, never less than 1
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Slice `view` down to `page`, clamping the page first.
///
/// Returns the slice together with the total page count.
pub fn paginate<T>(view: &[T], page: usize, page_size: usize) -> (&[T], usize) {
    let page_size = page_size.max(1);
    let total = total_pages(view.len(), page_size);
    let page = page.clamp(1, total);
    let start = ((page - 1) * page_size).min(view.len());
    let end = (page * page_size).min(view.len());
    (&view[start..end], total)
}

/// The "Showing X to Y of N entries" summary for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    /// 1-based position of the first visible row, 0 when nothing is visible
    pub start: usize,
    /// 1-based position of the last visible row
    pub end: usize,
    /// Length of the filtered view
    pub total: usize,
}

impl std::fmt::Display for PageRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} entries",
            self.start, self.end, self.total
        )
    }
}

/// Page state: the current page and the fixed page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (1-indexed)
    current_page: usize,
    /// Records per page
    page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total page count for a view of `len` items
    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.page_size)
    }

    /// Back to page 1; used whenever the filtered view changes
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pull the current page back into range after the view shrank
    pub fn clamp_to(&mut self, len: usize) {
        self.current_page = self.current_page.clamp(1, self.total_pages(len));
    }

    /// Jump to `page`, clamped into `[1, total_pages]`.
    ///
    /// Accepts any integer so callers can forward raw input; zero and
    /// negative values land on page 1.
    pub fn go_to(&mut self, page: i64, len: usize) {
        let total = self.total_pages(len);
        self.current_page = if page < 1 {
            1
        } else {
            usize::try_from(page).unwrap_or(usize::MAX).min(total)
        };
    }

    pub fn first(&mut self) {
        self.current_page = 1;
    }

    pub fn last(&mut self, len: usize) {
        self.current_page = self.total_pages(len);
    }

    pub fn next(&mut self, len: usize) {
        if self.can_go_next(len) {
            self.current_page += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.can_go_previous() {
            self.current_page -= 1;
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self, len: usize) -> bool {
        self.current_page < self.total_pages(len)
    }

    /// Page numbers for numbered page buttons
    pub fn page_numbers(&self, len: usize) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages(len)
    }

    /// Index range into the view covered by the current page
    pub fn bounds(&self, len: usize) -> std::ops::Range<usize> {
        let page = self.current_page.clamp(1, self.total_pages(len));
        let start = ((page - 1) * self.page_size).min(len);
        let end = (page * self.page_size).min(len);
        start..end
    }

    pub fn range(&self, len: usize) -> PageRange {
        let bounds = self.bounds(len);
        PageRange {
            start: if bounds.is_empty() { 0 } else { bounds.start + 1 },
            end: bounds.end,
            total: len,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(crate::DEFAULT_PAGE_SIZE)
    }
}
