//! Pagination
//!
//! Pages are 1-based. The current page is clamped to the last page so a
//! narrowing filter never leaves the table on an empty page.

/// Page sizes offered by the table
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 20, 50];

/// Table pagination state
///
/// Both fields are at least 1; construct through [`Pagination::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: PAGE_SIZE_OPTIONS[0],
        }
    }
}

/// One page of items
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Page number actually shown (after clamping)
    pub current: usize,
    pub page_size: usize,
    pub total: usize,
    pub page_count: usize,
}

impl Pagination {
    pub fn new(current: usize, page_size: usize) -> Self {
        Self {
            current: current.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based index of the first item on the current page
    pub fn offset(&self) -> usize {
        (self.current - 1) * self.page_size
    }

    /// Number of pages for `total` items (at least one)
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Move to a page, keeping the page size
    pub fn goto(self, page: usize) -> Self {
        Self::new(page, self.page_size)
    }

    /// Change the page size, keeping the first visible item on screen
    pub fn resize(self, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self::new(self.offset() / page_size + 1, page_size)
    }

    /// Clamp the current page into range for `total` items
    pub fn clamp(self, total: usize) -> Self {
        Self::new(self.current.min(self.page_count(total)), self.page_size)
    }

    /// Slice the current page out of `items`
    pub fn slice<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        let total = items.len();
        let clamped = self.clamp(total);
        let start = clamped.offset().min(total);
        let end = (start + clamped.page_size).min(total);

        Page {
            items: &items[start..end],
            current: clamped.current,
            page_size: clamped.page_size,
            total,
            page_count: clamped.page_count(total),
        }
    }
}

impl<T> Page<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.page_count
    }

    /// Human-readable range, e.g. `11-20 of 23`
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "0 of 0".to_string();
        }
        let first = (self.current - 1) * self.page_size + 1;
        let last = first + self.items.len() - 1;
        format!("{}-{} of {}", first, last, self.total)
    }
}
