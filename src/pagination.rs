//! Page window over the held readings.

use crate::consts::cli_consts::view::{DEFAULT_ITEMS_PER_PAGE, PAGE_SIZES};

/// Number of pages needed for `len` items, `ceil(len / page_size)`.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// The items shown on a 1-based `page`. Out-of-range pages yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Current page and page size of the readings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl Pagination {
    /// Unsupported sizes fall back to the default.
    pub fn new(page_size: usize) -> Self {
        let page_size = if PAGE_SIZES.contains(&page_size) {
            page_size
        } else {
            DEFAULT_ITEMS_PER_PAGE
        };
        Self {
            current_page: 1,
            page_size,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.page_size)
    }

    fn last_page(&self, len: usize) -> usize {
        self.total_pages(len).max(1)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page_slice(items, self.current_page, self.page_size)
    }

    pub fn next_page(&mut self, len: usize) {
        self.go_to(self.current_page + 1, len);
    }

    pub fn prev_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn first_page(&mut self) {
        self.current_page = 1;
    }

    pub fn last_page_of(&mut self, len: usize) {
        self.current_page = self.last_page(len);
    }

    /// Jump to a page, clamped to `[1, total_pages]`.
    pub fn go_to(&mut self, page: usize, len: usize) {
        self.current_page = page.clamp(1, self.last_page(len));
    }

    /// Change the page size and return to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        if PAGE_SIZES.contains(&page_size) {
            self.page_size = page_size;
        }
        self.current_page = 1;
    }

    /// Step to the next offered page size, wrapping around.
    pub fn cycle_page_size(&mut self) {
        let idx = PAGE_SIZES
            .iter()
            .position(|&size| size == self.page_size)
            .unwrap_or(0);
        self.set_page_size(PAGE_SIZES[(idx + 1) % PAGE_SIZES.len()]);
    }

    /// Keep the window inside the data after it grew or shrank.
    pub fn clamp_to(&mut self, len: usize) {
        self.go_to(self.current_page, len);
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.current_page < self.total_pages(len)
    }
}
