//! Pagination Helpers

use crate::models::FeaturePage;

/// Number of pages needed for `total_count` rows
pub fn page_count(total_count: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Navigation state derived from the current page and the last response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub page_count: u32,
    pub has_previous: bool,
    pub has_next: bool,
}

impl Pager {
    /// `fallback_page_size` is used when the server reports a page size of 0
    pub fn new(page: u32, data: Option<&FeaturePage>, fallback_page_size: u32) -> Self {
        let Some(data) = data else {
            return Self {
                page,
                page_count: 0,
                has_previous: page > 1,
                has_next: false,
            };
        };
        let page_size = if data.page_size == 0 { fallback_page_size } else { data.page_size };
        let page_count = page_count(data.total_count, page_size);
        let rows = data.features.len() as u32;
        // A short page means the end, unless the total says otherwise
        let short_page = rows < page_size && page >= page_count;
        Self {
            page,
            page_count,
            has_previous: page > 1,
            has_next: rows > 0 && !short_page,
        }
    }

    pub fn label(&self) -> String {
        format!("Sida {} av {}", self.page, self.page_count)
    }
}
