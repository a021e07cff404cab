use derive_getters::Getters;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 6;

/// A 1-based page of `page_size` elements.
#[derive(Debug, Getters, PartialEq, Clone, Copy)]
pub struct Pagination {
    page: i64,
    page_size: i64,
    offset: i64,
}

impl Pagination {
    /// Return `None` when the page or its size is lower than 1,
    /// or when the page is too far away to be addressed.
    pub fn new(page: i64, page_size: i64) -> Option<Self> {
        if page < 1 || page_size < 1 {
            return None;
        }
        let offset = (page - 1).checked_mul(page_size)?;

        Some(Self {
            page,
            page_size,
            offset,
        })
    }

    /// Minimal number of pages holding `total` elements.
    pub fn total_pages(&self, total: i64) -> i64 {
        total / self.page_size + i64::from(total % self.page_size != 0)
    }
}
