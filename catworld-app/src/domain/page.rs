use super::Image;
use serde::{Deserialize, Serialize};

/// Pagination bounds as reported by the `Pagination-*` response headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub count: u32,
    pub limit: u32,
    pub page: u32,
}

impl PageMeta {
    pub fn new(count: u32, limit: u32, page: u32) -> Self {
        Self { count, limit, page }
    }

    /// Forward navigation is only offered while the total exceeds one page.
    pub fn has_next(&self) -> bool {
        self.count > self.limit
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagePage {
    pub images: Vec<Image>,
    pub meta: PageMeta,
}
