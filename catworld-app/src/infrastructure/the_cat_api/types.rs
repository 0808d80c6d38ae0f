use crate::domain::PageMeta;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

pub const PAGINATION_COUNT: &str = "pagination-count";
pub const PAGINATION_LIMIT: &str = "pagination-limit";
pub const PAGINATION_PAGE: &str = "pagination-page";

#[derive(Debug, Serialize)]
pub struct CreateFavouriteRequest<'a> {
    pub image_id: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CreateVoteRequest<'a> {
    pub value: i32,
    pub image_id: &'a str,
}

/// Body returned by the create endpoints, e.g. `{"message":"SUCCESS","id":123}`.
#[derive(Debug, Deserialize)]
pub struct CreatedResponse {
    pub id: u64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Missing or malformed headers read as zero.
pub fn page_meta(headers: &HeaderMap) -> PageMeta {
    PageMeta::new(
        header_u32(headers, PAGINATION_COUNT),
        header_u32(headers, PAGINATION_LIMIT),
        header_u32(headers, PAGINATION_PAGE),
    )
}

fn header_u32(headers: &HeaderMap, name: &str) -> u32 {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}
