mod cat_api;
pub mod gallery;
pub mod upload;

#[cfg(test)]
mod fake_api;

pub use cat_api::CatApi;
pub use gallery::{GalleryState, SyncFailure, PAGE_SIZE};
pub use upload::{UploadForm, UploadOutcome};
