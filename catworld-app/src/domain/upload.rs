use serde::{Deserialize, Serialize};

/// A file picked in the browser, ready to be sent to the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }
}

/// The pending upload together with its local preview (an object URL).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub upload: ImageUpload,
    pub preview_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub original_filename: Option<String>,
    #[serde(default)]
    pub pending: u8,
    #[serde(default)]
    pub approved: u8,
}
