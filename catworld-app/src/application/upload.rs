use super::{CatApi, SyncFailure};
use crate::domain::{ImageUpload, Notice, SelectedFile, UploadedImage};
use catworld_errors::AppError;

pub const UPLOAD_SUCCEEDED: &str = "Upload successful";

/// State of the upload page: at most one selected file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    selected: Option<SelectedFile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadOutcome {
    pub notice: Notice,
    pub uploaded: Option<UploadedImage>,
    /// Selection cleared by a successful upload, so its preview can be released.
    pub released: Option<SelectedFile>,
}

impl UploadOutcome {
    pub fn return_to_listing(&self) -> bool {
        self.uploaded.is_some()
    }
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `file`, handing back the selection it replaces.
    pub fn select(&mut self, file: SelectedFile) -> Option<SelectedFile> {
        self.selected.replace(file)
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.selected.as_ref().map(|file| file.preview_url.as_str())
    }

    pub fn can_submit(&self) -> bool {
        self.selected.is_some()
    }

    pub fn pending_upload(&self) -> Option<ImageUpload> {
        self.selected.as_ref().map(|file| file.upload.clone())
    }

    /// Applies the upload result. Success clears the selection; failure keeps
    /// it so the user can retry.
    pub fn finish(&mut self, result: Result<UploadedImage, AppError>) -> UploadOutcome {
        match result {
            Ok(uploaded) => {
                tracing::info!(image_id = %uploaded.id, "image uploaded");
                UploadOutcome {
                    notice: Notice::success(UPLOAD_SUCCEEDED),
                    uploaded: Some(uploaded),
                    released: self.selected.take(),
                }
            }
            Err(err) => {
                tracing::warn!("upload failed: {}", err);
                UploadOutcome {
                    notice: SyncFailure::Upload.notice(),
                    uploaded: None,
                    released: None,
                }
            }
        }
    }
}

/// Sends the selected file. Returns `None` without touching the API when
/// nothing is selected.
pub async fn submit<A: CatApi>(
    api: &A,
    form: &UploadForm,
) -> Option<Result<UploadedImage, AppError>> {
    let upload = form.pending_upload()?;
    Some(api.upload_image(upload).await)
}
