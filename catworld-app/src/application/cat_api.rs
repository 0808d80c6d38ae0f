use crate::domain::{Favourite, ImagePage, ImageUpload, UploadedImage, Vote, VoteDirection};
use catworld_errors::AppError;

/// The remote resources the gallery is synchronised against.
///
/// Implemented by the reqwest client on the server and by the server
/// function bridge in the browser.
#[allow(async_fn_in_trait)]
pub trait CatApi {
    async fn list_images(&self, page: u32, limit: u32) -> Result<ImagePage, AppError>;

    async fn upload_image(&self, upload: ImageUpload) -> Result<UploadedImage, AppError>;

    async fn list_favourites(&self) -> Result<Vec<Favourite>, AppError>;

    async fn create_favourite(&self, image_id: &str) -> Result<Favourite, AppError>;

    async fn delete_favourite(&self, favourite_id: u64) -> Result<(), AppError>;

    async fn list_votes(&self) -> Result<Vec<Vote>, AppError>;

    async fn create_vote(&self, image_id: &str, direction: VoteDirection) -> Result<Vote, AppError>;
}
