use crate::server_fns;
use catworld_app::application::CatApi;
use catworld_app::domain::{
    Favourite, ImagePage, ImageUpload, UploadedImage, Vote, VoteDirection,
};
use catworld_errors::AppError;
use server_fn::ServerFnError;

/// [`CatApi`] as seen from the browser: every call is a server function.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnApi;

fn remote_error(err: ServerFnError) -> AppError {
    match err.to_string().parse() {
        Ok(err) => err,
        Err(never) => match never {},
    }
}

impl CatApi for ServerFnApi {
    async fn list_images(&self, page: u32, limit: u32) -> Result<ImagePage, AppError> {
        server_fns::list_images(page, limit).await.map_err(remote_error)
    }

    async fn upload_image(&self, upload: ImageUpload) -> Result<UploadedImage, AppError> {
        server_fns::upload_image(upload).await.map_err(remote_error)
    }

    async fn list_favourites(&self) -> Result<Vec<Favourite>, AppError> {
        server_fns::list_favourites().await.map_err(remote_error)
    }

    async fn create_favourite(&self, image_id: &str) -> Result<Favourite, AppError> {
        server_fns::create_favourite(image_id.to_string())
            .await
            .map_err(remote_error)
    }

    async fn delete_favourite(&self, favourite_id: u64) -> Result<(), AppError> {
        server_fns::delete_favourite(favourite_id)
            .await
            .map_err(remote_error)
    }

    async fn list_votes(&self) -> Result<Vec<Vote>, AppError> {
        server_fns::list_votes().await.map_err(remote_error)
    }

    async fn create_vote(&self, image_id: &str, direction: VoteDirection) -> Result<Vote, AppError> {
        server_fns::create_vote(image_id.to_string(), direction)
            .await
            .map_err(remote_error)
    }
}
