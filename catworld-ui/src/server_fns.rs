//! Server functions bridging the browser to the Cat API client. The API key
//! never leaves the server.

use catworld_app::domain::{
    Favourite, ImagePage, ImageUpload, UploadedImage, Vote, VoteDirection,
};
use leptos::prelude::*;
use server_fn::codec::Json;
use server_fn::ServerFnError;

#[cfg(feature = "ssr")]
fn cat_api() -> std::sync::Arc<catworld_app::infrastructure::the_cat_api::TheCatApiClient> {
    expect_context::<catworld_app::AppContext>().cat_api.clone()
}

#[cfg(feature = "ssr")]
fn server_error(err: catworld_errors::AppError) -> ServerFnError {
    ServerFnError::new(err.to_string())
}

#[server(ListImagesFn, "/api", endpoint = "list_images")]
pub async fn list_images(page: u32, limit: u32) -> Result<ImagePage, ServerFnError> {
    use catworld_app::application::CatApi;

    tracing::debug!(page, limit, "list_images");
    cat_api()
        .list_images(page, limit)
        .await
        .map_err(server_error)
}

#[server(name = UploadImageFn, prefix = "/api", endpoint = "upload_image", input = Json)]
pub async fn upload_image(upload: ImageUpload) -> Result<UploadedImage, ServerFnError> {
    use catworld_app::application::CatApi;

    tracing::info!(
        file_name = %upload.file_name,
        size = upload.bytes.len(),
        "upload_image"
    );
    cat_api().upload_image(upload).await.map_err(server_error)
}

#[server(ListFavouritesFn, "/api", endpoint = "list_favourites")]
pub async fn list_favourites() -> Result<Vec<Favourite>, ServerFnError> {
    use catworld_app::application::CatApi;

    tracing::debug!("list_favourites");
    cat_api().list_favourites().await.map_err(server_error)
}

#[server(CreateFavouriteFn, "/api", endpoint = "create_favourite")]
pub async fn create_favourite(image_id: String) -> Result<Favourite, ServerFnError> {
    use catworld_app::application::CatApi;

    tracing::debug!(%image_id, "create_favourite");
    cat_api()
        .create_favourite(&image_id)
        .await
        .map_err(server_error)
}

#[server(DeleteFavouriteFn, "/api", endpoint = "delete_favourite")]
pub async fn delete_favourite(favourite_id: u64) -> Result<(), ServerFnError> {
    use catworld_app::application::CatApi;

    tracing::debug!(favourite_id, "delete_favourite");
    cat_api()
        .delete_favourite(favourite_id)
        .await
        .map_err(server_error)
}

#[server(ListVotesFn, "/api", endpoint = "list_votes")]
pub async fn list_votes() -> Result<Vec<Vote>, ServerFnError> {
    use catworld_app::application::CatApi;

    tracing::debug!("list_votes");
    cat_api().list_votes().await.map_err(server_error)
}

#[server(CreateVoteFn, "/api", endpoint = "create_vote")]
pub async fn create_vote(image_id: String, direction: VoteDirection) -> Result<Vote, ServerFnError> {
    use catworld_app::application::CatApi;

    tracing::debug!(%image_id, ?direction, "create_vote");
    cat_api()
        .create_vote(&image_id, direction)
        .await
        .map_err(server_error)
}
