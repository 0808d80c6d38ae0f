use super::types::{page_meta, CreateFavouriteRequest, CreateVoteRequest, CreatedResponse};
use crate::application::CatApi;
use crate::domain::{Favourite, ImagePage, ImageUpload, UploadedImage, Vote, VoteDirection};
use crate::infrastructure::config::CatApiConfig;
use catworld_errors::AppError;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

const API_KEY_HEADER: &str = "x-api-key";
const UPLOAD_FIELD: &str = "file";
const DEFAULT_UPLOAD_TYPE: &str = "application/octet-stream";

pub struct TheCatApiClient {
    http_client: reqwest::Client,
    config: CatApiConfig,
}

impl TheCatApiClient {
    pub fn new(config: CatApiConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client
            .request(method, self.config.endpoint(path))
            .header(API_KEY_HEADER, &self.config.api_key)
    }

    async fn send(&self, operation: &str, request: RequestBuilder) -> Result<Response, AppError> {
        tracing::debug!("Cat API: {}", operation);

        let response = request.send().await.map_err(|e| {
            tracing::error!("Cat API {} failed: {}", operation, e);
            AppError::remote(format!("{operation}: {e}"))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Cat API error on {}: {} - {}", operation, status, body);
            return Err(AppError::remote(format!("{operation}: {status}")));
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(operation: &str, response: Response) -> Result<T, AppError> {
        response.json().await.map_err(|e| {
            tracing::error!("Cat API {} returned an unreadable body: {}", operation, e);
            AppError::remote(format!("{operation}: {e}"))
        })
    }
}

impl CatApi for TheCatApiClient {
    async fn list_images(&self, page: u32, limit: u32) -> Result<ImagePage, AppError> {
        let request = self.request(Method::GET, "images").query(&[
            ("limit", limit.to_string()),
            ("page", page.to_string()),
            ("order", "DESC".to_string()),
        ]);
        let response = self.send("list images", request).await?;
        let meta = page_meta(response.headers());
        let images = Self::decode("list images", response).await?;

        Ok(ImagePage { images, meta })
    }

    async fn upload_image(&self, upload: ImageUpload) -> Result<UploadedImage, AppError> {
        let content_type = upload
            .content_type
            .as_deref()
            .unwrap_or(DEFAULT_UPLOAD_TYPE)
            .to_string();
        let part = reqwest::multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&content_type)
            .map_err(|e| AppError::remote(format!("upload image: {e}")))?;
        let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD, part);

        let request = self.request(Method::POST, "images/upload").multipart(form);
        let response = self.send("upload image", request).await?;
        Self::decode("upload image", response).await
    }

    async fn list_favourites(&self) -> Result<Vec<Favourite>, AppError> {
        let response = self
            .send("list favourites", self.request(Method::GET, "favourites"))
            .await?;
        Self::decode("list favourites", response).await
    }

    async fn create_favourite(&self, image_id: &str) -> Result<Favourite, AppError> {
        let request = self
            .request(Method::POST, "favourites")
            .json(&CreateFavouriteRequest { image_id });
        let response = self.send("create favourite", request).await?;
        let created: CreatedResponse = Self::decode("create favourite", response).await?;
        tracing::debug!(id = created.id, message = ?created.message, "favourite created");

        Ok(Favourite::new(created.id, image_id))
    }

    async fn delete_favourite(&self, favourite_id: u64) -> Result<(), AppError> {
        let path = format!("favourites/{favourite_id}");
        self.send("delete favourite", self.request(Method::DELETE, &path))
            .await?;
        Ok(())
    }

    async fn list_votes(&self) -> Result<Vec<Vote>, AppError> {
        let response = self.send("list votes", self.request(Method::GET, "votes")).await?;
        Self::decode("list votes", response).await
    }

    async fn create_vote(&self, image_id: &str, direction: VoteDirection) -> Result<Vote, AppError> {
        let value = direction.value();
        let request = self
            .request(Method::POST, "votes")
            .json(&CreateVoteRequest { value, image_id });
        let response = self.send("create vote", request).await?;
        let created: CreatedResponse = Self::decode("create vote", response).await?;

        Ok(Vote::new(created.id, image_id, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PageMeta;
    use axum::extract::{Multipart, Path, Query, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::{IntoResponse, Response as AxumResponse};
    use axum::routing::{delete, get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    const TEST_KEY: &str = "test-key";

    #[derive(Default)]
    struct Recorded {
        image_queries: Vec<HashMap<String, String>>,
        favourite_bodies: Vec<Value>,
        vote_bodies: Vec<Value>,
        deleted: Vec<u64>,
        uploads: Vec<(String, Option<String>, Option<String>, usize)>,
    }

    type Shared = Arc<Mutex<Recorded>>;

    fn authorized(headers: &HeaderMap) -> bool {
        headers.get("x-api-key").and_then(|v| v.to_str().ok()) == Some(TEST_KEY)
    }

    async fn list_images(
        State(rec): State<Shared>,
        headers: HeaderMap,
        Query(query): Query<HashMap<String, String>>,
    ) -> AxumResponse {
        if !authorized(&headers) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        rec.lock().unwrap().image_queries.push(query);
        let images: Vec<Value> = (0..12)
            .map(|i| json!({"breeds": [], "id": format!("cat-{i}"), "url": format!("https://cdn.example/cat-{i}.jpg"), "width": 640, "height": 480}))
            .collect();
        (
            [
                ("pagination-count", "24"),
                ("pagination-limit", "12"),
                ("pagination-page", "0"),
            ],
            Json(images),
        )
            .into_response()
    }

    async fn upload(State(rec): State<Shared>, headers: HeaderMap, mut multipart: Multipart) -> AxumResponse {
        if !authorized(&headers) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        let mut received = Vec::new();
        while let Ok(Some(field)) = multipart.next_field().await {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let len = field.bytes().await.map(|b| b.len()).unwrap_or(0);
            received.push((name, file_name, content_type, len));
        }
        rec.lock().unwrap().uploads.extend(received);
        Json(json!({
            "id": "up1",
            "url": "https://cdn.example/up1.png",
            "width": 4,
            "height": 4,
            "original_filename": "tom.png",
            "pending": 0,
            "approved": 1
        }))
        .into_response()
    }

    async fn list_favourites(headers: HeaderMap) -> AxumResponse {
        if !authorized(&headers) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        Json(json!([
            {"id": 1, "user_id": "u", "image_id": "abc", "sub_id": null, "created_at": "2024-01-02T03:04:05.000Z", "image": {"id": "abc", "url": "https://cdn.example/abc.jpg"}},
            {"id": 2, "user_id": "u", "image_id": "def", "sub_id": null, "created_at": "2024-01-02T03:04:06.000Z", "image": {}}
        ]))
        .into_response()
    }

    async fn create_favourite(State(rec): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> AxumResponse {
        if !authorized(&headers) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        rec.lock().unwrap().favourite_bodies.push(body);
        Json(json!({"message": "SUCCESS", "id": 99})).into_response()
    }

    async fn delete_favourite(State(rec): State<Shared>, headers: HeaderMap, Path(id): Path<u64>) -> AxumResponse {
        if !authorized(&headers) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        rec.lock().unwrap().deleted.push(id);
        Json(json!({"message": "SUCCESS"})).into_response()
    }

    async fn list_votes(headers: HeaderMap) -> AxumResponse {
        if !authorized(&headers) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        Json(json!([
            {"id": 10, "image_id": "abc", "sub_id": null, "value": 1},
            {"id": 11, "image_id": "abc", "sub_id": null, "value": 1},
            {"id": 12, "image_id": "abc", "sub_id": null, "value": 0}
        ]))
        .into_response()
    }

    async fn create_vote(State(rec): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> AxumResponse {
        if !authorized(&headers) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        let value = body["value"].clone();
        rec.lock().unwrap().vote_bodies.push(body);
        Json(json!({"message": "SUCCESS", "id": 31, "image_id": "abc", "value": value, "country_code": "NL"}))
            .into_response()
    }

    fn mock_cat_api(rec: Shared) -> Router {
        let v1 = Router::new()
            .route("/images", get(list_images))
            .route("/images/upload", post(upload))
            .route("/favourites", get(list_favourites).post(create_favourite))
            .route("/favourites/{id}", delete(delete_favourite))
            .route("/votes", get(list_votes).post(create_vote))
            .with_state(rec);
        Router::new().nest("/v1", v1)
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn client_for(rec: &Shared, key: &str) -> TheCatApiClient {
        let base = serve(mock_cat_api(rec.clone())).await;
        TheCatApiClient::new(CatApiConfig::new(&format!("{base}/v1"), key).unwrap())
    }

    #[tokio::test]
    async fn test_list_images_reads_pagination_headers() {
        let rec = Shared::default();
        let client = client_for(&rec, TEST_KEY).await;

        let page = client.list_images(0, 12).await.unwrap();

        assert_eq!(page.images.len(), 12);
        assert_eq!(page.meta, PageMeta::new(24, 12, 0));
        assert!(page.meta.has_next());

        let recorded = rec.lock().unwrap();
        let query = &recorded.image_queries[0];
        assert_eq!(query.get("limit").map(String::as_str), Some("12"));
        assert_eq!(query.get("page").map(String::as_str), Some("0"));
        assert_eq!(query.get("order").map(String::as_str), Some("DESC"));
    }

    #[tokio::test]
    async fn test_missing_pagination_headers_read_as_zero() {
        let router = Router::new().route("/images", get(|| async { Json(json!([])) }));
        let base = serve(router).await;
        let client = TheCatApiClient::new(CatApiConfig::new(&base, TEST_KEY).unwrap());

        let page = client.list_images(3, 12).await.unwrap();

        assert!(page.images.is_empty());
        assert_eq!(page.meta, PageMeta::default());
        assert!(!page.meta.has_next());
    }

    #[tokio::test]
    async fn test_wrong_api_key_is_remote_failure() {
        let rec = Shared::default();
        let client = client_for(&rec, "wrong-key").await;

        let err = client.list_favourites().await.unwrap_err();

        assert!(matches!(err, AppError::RemoteFailed(_)));
        assert!(err.reason().contains("401"));
    }

    #[tokio::test]
    async fn test_server_error_is_remote_failure() {
        let router = Router::new().route(
            "/votes",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = serve(router).await;
        let client = TheCatApiClient::new(CatApiConfig::new(&base, TEST_KEY).unwrap());

        let err = client.list_votes().await.unwrap_err();

        assert_eq!(err, AppError::remote("list votes: 500 Internal Server Error"));
    }

    #[tokio::test]
    async fn test_transport_failure_is_remote_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = TheCatApiClient::new(CatApiConfig::new(&format!("http://{addr}/v1"), TEST_KEY).unwrap());

        let err = client.create_favourite("abc").await.unwrap_err();

        assert!(err.reason().starts_with("create favourite"));
    }

    #[tokio::test]
    async fn test_list_favourites_decodes_collection() {
        let rec = Shared::default();
        let client = client_for(&rec, TEST_KEY).await;

        let favourites = client.list_favourites().await.unwrap();

        assert_eq!(favourites.len(), 2);
        assert_eq!(favourites[0].image_id, "abc");
        assert!(favourites[0].created_at.is_some());
    }

    #[tokio::test]
    async fn test_create_favourite_posts_image_id() {
        let rec = Shared::default();
        let client = client_for(&rec, TEST_KEY).await;

        let favourite = client.create_favourite("abc").await.unwrap();

        assert_eq!(favourite.id, 99);
        assert_eq!(favourite.image_id, "abc");
        assert_eq!(rec.lock().unwrap().favourite_bodies, vec![json!({"image_id": "abc"})]);
    }

    #[tokio::test]
    async fn test_delete_favourite_targets_id() {
        let rec = Shared::default();
        let client = client_for(&rec, TEST_KEY).await;

        client.delete_favourite(232413577).await.unwrap();

        assert_eq!(rec.lock().unwrap().deleted, vec![232413577]);
    }

    #[tokio::test]
    async fn test_create_vote_sends_wire_value() {
        let rec = Shared::default();
        let client = client_for(&rec, TEST_KEY).await;

        let vote = client.create_vote("abc", VoteDirection::Down).await.unwrap();

        assert_eq!(vote, Vote::new(31, "abc", 0));
        assert_eq!(
            rec.lock().unwrap().vote_bodies,
            vec![json!({"value": 0, "image_id": "abc"})]
        );
    }

    #[tokio::test]
    async fn test_list_votes_tallies() {
        let rec = Shared::default();
        let client = client_for(&rec, TEST_KEY).await;

        let votes = client.list_votes().await.unwrap();

        assert_eq!(crate::domain::tally(&votes, "abc"), 1);
    }

    #[tokio::test]
    async fn test_upload_sends_multipart_file_field() {
        let rec = Shared::default();
        let client = client_for(&rec, TEST_KEY).await;
        let upload = ImageUpload::new("tom.png", Some("image/png".to_string()), vec![1, 2, 3, 4, 5]);

        let uploaded = client.upload_image(upload).await.unwrap();

        assert_eq!(uploaded.id, "up1");
        assert_eq!(uploaded.approved, 1);
        assert_eq!(
            rec.lock().unwrap().uploads,
            vec![(
                "file".to_string(),
                Some("tom.png".to_string()),
                Some("image/png".to_string()),
                5
            )]
        );
    }
}
