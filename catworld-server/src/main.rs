mod shell;

use axum::{extract::DefaultBodyLimit, routing::post, Router};
use catworld_app::AppContext;
use catworld_ui::server_fns::{
    CreateFavouriteFn, CreateVoteFn, DeleteFavouriteFn, ListFavouritesFn, ListImagesFn,
    ListVotesFn, UploadImageFn,
};
use catworld_ui::App;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use tower_http::compression::CompressionLayer;

// Uploads travel as JSON byte arrays, several times the file size.
const MAX_REQUEST_BYTES: usize = 64 * 1024 * 1024;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = match AppContext::from_env() {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<ListImagesFn>();
    server_fn::axum::register_explicit::<UploadImageFn>();
    server_fn::axum::register_explicit::<ListFavouritesFn>();
    server_fn::axum::register_explicit::<CreateFavouriteFn>();
    server_fn::axum::register_explicit::<DeleteFavouriteFn>();
    server_fn::axum::register_explicit::<ListVotesFn>();
    server_fn::axum::register_explicit::<CreateVoteFn>();
    tracing::info!("Registered Cat API server functions");

    let app = Router::new()
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell::shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell::shell))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
