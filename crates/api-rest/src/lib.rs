//! # API REST
//!
//! REST API implementation for the filedemo service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI documentation
//! - REST-specific concerns (status codes, attachment headers, CORS)
//!
//! Uses `filedemo-core` for all filesystem work.

#![warn(rust_2018_idioms)]

mod handlers;

use axum::{response::Json, routing::get, Router};
use filedemo_core::{CoreConfig, DemoFileService};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

pub use handlers::HealthRes;

/// Application state for the REST API server
///
/// Holds the file service bound to the path resolved at startup. Cloned per request.
#[derive(Clone)]
pub struct AppState {
    files: DemoFileService,
}

#[derive(OpenApi)]
#[openapi(
    paths(handlers::health, handlers::write, handlers::download),
    components(schemas(HealthRes))
)]
pub struct ApiDoc;

/// Build the REST router for the given startup configuration.
///
/// `/write` accepts both GET and POST.
pub fn app(cfg: Arc<CoreConfig>) -> Router {
    let state = AppState {
        files: DemoFileService::new(cfg),
    };

    Router::new()
        .route("/health", get(handlers::health))
        .route("/write", get(handlers::write).post(handlers::write))
        .route("/download", get(handlers::download))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
