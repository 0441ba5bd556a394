//! Embedded frontend assets for production builds.
//!
//! In release mode: Assets are embedded into the binary at compile time.
//! In debug mode: rust-embed reads from filesystem (dist/) at runtime.

use axum::{
    body::Body,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use tracing::warn;

use crate::page::home_document;

const DOCUMENT_TITLE: &str = "todo-web";

/// Embedded frontend assets (WASM, JS, CSS, HTML)
///
/// Folder points to Trunk's output directory. It may be absent in a fresh
/// checkout, in which case only the server-rendered landing page is served.
#[derive(RustEmbed)]
#[folder = "dist/"]
#[allow_missing = true]
#[include = "*.html"]
#[include = "*.js"]
#[include = "*.wasm"]
#[include = "*.css"]
#[include = "snippets/**/*"]
struct FrontendAssets;

/// Serve embedded frontend assets with SPA fallback routing.
///
/// Routing logic:
/// 1. Unmatched `api/` paths are 404
/// 2. Try exact file match (e.g., /style.css, /app.wasm)
/// 3. Fallback to index.html for client routes (e.g., /todo-list)
/// 4. Without index.html, serve the server-rendered landing page
pub async fn serve_frontend(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if path == "api" || path.starts_with("api/") {
        return StatusCode::NOT_FOUND.into_response();
    }

    let asset_path = if path.is_empty() { "index.html" } else { path };

    if let Some(content) = FrontendAssets::get(asset_path) {
        let mime = mime_guess::from_path(asset_path).first_or_octet_stream();
        return (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, mime.to_string()),
                // 1 year for hashed assets
                (header::CACHE_CONTROL, "public, max-age=31536000".to_string()),
            ],
            Body::from(content.data),
        )
            .into_response();
    }

    match FrontendAssets::get("index.html") {
        Some(index) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/html; charset=utf-8"),
                (header::CACHE_CONTROL, "no-cache"),
            ],
            Body::from(index.data),
        )
            .into_response(),
        None => {
            warn!(
                path = asset_path,
                "Frontend bundle missing, serving server-rendered landing page"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/html; charset=utf-8"),
                    (header::CACHE_CONTROL, "no-cache"),
                ],
                home_document(DOCUMENT_TITLE),
            )
                .into_response()
        }
    }
}
