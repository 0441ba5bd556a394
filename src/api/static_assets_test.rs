use crate::api::static_assets::*;
use axum::http::{StatusCode, header};

fn content_type(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_root_serves_html() {
    let uri = "/".parse().unwrap();
    let response = serve_frontend(uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/html"));
}

#[tokio::test]
async fn test_api_routes_return_404() {
    let uri = "/api/v1/missing".parse().unwrap();
    let response = serve_frontend(uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bare_api_prefix_returns_404() {
    let uri = "/api".parse().unwrap();
    let response = serve_frontend(uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_todo_list_route_falls_back_to_html() {
    let uri = "/todo-list".parse().unwrap();
    let response = serve_frontend(uri).await;
    // Should serve index.html (200) for client-side routing
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/html"));
}

#[tokio::test]
async fn test_html_fallback_is_not_cached() {
    let uri = "/todo-list".parse().unwrap();
    let response = serve_frontend(uri).await;
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-cache"
    );
}
