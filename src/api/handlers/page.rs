//! Landing page handlers.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::page::{self, Node};

#[derive(Debug, Serialize, Deserialize)]
pub struct HomePageResponse {
    /// Route the page is mounted at
    pub path: String,
    /// Markup tree of the page
    pub view: Node,
}

/// Landing page as a markup tree, for clients that don't run the front-end.
#[instrument]
pub async fn home_page() -> Json<HomePageResponse> {
    Json(HomePageResponse {
        path: "/".to_string(),
        view: page::home(),
    })
}
