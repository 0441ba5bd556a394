mod handlers;
pub mod routes;
pub mod static_assets;

#[cfg(test)]
mod static_assets_test;

use std::env;
use std::net::IpAddr;

use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use handlers::{HealthResponse, HomePageResponse};

const HOST_ENV: &str = "TODO_WEB_HOST";
const PORT_ENV: &str = "TODO_WEB_PORT";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("Invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
        }
    }
}

impl Config {
    /// Defaults overridden by `TODO_WEB_HOST` / `TODO_WEB_PORT` when set.
    pub fn new() -> Result<Self, ApiError> {
        let mut config = Self::default();

        if let Ok(value) = env::var(HOST_ENV) {
            config.host = value.parse().map_err(|_| ApiError::InvalidEnv {
                name: HOST_ENV,
                value: value.clone(),
            })?;
        }

        if let Ok(value) = env::var(PORT_ENV) {
            config.port = value.parse().map_err(|_| ApiError::InvalidEnv {
                name: PORT_ENV,
                value: value.clone(),
            })?;
        }

        Ok(config)
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the server with the given configuration
pub async fn run(config: Config) -> Result<(), ApiError> {
    let app = routes::create_router().layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ApiError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(ApiError::Serve)?;
    Ok(())
}
