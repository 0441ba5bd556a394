//! todo-web server binary.
//!
//! Serves the compiled front-end and the small JSON API.

use std::net::IpAddr;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use todo_web::api::{self, ApiError, Config};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Invalid configuration")]
    #[diagnostic(
        code(todo_web::server::config),
        help("Check the TODO_WEB_HOST and TODO_WEB_PORT environment variables.")
    )]
    Config(#[source] ApiError),

    #[error("Server failed")]
    #[diagnostic(code(todo_web::server::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "todo-web")]
#[command(author, version, about = "Todo web server", long_about = None)]
struct Cli {
    /// Host address to bind to (overrides TODO_WEB_HOST)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (overrides TODO_WEB_PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    api::init_tracing();

    let mut config = Config::new().map_err(BinaryError::Config)?;
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    api::run(config).await?;
    Ok(())
}
