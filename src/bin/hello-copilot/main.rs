//! # hello-copilot Server CLI
//!
//! Command-line interface for the hello-copilot HTTP service.
//!
//! This binary builds the route table and serves it on the configured listen
//! address; all request handling lives in the library crate.

use std::io;
use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use hello_copilot_rs::http::build_router;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> io::Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();

    // Parse CLI arguments
    let cli = Cli::parse();

    let app = build_router();

    let addr: SocketAddr = cli.listen.parse().map_err(io::Error::other)?;
    tracing::info!("starting hello-copilot on http://{addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
