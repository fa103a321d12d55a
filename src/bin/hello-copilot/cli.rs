//! Command-line interface definitions for the hello-copilot server.

use clap::Parser;

/// Command-line arguments for the hello-copilot server.
#[derive(Debug, Parser)]
#[command(name = "hello-copilot")]
#[command(
    author,
    version,
    about = "Minimal JSON API: welcome page, health check, and integer sum"
)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub listen: String,
}
