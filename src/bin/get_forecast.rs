//! Single-server forecast client.
//!
//! Calls the `get_forecast` tool on one weather MCP server with a coordinate
//! pair and prints the result:
//!
//! ```text
//! get-forecast --server http://127.0.0.1:8000/mcp
//! get-forecast --server http://127.0.0.1:8000/mcp --latitude 48.8566 --longitude 2.3522
//! ```
//!
//! If the server exposes no matching tool this reports it and exits cleanly.

use clap::Parser;
use dotenvy::dotenv;
use place_forecast::config::SingleCli;
use place_forecast::flow;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    let _ = dotenv();

    let config = match SingleCli::parse().resolve() {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("Configuration error: {msg}");
            std::process::exit(1);
        }
    };

    info!(
        name: "config.loaded",
        server = %config.server,
        latitude = config.latitude,
        longitude = config.longitude,
        "configuration resolved"
    );

    match flow::run_single(&config).await {
        Ok(Some(forecast)) => println!("{forecast}"),
        Ok(None) => println!("No forecast tool available on this server."),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
