//! Dual-server forecast client.
//!
//! Resolves a place name to coordinates via a geocoding MCP server, then
//! fetches the forecast for those coordinates from a weather MCP server:
//!
//! ```text
//! call-forecast "Paris"
//! call-forecast "Ludwigshafen am Rhein" --geo-server http://127.0.0.1:8001/mcp
//! ```
//!
//! Server URIs resolve as flag > `GEO_SERVER`/`WEATHER_SERVER` environment
//! variable > local default.

use clap::Parser;
use dotenvy::dotenv;
use place_forecast::config::ChainCli;
use place_forecast::flow;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    // Load .env (if present) before clap reads the environment
    let _ = dotenv();

    let config = match ChainCli::parse().resolve() {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("Configuration error: {msg}");
            std::process::exit(1);
        }
    };

    info!(
        name: "config.loaded",
        place = %config.place,
        geo_server = %config.geo_server,
        weather_server = %config.weather_server,
        "configuration resolved"
    );

    match flow::run_chain(&config).await {
        Ok(forecast) => {
            println!("\n--- Forecast Result ---\n");
            println!("{forecast}");
            println!("\n--- End ---");
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
