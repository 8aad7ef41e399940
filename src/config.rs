//! CLI definitions and resolved run configuration.
//!
//! Each binary parses its arguments exactly once at startup and resolves them
//! into an immutable config value that is handed to the flow driver. The
//! dual-server flow resolves each server URI as flag > environment variable >
//! hardcoded local default; the single-server flow takes its URI from a
//! required flag with no environment fallback.

use clap::Parser;

/// Default geocoding server (overridden by `--geo-server` or `GEO_SERVER`).
pub const DEFAULT_GEO_SERVER: &str = "http://127.0.0.1:8001/mcp";
/// Default weather server (overridden by `--weather-server` or `WEATHER_SERVER`).
pub const DEFAULT_WEATHER_SERVER: &str = "http://127.0.0.1:8000/mcp";

/// Default coordinate pair for the single-server flow.
pub const DEFAULT_LATITUDE: f64 = 49.48;
pub const DEFAULT_LONGITUDE: f64 = 8.446;

/// CLI for `call-forecast` (dual-server flow).
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Get a weather forecast for a place by name using dual MCP servers",
    long_about = None
)]
pub struct ChainCli {
    /// Place name to look up (e.g. "Paris" or "Ludwigshafen am Rhein")
    pub place: String,

    /// Geocoding MCP server URI
    #[arg(long, env = "GEO_SERVER", default_value = DEFAULT_GEO_SERVER)]
    pub geo_server: String,

    /// Weather MCP server URI
    #[arg(long, env = "WEATHER_SERVER", default_value = DEFAULT_WEATHER_SERVER)]
    pub weather_server: String,
}

/// Resolved configuration for the dual-server flow.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub place: String,
    pub geo_server: String,
    pub weather_server: String,
}

impl ChainCli {
    /// Resolve the parsed CLI into an immutable config, rejecting blank input
    /// before any network activity.
    pub fn resolve(self) -> Result<ChainConfig, String> {
        if self.place.trim().is_empty() {
            return Err("Please provide a place name".to_string());
        }
        if self.geo_server.trim().is_empty() {
            return Err(
                "Please specify --geo-server or set GEO_SERVER to an http(s):// URI".to_string(),
            );
        }
        if self.weather_server.trim().is_empty() {
            return Err(
                "Please specify --weather-server or set WEATHER_SERVER to an http(s):// URI"
                    .to_string(),
            );
        }
        Ok(ChainConfig {
            place: self.place,
            geo_server: self.geo_server,
            weather_server: self.weather_server,
        })
    }
}

/// CLI for `get-forecast` (single-server flow).
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Call the get_forecast tool on one MCP weather server",
    long_about = None
)]
pub struct SingleCli {
    /// Weather MCP server URI (required, no environment fallback)
    #[arg(long)]
    pub server: String,

    /// Latitude to request a forecast for
    #[arg(long, default_value_t = DEFAULT_LATITUDE)]
    pub latitude: f64,

    /// Longitude to request a forecast for
    #[arg(long, default_value_t = DEFAULT_LONGITUDE)]
    pub longitude: f64,
}

/// Resolved configuration for the single-server flow.
#[derive(Debug, Clone)]
pub struct SingleConfig {
    pub server: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl SingleCli {
    pub fn resolve(self) -> Result<SingleConfig, String> {
        if self.server.trim().is_empty() {
            return Err("Please specify --server with an http(s):// URI".to_string());
        }
        Ok(SingleConfig {
            server: self.server,
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}
