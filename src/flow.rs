//! Orchestration drivers for the two forecast flows.
//!
//! Both flows share one pattern: connect, list tools, select by substring,
//! invoke, take the first text item. The dual-server flow runs that pattern
//! twice in strict producer/consumer order (the weather session is never
//! even connected unless geocoding produced coordinates), and every acquired
//! session is closed on success and failure alike before the flow moves on.

use crate::config::{ChainConfig, SingleConfig};
use crate::error::ClientError;
use crate::geocode::{Coordinates, extract_coordinates};
use crate::mcp::select::select_tool;
use crate::mcp::session::{McpSession, ToolSession, first_text};
use serde_json::json;
use tracing::{info, warn};

/// Substring identifying the geocoding tool on the geo server.
pub const GEOCODE_TOOL_PATTERN: &str = "forward_geocode";
/// Substring identifying the forecast tool on the weather server.
pub const FORECAST_TOOL_PATTERN: &str = "get_forecast";

/// Resolve a place name to coordinates through an open geo session.
///
/// A missing `forward_geocode` tool is fatal here, as is a reply the
/// coordinate extractor cannot parse.
pub async fn geocode_place(
    session: &dyn ToolSession,
    server: &str,
    place: &str,
) -> anyhow::Result<Coordinates> {
    let names = session.list_tool_names().await?;
    info!(name: "mcp.tools.listed", server = %server, tools = ?names, "geo tools discovered");

    let tool = select_tool(&names, GEOCODE_TOOL_PATTERN).ok_or_else(|| {
        ClientError::ToolNotFound {
            pattern: GEOCODE_TOOL_PATTERN.to_string(),
            server: server.to_string(),
        }
    })?;

    info!(name: "geocode.call", tool = %tool, query = %place, "calling geocoding tool");
    let items = session
        .call_tool(tool, json!({ "query": place }))
        .await
        .map_err(|source| ClientError::ToolCall {
            name: tool.to_string(),
            source,
        })?;

    let text = first_text(&items).ok_or_else(|| ClientError::EmptyResult {
        name: tool.to_string(),
    })?;
    info!(name: "geocode.reply", text = %text, "geocoding response");

    let coords = extract_coordinates(text)?;
    info!(
        name: "geocode.extracted",
        latitude = coords.latitude,
        longitude = coords.longitude,
        "coordinates extracted"
    );

    Ok(coords)
}

/// Fetch the forecast for a coordinate pair through an open weather session.
///
/// Returns the first text item of the tool result verbatim.
pub async fn fetch_forecast(
    session: &dyn ToolSession,
    server: &str,
    coords: Coordinates,
) -> anyhow::Result<String> {
    let names = session.list_tool_names().await?;
    info!(name: "mcp.tools.listed", server = %server, tools = ?names, "weather tools discovered");

    let tool = select_tool(&names, FORECAST_TOOL_PATTERN).ok_or_else(|| {
        ClientError::ToolNotFound {
            pattern: FORECAST_TOOL_PATTERN.to_string(),
            server: server.to_string(),
        }
    })?;

    info!(
        name: "forecast.call",
        tool = %tool,
        latitude = coords.latitude,
        longitude = coords.longitude,
        "calling forecast tool"
    );
    let items = session
        .call_tool(
            tool,
            json!({ "latitude": coords.latitude, "longitude": coords.longitude }),
        )
        .await
        .map_err(|source| ClientError::ToolCall {
            name: tool.to_string(),
            source,
        })?;

    let text = first_text(&items).ok_or_else(|| ClientError::EmptyResult {
        name: tool.to_string(),
    })?;

    Ok(text.to_string())
}

/// Run the dual-server flow: geocode the place, then fetch its forecast.
pub async fn run_chain(config: &ChainConfig) -> anyhow::Result<String> {
    run_chain_with(config, |uri| async move {
        let session = McpSession::connect(&uri).await?;
        Ok(Box::new(session) as Box<dyn ToolSession>)
    })
    .await
}

/// Dual-server flow over an arbitrary session connector.
///
/// The connector seam lets tests drive the whole chain with in-memory
/// sessions. States run strictly in order: a geocoding failure propagates
/// before the weather connector is ever invoked, and each session is closed
/// on every path out of its state.
pub async fn run_chain_with<C, F>(config: &ChainConfig, connect: C) -> anyhow::Result<String>
where
    C: Fn(String) -> F,
    F: Future<Output = anyhow::Result<Box<dyn ToolSession>>>,
{
    info!(name: "flow.geocode.start", place = %config.place, server = %config.geo_server, "looking up coordinates");
    let geo = connect(config.geo_server.clone()).await?;
    let resolved = geocode_place(geo.as_ref(), &config.geo_server, &config.place).await;
    geo.close().await;
    let coords = resolved?;

    info!(name: "flow.forecast.start", place = %config.place, server = %config.weather_server, "fetching forecast");
    let weather = connect(config.weather_server.clone()).await?;
    let outcome = fetch_forecast(weather.as_ref(), &config.weather_server, coords).await;
    weather.close().await;
    outcome
}

/// Run the single-server flow against one weather server.
pub async fn run_single(config: &SingleConfig) -> anyhow::Result<Option<String>> {
    let session = McpSession::connect(&config.server).await?;
    run_single_with(Box::new(session) as Box<dyn ToolSession>, config).await
}

/// Single-server flow over an already-connected session.
///
/// Unlike the dual flow, a missing forecast tool is reported and the flow
/// returns `Ok(None)` instead of failing.
pub async fn run_single_with(
    session: Box<dyn ToolSession>,
    config: &SingleConfig,
) -> anyhow::Result<Option<String>> {
    let outcome = single_inner(session.as_ref(), config).await;
    session.close().await;
    outcome
}

async fn single_inner(
    session: &dyn ToolSession,
    config: &SingleConfig,
) -> anyhow::Result<Option<String>> {
    let names = session.list_tool_names().await?;
    info!(name: "mcp.tools.listed", server = %config.server, tools = ?names, "weather tools discovered");

    let Some(tool) = select_tool(&names, FORECAST_TOOL_PATTERN) else {
        warn!(
            name: "forecast.tool_missing",
            pattern = FORECAST_TOOL_PATTERN,
            server = %config.server,
            "no matching tool on server, nothing to call"
        );
        return Ok(None);
    };

    info!(
        name: "forecast.call",
        tool = %tool,
        latitude = config.latitude,
        longitude = config.longitude,
        "calling forecast tool"
    );
    let items = session
        .call_tool(
            tool,
            json!({ "latitude": config.latitude, "longitude": config.longitude }),
        )
        .await
        .map_err(|source| ClientError::ToolCall {
            name: tool.to_string(),
            source,
        })?;

    let text = first_text(&items).ok_or_else(|| ClientError::EmptyResult {
        name: tool.to_string(),
    })?;

    Ok(Some(text.to_string()))
}
