//! Error taxonomy for the forecast clients.
//!
//! Configuration problems are caught before any network activity; everything
//! else carries enough context (server URI, tool name, offending text) to
//! diagnose a failed run from the error chain alone.

use thiserror::Error;

/// Errors produced by the MCP session wrapper and the flow drivers.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server URI does not parse at all.
    #[error("invalid server URI '{uri}'")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    /// The server URI parsed but uses a scheme other than http/https.
    /// Detected before any connection attempt.
    #[error("unsupported server URI scheme: {scheme}. Use http:// or https://")]
    UnsupportedScheme { scheme: String },

    /// Transport setup or MCP initialize handshake failed.
    #[error("failed to connect to MCP server at {uri}")]
    Connect {
        uri: String,
        #[source]
        source: anyhow::Error,
    },

    /// No listed tool name contains the required substring.
    #[error("no tool matching '{pattern}' found on {server}")]
    ToolNotFound { pattern: String, server: String },

    /// The remote tool invocation itself failed. Propagated unchanged, no retry.
    #[error("tool call '{name}' failed")]
    ToolCall {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// The tool result's first content item carried no text.
    #[error("tool '{name}' returned no text content")]
    EmptyResult { name: String },

    /// No `lat=.., lon=..` pattern anywhere in the geocoder's reply.
    #[error("could not parse coordinates from response: {text}")]
    CoordinateParse { text: String },
}
