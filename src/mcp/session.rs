//! Session lifecycle wrapper over the rmcp streamable HTTP client.
//!
//! [`McpSession`] owns one initialized connection to one server. The
//! [`ToolSession`] trait is the seam the flow drivers talk through, so tests
//! can drive the orchestration with in-memory servers.
//!
//! Tool results arrive from the transport in one of several shapes (a list of
//! typed content items, or structured-only results with no content at all).
//! That union is resolved once here, at the boundary, into [`ContentItem`];
//! the flows never inspect raw transport values.

use crate::error::ClientError;
use anyhow::Context;
use async_trait::async_trait;
use rmcp::{
    model::{CallToolRequestParam, CallToolResult},
    service::{RoleClient, RunningService, ServiceExt},
    transport::StreamableHttpClientTransport,
};
use serde_json::Value;
use tracing::{info, warn};
use url::Url;

/// One item of a tool result, with the transport's content union already
/// resolved. Non-text items are kept opaque; the flows only consult text.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentItem {
    Text(String),
    Opaque(Value),
}

impl ContentItem {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Opaque(_) => None,
        }
    }
}

/// Text of the *first* content item, if it has any.
///
/// First-item-wins: later items are never consulted, and multiple text items
/// are never concatenated.
pub fn first_text(items: &[ContentItem]) -> Option<&str> {
    items.first().and_then(ContentItem::as_text)
}

/// An initialized connection to one MCP server, through which tool listing
/// and invocation occur.
#[async_trait]
pub trait ToolSession: Send + Sync {
    /// Names of the server's tools, in server-reported order.
    async fn list_tool_names(&self) -> anyhow::Result<Vec<String>>;

    /// Invoke a named tool with a JSON-object argument mapping.
    async fn call_tool(&self, name: &str, arguments: Value) -> anyhow::Result<Vec<ContentItem>>;

    /// Release the session and its transport. Consumes the session; callers
    /// close on every exit path, success or failure.
    async fn close(self: Box<Self>);
}

/// Validate that a server URI parses and uses an http/https scheme.
///
/// Runs before any network activity; an `ftp://` URI (or any other scheme)
/// fails here with a configuration error, never with a connection attempt.
pub fn validate_server_uri(uri: &str) -> Result<Url, ClientError> {
    let parsed = Url::parse(uri).map_err(|source| ClientError::InvalidUri {
        uri: uri.to_string(),
        source,
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(ClientError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

/// Production [`ToolSession`] over rmcp's streamable HTTP client transport.
pub struct McpSession {
    service: RunningService<RoleClient, ()>,
    uri: String,
}

impl std::fmt::Debug for McpSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpSession").field("uri", &self.uri).finish()
    }
}

impl McpSession {
    /// Connect to `uri` and perform the MCP initialize handshake.
    ///
    /// No retry at this layer; transport and handshake failures propagate as
    /// [`ClientError::Connect`] carrying the URI.
    pub async fn connect(uri: &str) -> Result<Self, ClientError> {
        validate_server_uri(uri)?;

        let transport = StreamableHttpClientTransport::from_uri(uri.to_string());
        let service = ()
            .serve(transport)
            .await
            .map_err(|e| ClientError::Connect {
                uri: uri.to_string(),
                source: e.into(),
            })?;

        info!(name: "mcp.session.connected", uri = %uri, "MCP session initialized");

        Ok(Self {
            service,
            uri: uri.to_string(),
        })
    }
}

#[async_trait]
impl ToolSession for McpSession {
    async fn list_tool_names(&self) -> anyhow::Result<Vec<String>> {
        let result = self
            .service
            .list_tools(Default::default())
            .await
            .with_context(|| format!("tools/list failed for {}", self.uri))?;

        Ok(result.tools.into_iter().map(|t| t.name.to_string()).collect())
    }

    async fn call_tool(&self, name: &str, arguments: Value) -> anyhow::Result<Vec<ContentItem>> {
        let result = self
            .service
            .call_tool(CallToolRequestParam {
                name: name.to_string().into(),
                arguments: arguments.as_object().cloned(),
            })
            .await
            .with_context(|| format!("tools/call failed for {} on {}", name, self.uri))?;

        resolve_content(&result)
    }

    async fn close(self: Box<Self>) {
        if let Err(e) = self.service.cancel().await {
            warn!(name: "mcp.session.close_failed", uri = %self.uri, error = %e, "MCP session shutdown failed");
        }
    }
}

/// Resolve a tool result's content union into [`ContentItem`]s.
///
/// Goes through the wire representation so content-less (structured-only)
/// results and unknown item types degrade to an empty list or opaque items
/// instead of failing.
fn resolve_content(result: &CallToolResult) -> anyhow::Result<Vec<ContentItem>> {
    let value = serde_json::to_value(result).context("unserializable tool result")?;
    Ok(content_items_from_value(&value))
}

fn content_items_from_value(value: &Value) -> Vec<ContentItem> {
    let Some(items) = value.get("content").and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| {
            let text = (item.get("type").and_then(Value::as_str) == Some("text"))
                .then(|| item.get("text").and_then(Value::as_str))
                .flatten();
            match text {
                Some(text) => ContentItem::Text(text.to_string()),
                None => ContentItem::Opaque(item.clone()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_and_https_schemes_accepted() {
        assert!(validate_server_uri("http://127.0.0.1:8000/mcp").is_ok());
        assert!(validate_server_uri("https://example.com:8000/mcp").is_ok());
    }

    #[test]
    fn test_other_schemes_rejected() {
        let err = validate_server_uri("ftp://example.com:8000/mcp").unwrap_err();
        match err {
            ClientError::UnsupportedScheme { scheme } => assert_eq!(scheme, "ftp"),
            other => panic!("expected UnsupportedScheme, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_uri_rejected() {
        assert!(matches!(
            validate_server_uri("not a uri"),
            Err(ClientError::InvalidUri { .. })
        ));
    }

    #[test]
    fn test_content_items_text_and_opaque() {
        let value = json!({
            "content": [
                { "type": "text", "text": "first" },
                { "type": "image", "data": "...", "mimeType": "image/png" },
                { "type": "text", "text": "third" }
            ]
        });
        let items = content_items_from_value(&value);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_text(), Some("first"));
        assert!(matches!(items[1], ContentItem::Opaque(_)));
        assert_eq!(first_text(&items), Some("first"));
    }

    #[test]
    fn test_missing_content_is_empty() {
        let value = json!({ "structuredContent": { "ok": true } });
        assert!(content_items_from_value(&value).is_empty());
        assert_eq!(first_text(&[]), None);
    }

    #[test]
    fn test_first_text_requires_text_first_item() {
        let value = json!({
            "content": [
                { "type": "image", "data": "...", "mimeType": "image/png" },
                { "type": "text", "text": "second" }
            ]
        });
        let items = content_items_from_value(&value);
        // First item wins even when a later item has text.
        assert_eq!(first_text(&items), None);
    }
}
