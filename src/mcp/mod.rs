//! Model Context Protocol (MCP) client plumbing.
//!
//! This module wraps `rmcp`'s streamable HTTP client behind a small session
//! interface and provides the substring-based tool selector both flows use.
//!
//! # Session lifecycle
//!
//! [`session::McpSession::connect`] validates the URI scheme (http/https
//! only) before any network activity, then performs the transport setup and
//! the MCP initialize handshake. Sessions are closed explicitly on every exit
//! path of a flow state; closing shuts down the MCP session before the
//! transport underneath it.

pub mod select;
pub mod session;
