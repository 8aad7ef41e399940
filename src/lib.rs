//! Place-to-forecast MCP clients
//!
//! A pair of small command-line clients that talk to remote Model Context
//! Protocol (MCP) tool servers over streamable HTTP:
//!
//! - `call-forecast` chains two servers: a geocoding server resolves a place
//!   name to coordinates, then a weather server turns those coordinates into
//!   a forecast.
//! - `get-forecast` talks to a single weather server with a coordinate pair.
//!
//! # Architecture
//!
//! - **MCP Client**: session lifecycle and tool invocation via `rmcp`'s
//!   streamable HTTP client transport
//! - **Flow Drivers**: strictly sequential orchestration of the geocode and
//!   forecast calls
//! - **Coordinate Extraction**: regex parse of the geocoder's text reply
//!
//! # Modules
//!
//! - [`config`]: CLI definitions and resolved run configuration
//! - [`error`]: error taxonomy shared by both flows
//! - [`flow`]: orchestration drivers for the dual- and single-server flows
//! - [`geocode`]: coordinate pair type and text extraction
//! - [`mcp`]: MCP session wrapper and tool selection

pub mod config;
pub mod error;
pub mod flow;
pub mod geocode;
pub mod mcp;
