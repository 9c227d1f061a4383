//! FreshCast MCP Server
//!
//! Model Context Protocol server exposing routing, forecasts and material
//! planning to AI assistants.

mod protocol;
mod server;
pub mod tools;

pub use protocol::{Content, JsonRpcRequest, JsonRpcResponse, ToolDefinition, ToolResult};
pub use server::{start_server, McpServer};
