//! Protocol types for tool calls over JSON-RPC
//!
//! This module contains all protocol-related types and traits.

mod jsonrpc;
mod mcp;

pub use jsonrpc::{
    ErrorObject, JsonRpcError, JsonRpcRequest, JsonRpcResponse, INTERNAL_ERROR, INVALID_PARAMS,
    INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
};
pub use mcp::{optional_arg, required_arg, ServerInfo, Tool, ToolDefinition, PROTOCOL_VERSION};
