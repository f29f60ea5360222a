//! Tool server
//!
//! This module contains the main server that handles JSON-RPC communication,
//! one request per line.

mod handlers;

use std::collections::BTreeMap;
use std::io::{self, BufRead, BufReader, BufWriter, Stdin, Stdout, Write};

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, ServerInfo, Tool, ToolDefinition,
    PROTOCOL_VERSION,
};
use crate::types::{ExplorerError, ExplorerResult};

pub use handlers::*;

/// Server that handles JSON-RPC tool calls over a line-oriented stream
pub struct ToolServer<R: BufRead = BufReader<Stdin>, W: Write = BufWriter<Stdout>> {
    server_info: ServerInfo,
    tools: BTreeMap<String, Box<dyn Tool>>,
    reader: R,
    writer: W,
}

impl ToolServer {
    /// Create a server on stdin/stdout with default settings
    pub fn new() -> Self {
        Self::with_info(ServerInfo::default())
    }

    /// Create a server on stdin/stdout with custom server info
    pub fn with_info(info: ServerInfo) -> Self {
        Self::with_io(info, BufReader::new(io::stdin()), BufWriter::new(io::stdout()))
    }
}

impl Default for ToolServer {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> ToolServer<R, W> {
    /// Create a server on arbitrary streams
    pub fn with_io(info: ServerInfo, reader: R, writer: W) -> Self {
        Self {
            server_info: info,
            tools: BTreeMap::new(),
            reader,
            writer,
        }
    }

    /// Register a tool with the server
    pub fn register_tool(&mut self, tool: Box<dyn Tool>) -> &mut Self {
        let name = tool.name();
        self.tools.insert(name, tool);
        self
    }

    /// Get the number of registered tools
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Consume the server and return its writer
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Run until the input stream closes (blocking)
    pub fn run(&mut self) -> ExplorerResult<()> {
        info!(
            name = %self.server_info.name,
            tools = self.tools.len(),
            "tool server listening"
        );
        let mut line = String::new();
        while self.reader.read_line(&mut line)? > 0 {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                let request = trimmed.to_string();
                self.handle_request(&request)?;
            }
            line.clear();
        }
        info!("input closed, tool server stopping");
        Ok(())
    }

    /// Handle a single JSON-RPC request
    fn handle_request(&mut self, request_str: &str) -> ExplorerResult<()> {
        let request: JsonRpcRequest = match serde_json::from_str(request_str) {
            Ok(req) => req,
            Err(e) => {
                warn!(error = %e, "unparseable request");
                return self.send(&JsonRpcError::parse_error(e.to_string()));
            }
        };

        if !request.is_valid() {
            return self.send(&JsonRpcError::invalid_request(
                request.id.unwrap_or(Value::Null),
                "jsonrpc must be '2.0'",
            ));
        }

        debug!(method = %request.method, "request");
        let id = request.id.clone().unwrap_or(Value::Null);

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "notifications/initialized" => Ok(()), // Notification, no response
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tool_call(id, request.params),
            "ping" => self.send(&JsonRpcResponse::new(id, json!({}))),
            other => {
                let other = other.to_string();
                self.send(&JsonRpcError::method_not_found(id, &other))
            }
        }
    }

    fn handle_initialize(&mut self, id: Value) -> ExplorerResult<()> {
        let result = json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": self.server_info.name,
                "version": self.server_info.version
            }
        });
        self.send(&JsonRpcResponse::new(id, result))
    }

    fn handle_tools_list(&mut self, id: Value) -> ExplorerResult<()> {
        let tools: Vec<ToolDefinition> = self.tools.values().map(|t| t.definition()).collect();
        self.send(&JsonRpcResponse::new(id, json!({ "tools": tools })))
    }

    fn handle_tool_call(&mut self, id: Value, params: Option<Value>) -> ExplorerResult<()> {
        let params = params.unwrap_or(Value::Null);
        let Some(tool_name) = extract_tool_name(&params).map(str::to_string) else {
            return self.send(&JsonRpcError::invalid_params(id, "missing tool name".to_string()));
        };

        let Some(tool) = self.tools.get(&tool_name) else {
            warn!(tool = %tool_name, "unknown tool");
            return self.send(&JsonRpcError::unknown_tool(id, &tool_name));
        };

        let outcome = tool.execute(extract_arguments(&params));
        match outcome {
            Ok(result) => self.send(&JsonRpcResponse::new(id, result)),
            Err(ExplorerError::InvalidParams(details)) => {
                warn!(tool = %tool_name, %details, "invalid tool arguments");
                self.send(&JsonRpcError::invalid_params(id, details))
            }
            Err(e) => {
                warn!(tool = %tool_name, error = %e, "tool failed");
                self.send(&JsonRpcError::tool_error(id, e.to_string()))
            }
        }
    }

    fn send<T: Serialize>(&mut self, message: &T) -> ExplorerResult<()> {
        let json = serde_json::to_string(message)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }
}
