use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use crypto_core::analytics::export::ExportSpec;
use crypto_data_services::provider::CoinGeckoClient;

use crate::config::ServerConfig;
use crate::error::RpcError;
use crate::handler::MarketDataHandler;
use crate::protocol::*;

/// JSON-RPC server for market data queries
pub struct RpcServer {
    config: ServerConfig,
    handler: Arc<MarketDataHandler>,
}

impl RpcServer {
    /// Create a new RPC server
    pub fn new(config: ServerConfig) -> Result<Self> {
        tracing::info!("Initializing provider client...");

        let client = CoinGeckoClient::with_base_url(
            &config.provider_url,
            Duration::from_secs(config.request_timeout_secs),
        )
        .context("Failed to build provider client")?;

        let handler = Arc::new(MarketDataHandler::new(Arc::new(client)));

        tracing::info!("✅ Provider client initialized successfully");

        Ok(Self { config, handler })
    }

    /// Start the server and handle connections
    pub async fn run(&self) -> Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&addr)
            .await
            .context(format!("Failed to bind to {}", addr))?;

        tracing::info!("✅ Crypto Data JSON-RPC Server listening on {}", addr);
        tracing::info!("Ready to accept connections");

        loop {
            match listener.accept().await {
                Ok((socket, addr)) => {
                    tracing::debug!("New connection from {}", addr);
                    let handler = Arc::clone(&self.handler);

                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(socket, handler).await {
                            tracing::error!("Connection error from {}: {}", addr, e);
                        }
                    });
                }
                Err(e) => {
                    tracing::error!("Failed to accept connection: {}", e);
                }
            }
        }
    }
}

/// Handle a single TCP connection
async fn handle_connection(
    mut socket: TcpStream,
    handler: Arc<MarketDataHandler>,
) -> Result<()> {
    let (reader, mut writer) = socket.split();
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            // Connection closed
            break;
        }

        tracing::debug!("Received request: {}", line.trim());

        // Process JSON-RPC request
        let response = process_request(&line, &handler).await;

        // Send response
        let response_json = serde_json::to_string(&response)?;
        writer.write_all(response_json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;

        tracing::debug!("Sent response");
    }

    Ok(())
}

/// Process a JSON-RPC request
async fn process_request(line: &str, handler: &MarketDataHandler) -> Value {
    // Parse JSON-RPC request
    let request: JsonRpcRequest = match serde_json::from_str(line) {
        Ok(req) => req,
        Err(e) => {
            return create_error_response(None, RpcError::ParseError(e.to_string()));
        }
    };

    // Validate JSON-RPC version
    if request.jsonrpc != "2.0" {
        return create_error_response(
            request.id,
            RpcError::InvalidRequest("JSON-RPC version must be 2.0".to_string()),
        );
    }

    // Route to method handler
    let id = request.id.clone();
    match request.method.as_str() {
        "crypto.get_summary" => match parse_params::<SummaryRequest>(request.params) {
            Ok(params) => respond(id, handler.handle_summary(params).await),
            Err(e) => create_error_response(id, e),
        },
        "crypto.get_history" => match parse_params::<HistoryRequest>(request.params) {
            Ok(params) => respond(id, handler.handle_history(params).await),
            Err(e) => create_error_response(id, e),
        },
        "crypto.download_basic" => match parse_params::<DownloadRequest>(request.params) {
            Ok(params) => respond(id, handler.handle_download(params, ExportSpec::basic()).await),
            Err(e) => create_error_response(id, e),
        },
        "crypto.download_full" => match parse_params::<DownloadRequest>(request.params) {
            Ok(params) => respond(id, handler.handle_download(params, ExportSpec::full()).await),
            Err(e) => create_error_response(id, e),
        },
        _ => create_error_response(id, RpcError::MethodNotFound(request.method.clone())),
    }
}

/// Parse method params from the request
fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, RpcError> {
    match params {
        Some(params) => serde_json::from_value(params)
            .map_err(|e| RpcError::InvalidParams(format!("Invalid params: {}", e))),
        None => Err(RpcError::InvalidParams("Missing params".to_string())),
    }
}

/// Render a handler result as a JSON-RPC response
fn respond<T: Serialize>(id: Option<Value>, result: Result<T, RpcError>) -> Value {
    match result {
        Ok(result) => serde_json::to_value(JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id,
            result: serde_json::to_value(result).unwrap(),
        })
        .unwrap(),
        Err(e) => create_error_response(id, e),
    }
}

/// Create an error response
fn create_error_response(id: Option<Value>, error: RpcError) -> Value {
    serde_json::to_value(JsonRpcError {
        jsonrpc: "2.0".to_string(),
        id,
        error: ErrorObject {
            code: error.code(),
            message: error.to_string(),
            data: error.data(),
        },
    })
    .unwrap()
}
