use crypto_core::types::TimestampMS;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 Request
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

/// JSON-RPC 2.0 Success Response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub result: Value,
}

/// JSON-RPC 2.0 Error Response
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub error: ErrorObject,
}

/// JSON-RPC Error Object
#[derive(Debug, Serialize)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

// Standard JSON-RPC error codes
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

// Custom error codes for market data operations
pub const ASSET_NOT_FOUND: i32 = -32001;
pub const UPSTREAM_UNAVAILABLE: i32 = -32002;
pub const EXPORT_FAILED: i32 = -32003;

/// Lookback window bounds in days
pub const MIN_LOOKBACK_DAYS: u32 = 1;
pub const MAX_LOOKBACK_DAYS: u32 = 365;

/// Summary Request Parameters
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub asset_id: String,
}

/// History Request Parameters
#[derive(Debug, Deserialize)]
pub struct HistoryRequest {
    pub asset_id: String,
    #[serde(default = "default_days")]
    pub days: u32,
    #[serde(default)]
    pub include_pct_change: bool,
}

/// Download Request Parameters
#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    pub asset_id: String,
    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_days() -> u32 {
    1
}

/// A single history point in JSON format
#[derive(Debug, Serialize)]
pub struct HistoryPointJson {
    pub timestamp: TimestampMS,
    pub date: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rolling_avg_3d: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volatility_3d: Option<f64>,
}

/// History Response
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub asset_id: String,
    pub days: u32,
    pub points: Vec<HistoryPointJson>,
}

/// Download Response
#[derive(Debug, Serialize)]
pub struct DownloadResponse {
    pub filename: String,
    pub media_type: String,
    pub path: String,
    pub rows: usize,
}
