use crypto_data_services::provider::ProviderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    #[error("Upstream provider unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),
}

impl RpcError {
    /// Get the JSON-RPC error code for this error
    pub fn code(&self) -> i32 {
        use crate::protocol::*;
        match self {
            RpcError::ParseError(_) => PARSE_ERROR,
            RpcError::InvalidRequest(_) => INVALID_REQUEST,
            RpcError::MethodNotFound(_) => METHOD_NOT_FOUND,
            RpcError::InvalidParams(_) => INVALID_PARAMS,
            RpcError::InternalError(_) => INTERNAL_ERROR,
            RpcError::AssetNotFound(_) => ASSET_NOT_FOUND,
            RpcError::UpstreamUnavailable(_) => UPSTREAM_UNAVAILABLE,
            RpcError::ExportFailed(_) => EXPORT_FAILED,
        }
    }

    /// Get additional error data (optional)
    pub fn data(&self) -> Option<serde_json::Value> {
        match self {
            RpcError::AssetNotFound(asset_id) => Some(serde_json::json!({
                "asset_id": asset_id,
                "suggestion": "Check the identifier against the provider's coin list"
            })),
            _ => None,
        }
    }
}

// Split provider failures into "bad identifier" and "provider outage" so
// callers can tell the two apart from the response alone
impl From<ProviderError> for RpcError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::AssetNotFound(asset_id) => RpcError::AssetNotFound(asset_id),
            ProviderError::Http(e) => RpcError::UpstreamUnavailable(e.to_string()),
        }
    }
}

// Convert anyhow errors to RpcError
impl From<anyhow::Error> for RpcError {
    fn from(err: anyhow::Error) -> Self {
        RpcError::InternalError(err.to_string())
    }
}
