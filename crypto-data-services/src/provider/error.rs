use thiserror::Error;

/// Provider client error types.
///
/// An unknown asset identifier is distinguishable from a transport or
/// upstream failure so the serving layer can report them separately.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("asset '{0}' not found")]
    AssetNotFound(String),

    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl ProviderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::AssetNotFound(_))
    }
}
