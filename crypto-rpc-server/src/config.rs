use crypto_data_services::provider::COINGECKO_API;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub provider_url: String,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            provider_url: COINGECKO_API.to_string(),
            request_timeout_secs: 30,
        }
    }
}
