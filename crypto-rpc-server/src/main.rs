mod config;
mod error;
mod handler;
mod protocol;
mod server;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::ServerConfig;
use server::RpcServer;

#[derive(Parser)]
#[command(name = "crypto-rpc-server")]
#[command(about = "JSON-RPC server for crypto market data and CSV export")]
struct Cli {
    /// Server host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Server port to bind to
    #[arg(long, default_value = "8000")]
    port: u16,

    /// Market data provider base URL
    #[arg(long, default_value = crypto_data_services::provider::COINGECKO_API)]
    provider_url: String,

    /// Provider request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "crypto_rpc_server={},crypto_data_services={}",
                cli.log_level, cli.log_level
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Crypto Data JSON-RPC Server Starting");
    tracing::info!("Configuration:");
    tracing::info!("  Host: {}", cli.host);
    tracing::info!("  Port: {}", cli.port);
    tracing::info!("  Provider URL: {}", cli.provider_url);
    tracing::info!("  Request timeout: {}s", cli.timeout_secs);

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        provider_url: cli.provider_url,
        request_timeout_secs: cli.timeout_secs,
    };

    let server = RpcServer::new(config)?;
    server.run().await?;

    Ok(())
}
