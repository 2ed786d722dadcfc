use symbols_mcp_server::app_state::AppState;
use symbols_mcp_server::config::{ServerConfig, Transport};
use symbols_mcp_server::http;
use symbols_mcp_server::server::McpServer;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    // stdout carries the JSON-RPC stream
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };
    config.discover_remote_search().await;

    info!(
        "Starting symbols-mcp-server {} ({:?} transport, skills at {})",
        env!("CARGO_PKG_VERSION"),
        config.transport,
        config.skills_dir.display()
    );

    let transport = config.transport;
    let state = match AppState::new(config) {
        Ok(s) => s,
        Err(e) => {
            error!("failed to build HTTP clients: {e}");
            std::process::exit(1);
        }
    };

    if !state.llm.is_configured() {
        warn!("Neither SYMBOLS_MCP_URL nor OPENROUTER_API_KEY is set; generation tools will fail");
    }
    if state.remote_search.is_configured() {
        info!("Remote vector search enabled");
    }

    let result = match transport {
        Transport::Stdio => McpServer::new(state).run().await.map_err(|e| e.to_string()),
        Transport::Http => http::serve(state).await.map_err(|e| e.to_string()),
    };

    if let Err(e) = result {
        error!("fatal error: {e}");
        std::process::exit(1);
    }
}
