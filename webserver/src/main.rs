//! Jewel India API server entry point

use anyhow::Context;
use clap::Parser;
use jewel_shared::logging::{self, Component};

use jewel_webserver::{Args, MemoryStore, ServerConfig, WebServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Populate JEWEL_* variables from .env before clap reads them
    let _ = dotenv::dotenv();

    let args = Args::parse();
    let config = ServerConfig::from_args(args).context("Invalid server configuration")?;

    logging::init_tracing_with_level(Some(&config.log_level));
    logging::log_startup(
        Component::Server,
        &format!("Jewel India marketplace on {}", config.bind_address),
    );

    let store = MemoryStore::new();
    let webserver = WebServer::new(&config, store);
    webserver.run().await.context("Web server terminated with an error")?;

    logging::log_success(Component::Server, "WebServer stopped gracefully");
    Ok(())
}
