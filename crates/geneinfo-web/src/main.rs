//! GeneInfo Web Server
//!
//! Run with: cargo run -p geneinfo-web

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use geneinfo_web::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("geneinfo=debug,tower_http=info,info")),
        )
        .init();

    info!("🧬 GeneInfo Finder starting up...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    let state = geneinfo_web::state::AppState::from_config(&config)?;
    info!(
        layout = %state.layout.preset,
        translation = state.localizer.is_enabled(),
        "Application state ready"
    );

    let app = geneinfo_web::router::build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
