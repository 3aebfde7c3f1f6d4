//! Postboard Server - Binary Entry Point

use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use postboard::api::create_router;
use postboard::seed::seed_demo_data;
use postboard::{AppContext, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("postboard=info".parse()?))
        .init();

    let config = ServerConfig::from_env();
    let ctx = Arc::new(AppContext::new());

    if config.seed {
        seed_demo_data(&ctx)?;
    }

    let app = create_router(ctx);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), version = postboard::VERSION, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown requested");
}
