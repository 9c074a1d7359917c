//! Serve command - form page and JSON API on the same port

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use super::ServerArgs;
use crate::api::create_router_with_ui;
use crate::config::AppConfig;
use crate::infrastructure::observability::{
    create_metrics_router, init_metrics, init_tracing, shutdown_tracing,
};

/// Run the combined form + API server
pub async fn run(args: ServerArgs) -> anyhow::Result<()> {
    let config = load_config();
    init_tracing(&config.logging, &config.observability.tracing);

    let state = crate::create_app_state(&config)?;
    let app = create_router_with_ui(state);

    info!("Starting server (form + API)");
    serve(&config, &args, app).await
}

pub(crate) fn load_config() -> AppConfig {
    dotenvy::dotenv().ok();

    AppConfig::load().unwrap_or_default()
}

/// Bind, attach the metrics endpoint and serve until Ctrl-C
pub(crate) async fn serve(config: &AppConfig, args: &ServerArgs, app: Router) -> anyhow::Result<()> {
    let app = match init_metrics(&config.observability.metrics) {
        Some(metrics) => app.merge(create_metrics_router(
            metrics,
            &config.observability.metrics.path,
        )),
        None => app,
    };

    let addr = build_socket_addr(config, args)?;
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if config.observability.tracing.enabled {
        shutdown_tracing();
    }

    Ok(())
}

fn build_socket_addr(config: &AppConfig, args: &ServerArgs) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        args.port.unwrap_or(config.server.port),
    )))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    info!("Shutdown signal received");
}
