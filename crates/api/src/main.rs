//! Waylog - HOS compliance service
//!
//! Binary entry point: environment loading, logging, and the HTTP
//! listener with graceful shutdown.

use tokio::net::TcpListener;
use tracing::{debug, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use waylog_api::{build_router, ApiConfig, AppContext};
use waylog_domain::{Result, WaylogError};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging first so .env loading is visible
    init_tracing();

    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => debug!("no .env file found"),
    }

    let config = ApiConfig::from_env();
    let app = build_router(AppContext::new());

    let listener = TcpListener::bind(&config.bind_addr).await.map_err(|err| {
        WaylogError::Config(format!("failed to bind {}: {err}", config.bind_addr))
    })?;
    info!(addr = %config.bind_addr, version = env!("CARGO_PKG_VERSION"), "waylog api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| WaylogError::Internal(format!("server error: {err}")))?;

    info!("waylog api stopped");
    Ok(())
}

/// Log filter from `WAYLOG_LOG` (default `info`); JSON output when
/// `WAYLOG_LOG_JSON=1`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("WAYLOG_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let json_output = std::env::var("WAYLOG_LOG_JSON").map(|value| value == "1").unwrap_or(false);

    if json_output {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Resolve on ctrl-c or SIGTERM so in-flight requests can drain.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => info!("received SIGTERM, shutting down"),
                    _ = tokio::signal::ctrl_c() => info!("received ctrl-c, shutting down"),
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to register SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
                info!("received ctrl-c, shutting down");
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        info!("received ctrl-c, shutting down");
    }
}
