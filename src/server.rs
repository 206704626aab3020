use anyhow::Result;
use axum::Router;
use seaworth_page::HttpInquiryClient;
use sqlx::SqlitePool;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{config::Config, routes::AppState};

/// Opens the write and read pools, applying pending migrations in between so
/// the read-only pool never sees a missing schema.
pub async fn connect(config: &Config) -> Result<(SqlitePool, SqlitePool)> {
    // Write pool: 1 connection for all inserts
    let write_pool = crate::db::create_write_pool(&config.database.url).await?;
    seaworth_inquiry::MIGRATOR.run(&write_pool).await?;

    let read_pool =
        crate::db::create_read_pool(&config.database.url, config.database.max_connections).await?;

    Ok((write_pool, read_pool))
}

pub fn app_state(config: Config, write_pool: SqlitePool, read_pool: SqlitePool) -> Result<AppState> {
    let inquiry_client = HttpInquiryClient::new(&config.backend.base_url)?;

    Ok(AppState {
        config,
        inquiry_client,
        inquiry_command: seaworth_inquiry::Command(write_pool),
        inquiry_query: seaworth_inquiry::Query(read_pool.clone()),
        pool: read_pool,
    })
}

/// Router with the full middleware stack.
pub fn app(state: AppState) -> Router {
    crate::routes::router(state)
        // No-cache for pages and API, long-lived cache for static files
        .layer(axum::middleware::from_fn(
            crate::middleware::cache_control_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            crate::middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(
    mut config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting seaworth server...");

    // CLI overrides win, and must land before the inquiry client is built
    config.override_server(host_override, port_override);
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let (write_pool, read_pool) = connect(&config).await?;
    tracing::info!(backend = %config.backend.base_url, "Inquiries will be sent to backend");

    let state = app_state(config, write_pool.clone(), read_pool.clone())?;
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Closing database pools...");
    read_pool.close().await;
    write_pool.close().await;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}
