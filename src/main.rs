//! Game catalog binary entrypoint wiring configuration, the SQL store and the REST layer.

use std::{net::SocketAddr, path::Path, sync::Arc};

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use game_catalog_back::{
    config::AppConfig,
    dao::game_store::{
        GameStore,
        sql::{SqlConfig, SqlGameStore},
    },
    routes,
    services::catalog_service::CatalogImporter,
    state::{AppState, SharedState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load();

    let sql_config =
        SqlConfig::new(config.database_url.clone()).with_max_connections(config.max_connections);
    let store: Arc<dyn GameStore> = Arc::new(
        SqlGameStore::connect(sql_config)
            .await
            .context("opening game store")?,
    );
    let importer = CatalogImporter::new(&config.catalog).context("building catalog client")?;

    let app_state = AppState::new(Arc::clone(&store), importer);
    // Build the HTTP router once the shared state is ready.
    let app = build_router(app_state, &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%addr, static_dir = %config.static_dir.display(), "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    let service = app.into_make_service();
    let served = axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum");

    info!("closing game store");
    if let Err(err) = store.close().await {
        warn!(error = %err, "failed to close game store cleanly");
    }

    served
}

/// Build the top-level router and attach cross-cutting middleware layers.
fn build_router(state: SharedState, static_dir: &Path) -> Router<()> {
    routes::router(state, static_dir)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = term.recv() => {},
                }
            }
            Err(err) => {
                warn!(error = %err, "cannot install SIGTERM handler; waiting for Ctrl+C only");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
