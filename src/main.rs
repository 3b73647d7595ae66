use std::sync::Arc;

use tokio::net::TcpListener;

use notes_service::adapters::http::{build_app, NoteAppState};
use notes_service::adapters::postgres::connect_pool;
use notes_service::adapters::{InMemoryNoteStore, PostgresNoteStore};
use notes_service::config::{AppConfig, StoreBackend};
use notes_service::ports::NoteStore;
use notes_service::telemetry;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init(&config.server)?;

    let store: Arc<dyn NoteStore> = match config.store.backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory note store");
            Arc::new(InMemoryNoteStore::new())
        }
        StoreBackend::Postgres => {
            tracing::info!(url = %config.database.redacted_url(), "Using PostgreSQL note store");
            let pool = connect_pool(&config.database).await?;
            Arc::new(PostgresNoteStore::new(pool))
        }
    };

    let app = build_app(NoteAppState::new(store), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Notes service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Notes service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
