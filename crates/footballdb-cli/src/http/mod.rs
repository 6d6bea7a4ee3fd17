//! HTTP surface: JSON listings of every table, the seed trigger and the
//! static table page.

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

use footballdb_seed::SeedOptions;
use footballdb_store::Store;

mod api;
mod seed;

pub use api::ReadError;
pub use seed::{SEED_FAILED, SEED_SUCCEEDED};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    /// Options every `/generate-fake-data` call runs with.
    pub seed: SeedOptions,
}

pub fn router(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .route("/generate-fake-data", get(seed::generate_fake_data))
        .nest(
            "/api",
            Router::new()
                .route("/teams", get(api::teams))
                .route("/players", get(api::players))
                .route("/matches", get(api::matches))
                .route("/playerstats", get(api::player_stats)),
        )
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state)
}

/// Serve until `shutdown` resolves. The store stays open; the caller owns it.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    public_dir: &Path,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!(event = "http_listening", addr = %addr, public_dir = %public_dir.display());

    axum::serve(listener, router(state, public_dir))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!(event = "http_stopped");
    Ok(())
}
