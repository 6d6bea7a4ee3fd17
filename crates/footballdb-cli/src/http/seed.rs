use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use tracing::{error, info};

use footballdb_seed::run_seed;

use super::AppState;

pub const SEED_SUCCEEDED: &str = "Fake data generated successfully!";
pub const SEED_FAILED: &str = "Error generating fake data.";

/// Run the pipeline with the configured options and answer once every stage
/// has finished. Row-level failures are only logged.
///
/// The run lives in its own task, so a client hanging up does not cancel it.
pub async fn generate_fake_data(State(state): State<AppState>) -> (StatusCode, &'static str) {
    let store = Arc::clone(&state.store);
    let options = state.seed.clone();
    let run = tokio::spawn(async move { run_seed(store.as_ref(), &options).await });

    match run.await {
        Ok(Ok(report)) => {
            info!(
                event = "seed_request_completed",
                run_id = %report.run_id,
                failures = report.failure_count()
            );
            (StatusCode::OK, SEED_SUCCEEDED)
        }
        Ok(Err(err)) => {
            error!(event = "seed_request_failed", error = %err);
            (StatusCode::INTERNAL_SERVER_ERROR, SEED_FAILED)
        }
        Err(err) => {
            error!(event = "seed_task_panicked", error = %err);
            (StatusCode::INTERNAL_SERVER_ERROR, SEED_FAILED)
        }
    }
}
