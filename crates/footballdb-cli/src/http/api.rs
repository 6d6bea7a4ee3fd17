use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use footballdb_core::{Match, Player, PlayerMatchStat, Team};
use footballdb_store::StoreError;

use super::AppState;

/// A listing query failed. Clients only see a generic 500.
#[derive(Debug)]
pub struct ReadError {
    pub endpoint: &'static str,
    pub source: StoreError,
}

impl ReadError {
    fn on(endpoint: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self { endpoint, source }
    }
}

impl IntoResponse for ReadError {
    fn into_response(self) -> Response {
        error!(event = "read_failed", endpoint = self.endpoint, error = %self.source);
        (StatusCode::INTERNAL_SERVER_ERROR, "Error fetching data.").into_response()
    }
}

pub async fn teams(State(state): State<AppState>) -> Result<Json<Vec<Team>>, ReadError> {
    let rows = state.store.list_teams().await.map_err(ReadError::on("teams"))?;
    Ok(Json(rows))
}

pub async fn players(State(state): State<AppState>) -> Result<Json<Vec<Player>>, ReadError> {
    let rows = state
        .store
        .list_players()
        .await
        .map_err(ReadError::on("players"))?;
    Ok(Json(rows))
}

pub async fn matches(State(state): State<AppState>) -> Result<Json<Vec<Match>>, ReadError> {
    let rows = state
        .store
        .list_matches()
        .await
        .map_err(ReadError::on("matches"))?;
    Ok(Json(rows))
}

pub async fn player_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlayerMatchStat>>, ReadError> {
    let rows = state
        .store
        .list_player_stats()
        .await
        .map_err(ReadError::on("playerstats"))?;
    Ok(Json(rows))
}
