use async_trait::async_trait;

use footballdb_core::{
    Match, MatchId, NewMatch, NewPlayer, NewTeam, Player, PlayerId, PlayerMatchStat, Team, TeamId,
};

use crate::error::StoreResult;

/// Persistence seam shared by the seeding pipeline and the read API.
///
/// Every insert is a single statement: a row is either stored with its
/// identity or rejected by the engine's declarative constraints, never
/// half-written. Listings return rows in primary-key order.
#[async_trait]
pub trait Store: Send + Sync {
    /// Returns the engine identifier (e.g. `postgres`).
    fn engine(&self) -> &'static str;

    /// Create any missing table. Safe to run against an existing schema.
    async fn ensure_schema(&self) -> StoreResult<()>;

    async fn insert_team(&self, team: &NewTeam) -> StoreResult<TeamId>;
    async fn insert_player(&self, player: &NewPlayer) -> StoreResult<PlayerId>;
    async fn insert_match(&self, row: &NewMatch) -> StoreResult<MatchId>;
    async fn insert_player_stat(&self, stat: &PlayerMatchStat) -> StoreResult<()>;

    async fn list_teams(&self) -> StoreResult<Vec<Team>>;
    async fn list_players(&self) -> StoreResult<Vec<Player>>;
    async fn list_matches(&self) -> StoreResult<Vec<Match>>;
    async fn list_player_stats(&self) -> StoreResult<Vec<PlayerMatchStat>>;

    /// Deleting a team nulls its players' `team_id` and removes its matches.
    async fn delete_team(&self, id: TeamId) -> StoreResult<bool>;
    /// Also removes the player's statistics.
    async fn delete_player(&self, id: PlayerId) -> StoreResult<bool>;
    /// Also removes the match's statistics.
    async fn delete_match(&self, id: MatchId) -> StoreResult<bool>;

    /// Release pooled connections.
    async fn close(&self);
}
