use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{debug, warn};

use footballdb_core::{
    Entity, MatchId, NewMatch, NewPlayer, NewTeam, PlayerId, PlayerMatchStat, TeamId,
};
use footballdb_store::{Store, StoreResult};

use crate::report::{BatchReport, RowFailure};

/// A candidate row that knows how to store itself.
#[async_trait]
pub trait Persist: Serialize + Send + Sync {
    /// Identity the store hands back for the row.
    type Id: Copy + Send;

    const ENTITY: Entity;

    async fn persist(&self, store: &dyn Store) -> StoreResult<Self::Id>;
}

#[async_trait]
impl Persist for NewTeam {
    type Id = TeamId;
    const ENTITY: Entity = Entity::Team;

    async fn persist(&self, store: &dyn Store) -> StoreResult<TeamId> {
        store.insert_team(self).await
    }
}

#[async_trait]
impl Persist for NewPlayer {
    type Id = PlayerId;
    const ENTITY: Entity = Entity::Player;

    async fn persist(&self, store: &dyn Store) -> StoreResult<PlayerId> {
        store.insert_player(self).await
    }
}

#[async_trait]
impl Persist for NewMatch {
    type Id = MatchId;
    const ENTITY: Entity = Entity::Match;

    async fn persist(&self, store: &dyn Store) -> StoreResult<MatchId> {
        store.insert_match(self).await
    }
}

#[async_trait]
impl Persist for PlayerMatchStat {
    type Id = (PlayerId, MatchId);
    const ENTITY: Entity = Entity::PlayerMatchStat;

    async fn persist(&self, store: &dyn Store) -> StoreResult<(PlayerId, MatchId)> {
        store.insert_player_stat(self).await?;
        Ok(self.key())
    }
}

/// Rows of one batch that made it into the store, in input order.
pub struct BatchOutcome<R: Persist> {
    pub persisted: Vec<(R::Id, R)>,
    pub report: BatchReport,
}

impl<R: Persist> BatchOutcome<R> {
    pub fn ids(&self) -> Vec<R::Id> {
        self.persisted.iter().map(|(id, _)| *id).collect()
    }
}

/// Persist `row`, waiting out pool timeouts so a stalled store stalls the
/// batch instead of dropping rows.
async fn persist_waiting<R: Persist>(
    row: &R,
    store: &dyn Store,
    index: usize,
) -> StoreResult<R::Id> {
    loop {
        match row.persist(store).await {
            Err(err) if err.is_pool_timeout() => {
                debug!(event = "pool_wait", entity = %R::ENTITY, index);
            }
            result => return result,
        }
    }
}

/// Insert `rows` with at most `max_in_flight` statements outstanding.
///
/// A rejected row is logged, recorded as a [`RowFailure`] and dropped; the
/// rest of the batch carries on. Returns once every insert has settled.
pub async fn load_batch<R: Persist>(
    store: &dyn Store,
    rows: Vec<R>,
    max_in_flight: usize,
) -> BatchOutcome<R> {
    let attempted = rows.len();
    let results: Vec<(usize, R, StoreResult<R::Id>)> = stream::iter(rows.into_iter().enumerate())
        .map(|(index, row)| async move {
            let result = persist_waiting(&row, store, index).await;
            (index, row, result)
        })
        .buffered(max_in_flight.max(1))
        .collect()
        .await;

    let mut persisted = Vec::with_capacity(attempted);
    let mut failures = Vec::new();
    for (index, row, result) in results {
        match result {
            Ok(id) => persisted.push((id, row)),
            Err(err) => {
                let values = serde_json::to_value(&row).unwrap_or(serde_json::Value::Null);
                warn!(
                    event = "row_insert_failed",
                    entity = %R::ENTITY,
                    index,
                    row = %values,
                    error = %err
                );
                failures.push(RowFailure {
                    index,
                    row: values,
                    error: err.to_string(),
                });
            }
        }
    }

    debug!(
        event = "batch_loaded",
        entity = %R::ENTITY,
        attempted,
        persisted = persisted.len(),
        failed = failures.len()
    );

    let report = BatchReport {
        entity: R::ENTITY,
        attempted,
        persisted: persisted.len(),
        failures,
    };
    BatchOutcome { persisted, report }
}
