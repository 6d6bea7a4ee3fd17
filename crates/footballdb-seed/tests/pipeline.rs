use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;

use footballdb_core::{
    Entity, Match, MatchId, NewMatch, NewPlayer, NewTeam, Player, PlayerId, PlayerMatchStat, Team,
    TeamId,
};
use footballdb_generate::{GenerateOptions, SCORE_RANGE, STAT_BOUNDS};
use footballdb_seed::{SeedError, SeedOptions, load_batch, run_seed};
use footballdb_store::{SqliteStore, Store, StoreError, StoreOptions, StoreResult};

/// Delegates to SQLite but rejects the n-th team insert (0-based).
struct FailingStore {
    inner: SqliteStore,
    fail_team_call: usize,
    team_calls: AtomicUsize,
}

#[async_trait]
impl Store for FailingStore {
    fn engine(&self) -> &'static str {
        self.inner.engine()
    }
    async fn ensure_schema(&self) -> StoreResult<()> {
        self.inner.ensure_schema().await
    }
    async fn insert_team(&self, team: &NewTeam) -> StoreResult<TeamId> {
        if self.team_calls.fetch_add(1, Ordering::SeqCst) == self.fail_team_call {
            return Err(StoreError::Database(sqlx_error("connection reset")));
        }
        self.inner.insert_team(team).await
    }
    async fn insert_player(&self, player: &NewPlayer) -> StoreResult<PlayerId> {
        self.inner.insert_player(player).await
    }
    async fn insert_match(&self, row: &NewMatch) -> StoreResult<MatchId> {
        self.inner.insert_match(row).await
    }
    async fn insert_player_stat(&self, stat: &PlayerMatchStat) -> StoreResult<()> {
        self.inner.insert_player_stat(stat).await
    }
    async fn list_teams(&self) -> StoreResult<Vec<Team>> {
        self.inner.list_teams().await
    }
    async fn list_players(&self) -> StoreResult<Vec<Player>> {
        self.inner.list_players().await
    }
    async fn list_matches(&self) -> StoreResult<Vec<Match>> {
        self.inner.list_matches().await
    }
    async fn list_player_stats(&self) -> StoreResult<Vec<PlayerMatchStat>> {
        self.inner.list_player_stats().await
    }
    async fn delete_team(&self, id: TeamId) -> StoreResult<bool> {
        self.inner.delete_team(id).await
    }
    async fn delete_player(&self, id: PlayerId) -> StoreResult<bool> {
        self.inner.delete_player(id).await
    }
    async fn delete_match(&self, id: MatchId) -> StoreResult<bool> {
        self.inner.delete_match(id).await
    }
    async fn close(&self) {
        self.inner.close().await
    }
}

fn sqlx_error(message: &str) -> sqlx::Error {
    sqlx::Error::Protocol(message.to_string())
}

fn options(teams: u32, players_per_team: u32, matches: u32) -> SeedOptions {
    SeedOptions {
        generate: GenerateOptions {
            teams,
            players_per_team,
            matches,
            seed: Some(11),
            reference_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            ..GenerateOptions::default()
        },
        ..SeedOptions::default()
    }
}

#[tokio::test]
async fn small_run_persists_every_stage() -> Result<()> {
    let store = SqliteStore::in_memory().await?;
    let report = run_seed(&store, &options(2, 1, 1)).await?;

    assert_eq!(report.persisted(Entity::Team), 2);
    assert_eq!(report.persisted(Entity::Player), 2);
    assert_eq!(report.persisted(Entity::Match), 1);
    assert_eq!(report.persisted(Entity::PlayerMatchStat), 2);
    assert_eq!(report.failure_count(), 0);
    let order: Vec<Entity> = report.batches.iter().map(|batch| batch.entity).collect();
    assert_eq!(order, Entity::ALL);

    let teams: HashSet<TeamId> = store
        .list_teams()
        .await?
        .iter()
        .map(|team| team.team_id)
        .collect();
    let players = store.list_players().await?;
    assert!(
        players
            .iter()
            .all(|player| player.team_id.is_some_and(|id| teams.contains(&id)))
    );

    let matches = store.list_matches().await?;
    let fixture = matches.first().context("one match")?;
    assert!(teams.contains(&fixture.home_team_id) && teams.contains(&fixture.away_team_id));
    assert!(SCORE_RANGE.contains(&fixture.home_score));
    assert!(SCORE_RANGE.contains(&fixture.away_score));

    let stats = store.list_player_stats().await?;
    assert_eq!(stats.len(), 2);
    let keys: HashSet<_> = stats.iter().map(|stat| stat.key()).collect();
    assert_eq!(keys.len(), 2);
    assert!(stats.iter().all(|stat| STAT_BOUNDS.contains(stat)));
    Ok(())
}

#[tokio::test]
async fn rejected_team_is_skipped_downstream() -> Result<()> {
    let store = FailingStore {
        inner: SqliteStore::in_memory().await?,
        fail_team_call: 2,
        team_calls: AtomicUsize::new(0),
    };
    let options = SeedOptions {
        max_in_flight: 1,
        ..options(5, 2, 3)
    };

    let report = run_seed(&store, &options).await?;

    let teams = report.batch(Entity::Team).context("team batch")?;
    assert_eq!(teams.attempted, 5);
    assert_eq!(teams.persisted, 4);
    assert_eq!(teams.failures.len(), 1);
    assert_eq!(teams.failures[0].index, 2);
    assert!(teams.failures[0].row["team_name"].is_string());
    assert!(teams.failures[0].error.contains("connection reset"));

    let persisted: HashSet<TeamId> = store
        .list_teams()
        .await?
        .iter()
        .map(|team| team.team_id)
        .collect();
    assert_eq!(persisted.len(), 4);

    let players = store.list_players().await?;
    assert_eq!(players.len(), 8, "players only for the four stored teams");
    assert!(
        players
            .iter()
            .all(|player| player.team_id.is_some_and(|id| persisted.contains(&id)))
    );
    assert!(store.list_matches().await?.iter().all(|row| {
        persisted.contains(&row.home_team_id) && persisted.contains(&row.away_team_id)
    }));
    assert_eq!(report.persisted(Entity::PlayerMatchStat), 8 * 3);
    Ok(())
}

#[tokio::test]
async fn invalid_options_fail_before_persisting() -> Result<()> {
    let store = SqliteStore::in_memory().await?;
    store.ensure_schema().await?;

    let mut invalid = options(3, 3, 3);
    invalid.generate.birth_years_back = 0;
    let err = run_seed(&store, &invalid).await.expect_err("rejected");
    assert!(matches!(err, SeedError::Options(_)));
    assert!(store.list_teams().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn no_teams_means_no_dependent_rows() -> Result<()> {
    let store = SqliteStore::in_memory().await?;
    let report = run_seed(&store, &options(0, 4, 4)).await?;

    assert_eq!(report.batches.len(), 4);
    assert!(report.batches.iter().all(|batch| batch.attempted == 0));
    assert!(store.list_matches().await?.is_empty());
    assert!(store.list_player_stats().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn batch_failures_keep_input_positions() -> Result<()> {
    let store = SqliteStore::in_memory().await?;
    store.ensure_schema().await?;
    let team_id = store
        .insert_team(&NewTeam {
            team_name: "Solo".to_string(),
            city: None,
            stadium: None,
        })
        .await?;

    let rows: Vec<NewMatch> = [0, -3, 1, 2]
        .into_iter()
        .map(|home_score| NewMatch {
            match_date: NaiveDate::from_ymd_opt(2025, 5, 5).expect("valid date"),
            home_team_id: team_id,
            away_team_id: team_id,
            stadium: None,
            home_score,
            away_score: 0,
        })
        .collect();

    let outcome = load_batch(&store, rows, 3).await;
    assert_eq!(outcome.report.attempted, 4);
    assert_eq!(outcome.report.persisted, 3);
    assert_eq!(outcome.report.failures[0].index, 1);
    assert_eq!(outcome.report.failures[0].row["home_score"], -3);

    let scores: Vec<i32> = outcome
        .persisted
        .iter()
        .map(|(_, row)| row.home_score)
        .collect();
    assert_eq!(scores, vec![0, 1, 2]);
    assert_eq!(outcome.ids().len(), 3);
    Ok(())
}

#[tokio::test]
async fn busy_pool_stalls_the_batch_instead_of_dropping_rows() -> Result<()> {
    let store = SqliteStore::connect(
        "sqlite::memory:",
        &StoreOptions {
            max_connections: 1,
            acquire_timeout: Duration::from_millis(50),
        },
    )
    .await?;
    store.ensure_schema().await?;

    let held = store.pool().acquire().await?;
    let rows: Vec<NewTeam> = ["Waiting A", "Waiting B"]
        .into_iter()
        .map(|name| NewTeam {
            team_name: name.to_string(),
            city: None,
            stadium: None,
        })
        .collect();
    let mut batch = std::pin::pin!(load_batch(&store, rows, 4));

    // several acquire timeouts elapse while the only connection is held
    let stalled = tokio::time::timeout(Duration::from_millis(300), batch.as_mut()).await;
    assert!(stalled.is_err(), "batch finished while the pool was exhausted");

    drop(held);
    let outcome = batch.await;
    assert_eq!(outcome.report.persisted, 2);
    assert!(outcome.report.failures.is_empty());
    assert_eq!(store.list_teams().await?.len(), 2);
    Ok(())
}
