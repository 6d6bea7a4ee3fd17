use std::time::{Duration, Instant};

use tracing::info;
use uuid::Uuid;

use footballdb_generate::Generator;
use footballdb_store::Store;

use crate::errors::SeedError;
use crate::loader::load_batch;
use crate::options::SeedOptions;
use crate::report::{BatchReport, SeedReport};

/// Generate and persist one full data set.
///
/// Stages run Team, then Player and Match side by side, then
/// PlayerMatchStat. Each stage waits for every insert of the previous one and
/// only references the identities it returned, so rows rejected upstream are
/// never referenced downstream. Nothing is rolled back on partial failure.
pub async fn run_seed(store: &dyn Store, options: &SeedOptions) -> Result<SeedReport, SeedError> {
    options.validate()?;
    let mut generator = Generator::from_options(options.generate.clone())?;
    store.ensure_schema().await?;

    let run_id = Uuid::new_v4().to_string();
    let started = Instant::now();
    let max_in_flight = options.max_in_flight;
    info!(
        event = "seed_started",
        run_id = %run_id,
        engine = store.engine(),
        teams = options.generate.teams,
        players_per_team = options.generate.players_per_team,
        matches = options.generate.matches,
        seed = ?options.generate.seed
    );

    let teams = load_batch(store, generator.teams(), max_in_flight).await;
    log_stage(&run_id, &teams.report);
    let team_ids = teams.ids();

    let player_rows = generator.players(&team_ids);
    let match_rows = generator.matches(&team_ids);
    let (players, matches) = tokio::join!(
        load_batch(store, player_rows, max_in_flight),
        load_batch(store, match_rows, max_in_flight)
    );
    log_stage(&run_id, &players.report);
    log_stage(&run_id, &matches.report);

    let stat_rows = generator.player_stats(&players.ids(), &matches.ids());
    let stats = load_batch(store, stat_rows, max_in_flight).await;
    log_stage(&run_id, &stats.report);

    let report = SeedReport {
        run_id,
        batches: vec![teams.report, players.report, matches.report, stats.report],
        duration_ms: millis(started.elapsed()),
    };
    info!(
        event = "seed_completed",
        run_id = %report.run_id,
        failures = report.failure_count(),
        duration_ms = report.duration_ms
    );
    Ok(report)
}

fn log_stage(run_id: &str, report: &BatchReport) {
    info!(
        event = "stage_completed",
        run_id,
        entity = %report.entity,
        attempted = report.attempted,
        persisted = report.persisted,
        failed = report.failures.len()
    );
}

/// Whole milliseconds in `elapsed`, saturating at `u64::MAX`.
fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_saturate_instead_of_wrapping() {
        assert_eq!(millis(Duration::from_millis(1_250)), 1_250);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }
}
