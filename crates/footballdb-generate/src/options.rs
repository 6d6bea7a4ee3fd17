use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;
use crate::locales::LocaleKey;

/// Upper bound on teams a single run may request.
pub const MAX_TEAMS: u64 = 10_000;
/// Upper bound on players (teams x players_per_team) a single run may request.
pub const MAX_PLAYERS: u64 = 100_000;
/// Upper bound on matches a single run may request.
pub const MAX_MATCHES: u64 = 100_000;
/// Upper bound on player-match stat rows a single run may request.
pub const MAX_STAT_ROWS: u64 = 1_000_000;

/// Options for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Number of teams to create.
    pub teams: u32,
    /// Number of players created for every persisted team.
    pub players_per_team: u32,
    /// Number of matches to create.
    pub matches: u32,
    /// Birth dates are drawn from this many years before the reference date.
    pub birth_years_back: u32,
    /// Match dates are drawn from this many days after the reference date.
    pub match_days_ahead: u32,
    /// Seed for reproducible output; fresh entropy when absent.
    pub seed: Option<u64>,
    pub locale: LocaleKey,
    /// Date the sampled windows are anchored to; today when absent.
    pub reference_date: Option<NaiveDate>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            teams: 5,
            players_per_team: 10,
            matches: 5,
            birth_years_back: 30,
            match_days_ahead: 365,
            seed: None,
            locale: LocaleKey::EnUs,
            reference_date: None,
        }
    }
}

impl GenerateOptions {
    /// Reject configurations that cannot produce a sensible run.
    ///
    /// Called before anything is persisted.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.birth_years_back == 0 || self.birth_years_back > 120 {
            return Err(GenerationError::InvalidOptions(format!(
                "birth_years_back must be within 1..=120, got {}",
                self.birth_years_back
            )));
        }
        if self.match_days_ahead == 0 {
            return Err(GenerationError::InvalidOptions(
                "match_days_ahead must be at least 1".to_string(),
            ));
        }

        let teams = u64::from(self.teams);
        if teams > MAX_TEAMS {
            return Err(GenerationError::InvalidOptions(format!(
                "teams must be at most {MAX_TEAMS}, got {teams}"
            )));
        }
        let players = teams * u64::from(self.players_per_team);
        if players > MAX_PLAYERS {
            return Err(GenerationError::InvalidOptions(format!(
                "{teams} teams x {} players_per_team would create {players} players (limit {MAX_PLAYERS})",
                self.players_per_team
            )));
        }
        if u64::from(self.matches) > MAX_MATCHES {
            return Err(GenerationError::InvalidOptions(format!(
                "matches must be at most {MAX_MATCHES}, got {}",
                self.matches
            )));
        }

        let stat_rows = players * u64::from(self.matches);
        if stat_rows > MAX_STAT_ROWS {
            return Err(GenerationError::InvalidOptions(format!(
                "{} players x {} matches would create {stat_rows} stat rows (limit {MAX_STAT_ROWS})",
                players, self.matches
            )));
        }

        Ok(())
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}
