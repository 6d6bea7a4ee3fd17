use std::ops::RangeInclusive;

use chrono::{Days, Months, NaiveDate};
use tracing::debug;

use footballdb_core::{
    MatchId, NewMatch, NewPlayer, NewTeam, PlayerId, PlayerMatchStat, Position, TeamId,
};

use crate::errors::GenerationError;
use crate::options::GenerateOptions;
use crate::sampler::{FakeSampler, Sampler};

/// Each team in a match scores within this range.
pub const SCORE_RANGE: RangeInclusive<i32> = 0..=5;

/// Inclusive bounds for generated player statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatBounds {
    pub goals: RangeInclusive<i32>,
    pub assists: RangeInclusive<i32>,
    pub yellow_cards: RangeInclusive<i32>,
    pub red_cards: RangeInclusive<i32>,
    pub minutes_played: RangeInclusive<i32>,
}

pub const STAT_BOUNDS: StatBounds = StatBounds {
    goals: 0..=3,
    assists: 0..=3,
    yellow_cards: 0..=2,
    red_cards: 0..=1,
    minutes_played: 45..=90,
};

impl StatBounds {
    pub fn contains(&self, stat: &PlayerMatchStat) -> bool {
        self.goals.contains(&stat.goals)
            && self.assists.contains(&stat.assists)
            && self.yellow_cards.contains(&stat.yellow_cards)
            && self.red_cards.contains(&stat.red_cards)
            && self.minutes_played.contains(&stat.minutes_played)
    }
}

/// Produces candidate rows stage by stage.
///
/// Only `teams` runs without inputs. Every later stage takes the identities
/// the store assigned to the stage before it, so a candidate can never
/// reference a row that was not persisted.
pub struct Generator<S> {
    sampler: S,
    options: GenerateOptions,
    reference_date: NaiveDate,
}

impl Generator<FakeSampler> {
    /// Generator over the `fake`-backed sampler configured by `options`.
    pub fn from_options(options: GenerateOptions) -> Result<Self, GenerationError> {
        let sampler = FakeSampler::new(options.locale, options.seed);
        Self::new(sampler, options)
    }
}

impl<S: Sampler> Generator<S> {
    pub fn new(sampler: S, options: GenerateOptions) -> Result<Self, GenerationError> {
        options.validate()?;
        let reference_date = options.reference_date();
        Ok(Self {
            sampler,
            options,
            reference_date,
        })
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn teams(&mut self) -> Vec<NewTeam> {
        let rows: Vec<NewTeam> = (0..self.options.teams)
            .map(|_| NewTeam {
                team_name: self.sampler.team_name(),
                city: Some(self.sampler.city()),
                stadium: Some(format!("{} Stadium", self.sampler.stadium_adjective())),
            })
            .collect();
        debug!(rows = rows.len(), "generated teams");
        rows
    }

    /// `players_per_team` players for every team in `teams`.
    pub fn players(&mut self, teams: &[TeamId]) -> Vec<NewPlayer> {
        let (born_after, born_before) = self.birth_window();
        let mut rows = Vec::with_capacity(teams.len() * self.options.players_per_team as usize);

        for team_id in teams {
            for _ in 0..self.options.players_per_team {
                let position = Position::ALL[self.sampler.index(Position::ALL.len())];
                rows.push(NewPlayer {
                    first_name: self.sampler.first_name(),
                    last_name: self.sampler.last_name(),
                    position: Some(position),
                    date_of_birth: Some(self.sampler.date_in(born_after, born_before)),
                    nationality: Some(self.sampler.nationality()),
                    team_id: Some(*team_id),
                });
            }
        }

        debug!(teams = teams.len(), rows = rows.len(), "generated players");
        rows
    }

    /// Home and away sides are drawn independently, so a team may meet itself.
    pub fn matches(&mut self, teams: &[TeamId]) -> Vec<NewMatch> {
        if teams.is_empty() {
            debug!("no teams available, skipping matches");
            return Vec::new();
        }

        let (first_day, last_day) = self.match_window();
        let rows: Vec<NewMatch> = (0..self.options.matches)
            .map(|_| NewMatch {
                match_date: self.sampler.date_in(first_day, last_day),
                home_team_id: teams[self.sampler.index(teams.len())],
                away_team_id: teams[self.sampler.index(teams.len())],
                stadium: Some(format!("{} Stadium", self.sampler.stadium_noun())),
                home_score: self.sampler.int_in(SCORE_RANGE),
                away_score: self.sampler.int_in(SCORE_RANGE),
            })
            .collect();
        debug!(teams = teams.len(), rows = rows.len(), "generated matches");
        rows
    }

    /// One row for every player and every match, whether or not the player's
    /// team took part.
    pub fn player_stats(
        &mut self,
        players: &[PlayerId],
        matches: &[MatchId],
    ) -> Vec<PlayerMatchStat> {
        let mut rows = Vec::with_capacity(players.len() * matches.len());
        for player_id in players {
            for match_id in matches {
                rows.push(PlayerMatchStat {
                    player_id: *player_id,
                    match_id: *match_id,
                    goals: self.sampler.int_in(STAT_BOUNDS.goals),
                    assists: self.sampler.int_in(STAT_BOUNDS.assists),
                    yellow_cards: self.sampler.int_in(STAT_BOUNDS.yellow_cards),
                    red_cards: self.sampler.int_in(STAT_BOUNDS.red_cards),
                    minutes_played: self.sampler.int_in(STAT_BOUNDS.minutes_played),
                });
            }
        }
        debug!(
            players = players.len(),
            matches = matches.len(),
            rows = rows.len(),
            "generated player stats"
        );
        rows
    }

    fn birth_window(&self) -> (NaiveDate, NaiveDate) {
        let earliest = self
            .reference_date
            .checked_sub_months(Months::new(self.options.birth_years_back * 12))
            .unwrap_or(NaiveDate::MIN);
        (earliest, self.reference_date)
    }

    fn match_window(&self) -> (NaiveDate, NaiveDate) {
        let first = self
            .reference_date
            .checked_add_days(Days::new(1))
            .unwrap_or(self.reference_date);
        let last = self
            .reference_date
            .checked_add_days(Days::new(u64::from(self.options.match_days_ahead)))
            .unwrap_or(first);
        (first, last)
    }
}
