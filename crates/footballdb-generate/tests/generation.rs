use std::collections::HashSet;
use std::ops::RangeInclusive;

use chrono::NaiveDate;

use footballdb_core::{MatchId, PlayerId, Position, TeamId};
use footballdb_generate::{
    GenerateOptions, GenerationError, Generator, LocaleKey, SCORE_RANGE, STAT_BOUNDS, Sampler,
};

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

fn options(teams: u32, players_per_team: u32, matches: u32) -> GenerateOptions {
    GenerateOptions {
        teams,
        players_per_team,
        matches,
        seed: Some(2024),
        reference_date: Some(reference_date()),
        ..GenerateOptions::default()
    }
}

/// Always answers with the edge of every range so bounds are exercised.
struct EdgeSampler {
    high: bool,
}

impl Sampler for EdgeSampler {
    fn team_name(&mut self) -> String {
        "Edge FC".to_string()
    }
    fn city(&mut self) -> String {
        "Edgeville".to_string()
    }
    fn stadium_adjective(&mut self) -> String {
        "Sharp".to_string()
    }
    fn stadium_noun(&mut self) -> String {
        "Ridge".to_string()
    }
    fn first_name(&mut self) -> String {
        "Eddie".to_string()
    }
    fn last_name(&mut self) -> String {
        "Edge".to_string()
    }
    fn nationality(&mut self) -> String {
        "Nowhere".to_string()
    }
    fn index(&mut self, len: usize) -> usize {
        if self.high { len - 1 } else { 0 }
    }
    fn int_in(&mut self, range: RangeInclusive<i32>) -> i32 {
        if self.high { *range.end() } else { *range.start() }
    }
    fn date_in(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        if self.high { end } else { start }
    }
}

#[test]
fn players_reference_only_given_teams() {
    let mut generator = Generator::from_options(options(3, 4, 2)).expect("generator");
    let teams = [TeamId(11), TeamId(12), TeamId(14)];

    let players = generator.players(&teams);
    assert_eq!(players.len(), 12);
    for team in teams {
        let count = players
            .iter()
            .filter(|player| player.team_id == Some(team))
            .count();
        assert_eq!(count, 4, "every team gets players_per_team players");
    }
    assert!(players.iter().all(|player| player.position.is_some()));
}

#[test]
fn matches_reference_given_teams_with_bounded_scores() {
    let mut generator = Generator::from_options(options(2, 1, 50)).expect("generator");
    let teams = [TeamId(1), TeamId(2)];

    let matches = generator.matches(&teams);
    assert_eq!(matches.len(), 50);
    for row in &matches {
        assert!(teams.contains(&row.home_team_id));
        assert!(teams.contains(&row.away_team_id));
        assert!(SCORE_RANGE.contains(&row.home_score));
        assert!(SCORE_RANGE.contains(&row.away_score));
        assert!(row.match_date > reference_date(), "matches are future-dated");
        assert!(row.stadium.as_deref().is_some_and(|s| s.ends_with(" Stadium")));
    }
}

#[test]
fn empty_team_set_yields_no_players_or_matches() {
    let mut generator = Generator::from_options(options(0, 10, 5)).expect("generator");
    assert!(generator.teams().is_empty());
    assert!(generator.players(&[]).is_empty());
    assert!(generator.matches(&[]).is_empty());
}

#[test]
fn stats_cover_cross_product_once() {
    let mut generator = Generator::from_options(options(2, 3, 4)).expect("generator");
    let players: Vec<PlayerId> = (1..=6).map(PlayerId).collect();
    let matches: Vec<MatchId> = (1..=4).map(MatchId).collect();

    let stats = generator.player_stats(&players, &matches);
    assert_eq!(stats.len(), 24);

    let keys: HashSet<_> = stats.iter().map(|stat| stat.key()).collect();
    assert_eq!(keys.len(), stats.len(), "one row per player and match");
    assert!(stats.iter().all(|stat| STAT_BOUNDS.contains(stat)));
}

#[test]
fn edge_samples_stay_within_documented_bounds() {
    for high in [false, true] {
        let mut generator =
            Generator::new(EdgeSampler { high }, options(1, 1, 1)).expect("generator");

        let players = generator.players(&[TeamId(1)]);
        let birth = players[0].date_of_birth.expect("birth date");
        let earliest = NaiveDate::from_ymd_opt(1995, 6, 15).expect("valid date");
        assert!(birth >= earliest && birth <= reference_date());
        let expected = if high { Position::Goalkeeper } else { Position::Forward };
        assert_eq!(players[0].position, Some(expected));

        let matches = generator.matches(&[TeamId(1), TeamId(2)]);
        let last_day = NaiveDate::from_ymd_opt(2026, 6, 15).expect("valid date");
        assert!(matches[0].match_date <= last_day);

        let stats = generator.player_stats(&[PlayerId(1)], &[MatchId(1)]);
        assert!(STAT_BOUNDS.contains(&stats[0]));
        let minutes = if high { 90 } else { 45 };
        assert_eq!(stats[0].minutes_played, minutes);
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let mut a = Generator::from_options(options(3, 2, 3)).expect("generator");
    let mut b = Generator::from_options(options(3, 2, 3)).expect("generator");
    assert_eq!(a.teams(), b.teams());
    assert_eq!(a.players(&[TeamId(1)]), b.players(&[TeamId(1)]));

    let mut pt = Generator::from_options(GenerateOptions {
        locale: LocaleKey::PtBr,
        ..options(3, 2, 3)
    })
    .expect("generator");
    assert_eq!(pt.teams().len(), 3);
}

#[test]
fn invalid_options_are_rejected_before_generation() {
    let result = Generator::from_options(GenerateOptions {
        match_days_ahead: 0,
        ..GenerateOptions::default()
    });
    assert!(matches!(result, Err(GenerationError::InvalidOptions(_))));
}
