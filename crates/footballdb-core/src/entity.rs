use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::schema::{MATCH_TABLE, PLAYER_STAT_TABLE, PLAYER_TABLE, TEAM_TABLE};

/// Surrogate key of a persisted team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub i64);

/// Surrogate key of a persisted player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub i64);

/// Surrogate key of a persisted match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(pub i64);

macro_rules! impl_id_display {
    ($($id:ty),*) => {
        $(impl fmt::Display for $id {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        })*
    };
}

impl_id_display!(TeamId, PlayerId, MatchId);

/// The four entity kinds, in the order they must be seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    Team,
    Player,
    Match,
    PlayerMatchStat,
}

impl Entity {
    pub const ALL: [Entity; 4] = [
        Entity::Team,
        Entity::Player,
        Entity::Match,
        Entity::PlayerMatchStat,
    ];

    pub fn table(self) -> &'static str {
        match self {
            Entity::Team => TEAM_TABLE,
            Entity::Player => PLAYER_TABLE,
            Entity::Match => MATCH_TABLE,
            Entity::PlayerMatchStat => PLAYER_STAT_TABLE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Entity::Team => "team",
            Entity::Player => "player",
            Entity::Match => "match",
            Entity::PlayerMatchStat => "player_match_stat",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Playing position of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Forward,
    Midfielder,
    Defender,
    Goalkeeper,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Forward,
        Position::Midfielder,
        Position::Defender,
        Position::Goalkeeper,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Forward => "Forward",
            Position::Midfielder => "Midfielder",
            Position::Defender => "Defender",
            Position::Goalkeeper => "Goalkeeper",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == value)
            .ok_or_else(|| Error::Other(format!("unknown position '{value}'")))
    }
}

/// Team candidate row, before the store assigns its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTeam {
    pub team_name: String,
    pub city: Option<String>,
    pub stadium: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub team_name: String,
    pub city: Option<String>,
    pub stadium: Option<String>,
}

impl Team {
    pub fn from_new(team_id: TeamId, new: NewTeam) -> Self {
        Self {
            team_id,
            team_name: new.team_name,
            city: new.city,
            stadium: new.stadium,
        }
    }
}

/// Player candidate row, before the store assigns its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub position: Option<Position>,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub team_id: Option<TeamId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<Position>,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub team_id: Option<TeamId>,
}

impl Player {
    pub fn from_new(player_id: PlayerId, new: NewPlayer) -> Self {
        Self {
            player_id,
            first_name: new.first_name,
            last_name: new.last_name,
            position: new.position,
            date_of_birth: new.date_of_birth,
            nationality: new.nationality,
            team_id: new.team_id,
        }
    }
}

/// Match candidate row, before the store assigns its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMatch {
    pub match_date: NaiveDate,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub stadium: Option<String>,
    pub home_score: i32,
    pub away_score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub match_id: MatchId,
    pub match_date: NaiveDate,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub stadium: Option<String>,
    pub home_score: i32,
    pub away_score: i32,
}

impl Match {
    pub fn from_new(match_id: MatchId, new: NewMatch) -> Self {
        Self {
            match_id,
            match_date: new.match_date,
            home_team_id: new.home_team_id,
            away_team_id: new.away_team_id,
            stadium: new.stadium,
            home_score: new.home_score,
            away_score: new.away_score,
        }
    }

    /// Score rendered as `home-away`.
    pub fn score(&self) -> String {
        format!("{}-{}", self.home_score, self.away_score)
    }
}

/// Per-player, per-match statistics. Keyed by `(player_id, match_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMatchStat {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub goals: i32,
    pub assists: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub minutes_played: i32,
}

impl PlayerMatchStat {
    pub fn key(&self) -> (PlayerId, MatchId) {
        (self.player_id, self.match_id)
    }
}
