//! Core contracts for footballdb.
//!
//! Defines the four football entities, the declarative schema the storage
//! engine enforces, and helpers shared by the generator, the store adapters
//! and the CLI.

pub mod constraints;
pub mod entity;
pub mod error;
pub mod graph;
pub mod redaction;
pub mod schema;
pub mod validation;

pub use constraints::{CheckDef, FkAction, ForeignKeyDef};
pub use entity::{
    Entity, Match, MatchId, NewMatch, NewPlayer, NewTeam, Player, PlayerId, PlayerMatchStat,
    Position, Team, TeamId,
};
pub use error::{Error, Result};
pub use graph::{DependencyReport, dependency_order};
pub use redaction::{RedactedConnection, redact_connection_string};
pub use schema::{
    ColumnDef, ColumnType, FOOTBALL_SCHEMA, MATCH_TABLE, PLAYER_STAT_TABLE, PLAYER_TABLE, TEAM_TABLE,
    TableDef, table_def,
};
pub use validation::validate_definition;
