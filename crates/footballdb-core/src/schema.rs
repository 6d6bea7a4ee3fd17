use serde::Serialize;

use crate::constraints::{CheckDef, FkAction, ForeignKeyDef};

/// Portable column type; adapters map it to their own SQL dialect.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Surrogate key assigned by the storage engine on insert.
    Serial,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer, used by columns referencing a serial key.
    BigInt,
    /// Variable-length text with an upper bound.
    Varchar(u16),
    Date,
}

/// Column declaration.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub nullable: bool,
    /// Literal SQL default, if any.
    pub default: Option<&'static str>,
}

/// Table declaration with its declarative constraints.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
    pub primary_key: &'static [&'static str],
    pub foreign_keys: &'static [ForeignKeyDef],
    pub checks: &'static [CheckDef],
}

impl TableDef {
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Names of the tables this table references, without duplicates.
    pub fn parents(&self) -> Vec<&'static str> {
        let mut parents: Vec<&'static str> = Vec::new();
        for fk in self.foreign_keys {
            if !parents.contains(&fk.referenced_table) {
                parents.push(fk.referenced_table);
            }
        }
        parents
    }
}

pub const TEAM_TABLE: &str = "team";
pub const PLAYER_TABLE: &str = "player";
pub const MATCH_TABLE: &str = "matches";
pub const PLAYER_STAT_TABLE: &str = "player_statistics";

const fn col(name: &'static str, column_type: ColumnType, nullable: bool) -> ColumnDef {
    ColumnDef {
        name,
        column_type,
        nullable,
        default: None,
    }
}

const fn counter(name: &'static str) -> ColumnDef {
    ColumnDef {
        name,
        column_type: ColumnType::Integer,
        nullable: false,
        default: Some("0"),
    }
}

/// The four-table football schema, parents listed before children.
pub const FOOTBALL_SCHEMA: &[TableDef] = &[
    TableDef {
        name: TEAM_TABLE,
        columns: &[
            col("team_id", ColumnType::Serial, false),
            col("team_name", ColumnType::Varchar(255), false),
            col("city", ColumnType::Varchar(255), true),
            col("stadium", ColumnType::Varchar(255), true),
        ],
        primary_key: &["team_id"],
        foreign_keys: &[],
        checks: &[],
    },
    TableDef {
        name: PLAYER_TABLE,
        columns: &[
            col("player_id", ColumnType::Serial, false),
            col("first_name", ColumnType::Varchar(255), false),
            col("last_name", ColumnType::Varchar(255), false),
            col("position", ColumnType::Varchar(100), true),
            col("date_of_birth", ColumnType::Date, true),
            col("nationality", ColumnType::Varchar(100), true),
            col("team_id", ColumnType::BigInt, true),
        ],
        primary_key: &["player_id"],
        foreign_keys: &[ForeignKeyDef {
            columns: &["team_id"],
            referenced_table: TEAM_TABLE,
            referenced_columns: &["team_id"],
            on_delete: FkAction::SetNull,
        }],
        checks: &[CheckDef {
            name: "player_position_check",
            expression: "position IN ('Forward', 'Midfielder', 'Defender', 'Goalkeeper')",
        }],
    },
    TableDef {
        name: MATCH_TABLE,
        columns: &[
            col("match_id", ColumnType::Serial, false),
            col("match_date", ColumnType::Date, false),
            col("home_team_id", ColumnType::BigInt, false),
            col("away_team_id", ColumnType::BigInt, false),
            col("stadium", ColumnType::Varchar(255), true),
            col("home_score", ColumnType::Integer, false),
            col("away_score", ColumnType::Integer, false),
        ],
        primary_key: &["match_id"],
        foreign_keys: &[
            ForeignKeyDef {
                columns: &["home_team_id"],
                referenced_table: TEAM_TABLE,
                referenced_columns: &["team_id"],
                on_delete: FkAction::Cascade,
            },
            ForeignKeyDef {
                columns: &["away_team_id"],
                referenced_table: TEAM_TABLE,
                referenced_columns: &["team_id"],
                on_delete: FkAction::Cascade,
            },
        ],
        checks: &[CheckDef {
            name: "matches_score_check",
            expression: "home_score >= 0 AND away_score >= 0",
        }],
    },
    TableDef {
        name: PLAYER_STAT_TABLE,
        columns: &[
            col("player_id", ColumnType::BigInt, false),
            col("match_id", ColumnType::BigInt, false),
            counter("goals"),
            counter("assists"),
            counter("yellow_cards"),
            counter("red_cards"),
            counter("minutes_played"),
        ],
        primary_key: &["player_id", "match_id"],
        foreign_keys: &[
            ForeignKeyDef {
                columns: &["player_id"],
                referenced_table: PLAYER_TABLE,
                referenced_columns: &["player_id"],
                on_delete: FkAction::Cascade,
            },
            ForeignKeyDef {
                columns: &["match_id"],
                referenced_table: MATCH_TABLE,
                referenced_columns: &["match_id"],
                on_delete: FkAction::Cascade,
            },
        ],
        checks: &[CheckDef {
            name: "player_statistics_counts_check",
            expression: "goals >= 0 AND assists >= 0 AND yellow_cards >= 0 \
                         AND red_cards >= 0 AND minutes_played >= 0",
        }],
    },
];

/// Look up a table of the football schema by name.
pub fn table_def(name: &str) -> Option<&'static TableDef> {
    FOOTBALL_SCHEMA.iter().find(|table| table.name == name)
}
