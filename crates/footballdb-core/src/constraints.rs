use serde::{Deserialize, Serialize};

/// Foreign key action applied by the storage engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FkAction {
    Cascade,
    SetNull,
}

impl FkAction {
    /// SQL keyword sequence for this action.
    pub fn as_sql(self) -> &'static str {
        match self {
            FkAction::Cascade => "CASCADE",
            FkAction::SetNull => "SET NULL",
        }
    }
}

/// Foreign key definition preserving column ordering.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ForeignKeyDef {
    pub columns: &'static [&'static str],
    pub referenced_table: &'static str,
    pub referenced_columns: &'static [&'static str],
    pub on_delete: FkAction,
}

/// Table-level check constraint, kept as a portable SQL boolean expression.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CheckDef {
    pub name: &'static str,
    pub expression: &'static str,
}
