use footballdb_core::{
    ColumnDef, ColumnType, FOOTBALL_SCHEMA, MATCH_TABLE, PLAYER_STAT_TABLE, PLAYER_TABLE, Result,
    TEAM_TABLE, TableDef, dependency_order, table_def, validate_definition,
};

/// SQL dialect spoken by a store adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    Sqlite,
}

impl Dialect {
    pub fn engine(self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite",
        }
    }

    /// Bind placeholder for the 1-based parameter `index`.
    pub fn placeholder(self, index: usize) -> String {
        match self {
            Dialect::Postgres => format!("${index}"),
            Dialect::Sqlite => "?".to_string(),
        }
    }

    fn column_type(self, column_type: ColumnType) -> String {
        match (self, column_type) {
            (Dialect::Postgres, ColumnType::Serial) => "BIGSERIAL".to_string(),
            (Dialect::Postgres, ColumnType::Integer) => "INTEGER".to_string(),
            (Dialect::Postgres, ColumnType::BigInt) => "BIGINT".to_string(),
            (Dialect::Postgres, ColumnType::Varchar(len)) => format!("VARCHAR({len})"),
            (Dialect::Postgres, ColumnType::Date) => "DATE".to_string(),
            (Dialect::Sqlite, ColumnType::Serial)
            | (Dialect::Sqlite, ColumnType::Integer)
            | (Dialect::Sqlite, ColumnType::BigInt) => "INTEGER".to_string(),
            // dates are stored as ISO-8601 text
            (Dialect::Sqlite, ColumnType::Varchar(_)) | (Dialect::Sqlite, ColumnType::Date) => {
                "TEXT".to_string()
            }
        }
    }
}

/// `CREATE TABLE IF NOT EXISTS` statements for the football schema, parents
/// first.
pub fn schema_statements(dialect: Dialect) -> Result<Vec<String>> {
    validate_definition(FOOTBALL_SCHEMA)?;
    let report = dependency_order(FOOTBALL_SCHEMA);
    let order = report.order.ok_or_else(|| {
        footballdb_core::Error::InvalidSchema(format!(
            "foreign key cycle between {:?}",
            report.cycle.unwrap_or_default()
        ))
    })?;

    order
        .into_iter()
        .map(|name| lookup(name).map(|table| create_table(table, dialect)))
        .collect()
}

/// Render one table with its declarative constraints.
pub fn create_table(table: &TableDef, dialect: Dialect) -> String {
    // SQLite only assigns AUTOINCREMENT keys to an inline INTEGER PRIMARY KEY.
    let inline_key = dialect == Dialect::Sqlite && serial_key(table).is_some();

    let mut parts: Vec<String> = table
        .columns
        .iter()
        .map(|column| column_clause(column, dialect, inline_key))
        .collect();

    if !inline_key {
        parts.push(format!("PRIMARY KEY ({})", table.primary_key.join(", ")));
    }
    for fk in table.foreign_keys {
        parts.push(format!(
            "FOREIGN KEY ({}) REFERENCES {}({}) ON DELETE {}",
            fk.columns.join(", "),
            fk.referenced_table,
            fk.referenced_columns.join(", "),
            fk.on_delete.as_sql()
        ));
    }
    for check in table.checks {
        parts.push(format!("CONSTRAINT {} CHECK ({})", check.name, check.expression));
    }

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        table.name,
        parts.join(",\n    ")
    )
}

fn column_clause(column: &ColumnDef, dialect: Dialect, inline_key: bool) -> String {
    if inline_key && column.column_type == ColumnType::Serial {
        return format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", column.name);
    }

    let mut clause = format!("{} {}", column.name, dialect.column_type(column.column_type));
    if !column.nullable && column.column_type != ColumnType::Serial {
        clause.push_str(" NOT NULL");
    }
    if let Some(default) = column.default {
        clause.push_str(" DEFAULT ");
        clause.push_str(default);
    }
    clause
}

/// The single serial column making up the primary key, if any.
pub fn serial_key(table: &TableDef) -> Option<&'static str> {
    match table.primary_key {
        [key] => table
            .column(key)
            .filter(|column| column.column_type == ColumnType::Serial)
            .map(|column| column.name),
        _ => None,
    }
}

/// Columns a caller supplies on insert, in declaration order.
pub fn insert_columns(table: &TableDef) -> Vec<&'static str> {
    table
        .columns
        .iter()
        .filter(|column| column.column_type != ColumnType::Serial)
        .map(|column| column.name)
        .collect()
}

/// `INSERT` for `table`, returning the serial key when the table has one.
pub fn insert_statement(table: &TableDef, dialect: Dialect) -> String {
    let columns = insert_columns(table);
    let placeholders: Vec<String> = (1..=columns.len())
        .map(|index| dialect.placeholder(index))
        .collect();

    let mut sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table.name,
        columns.join(", "),
        placeholders.join(", ")
    );
    if let Some(key) = serial_key(table) {
        sql.push_str(" RETURNING ");
        sql.push_str(key);
    }
    sql
}

/// `SELECT` of every column in key order.
pub fn select_statement(table: &TableDef) -> String {
    let columns: Vec<&str> = table.columns.iter().map(|column| column.name).collect();
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        columns.join(", "),
        table.name,
        table.primary_key.join(", ")
    )
}

/// Every statement an adapter runs after schema setup, rendered once.
#[derive(Debug, Clone)]
pub struct Statements {
    pub insert_team: String,
    pub insert_player: String,
    pub insert_match: String,
    pub insert_player_stat: String,
    pub select_teams: String,
    pub select_players: String,
    pub select_matches: String,
    pub select_player_stats: String,
    pub delete_team: String,
    pub delete_player: String,
    pub delete_match: String,
}

impl Statements {
    pub fn for_dialect(dialect: Dialect) -> Result<Self> {
        let team = lookup(TEAM_TABLE)?;
        let player = lookup(PLAYER_TABLE)?;
        let matches = lookup(MATCH_TABLE)?;
        let stats = lookup(PLAYER_STAT_TABLE)?;

        Ok(Self {
            insert_team: insert_statement(team, dialect),
            insert_player: insert_statement(player, dialect),
            insert_match: insert_statement(matches, dialect),
            insert_player_stat: insert_statement(stats, dialect),
            select_teams: select_statement(team),
            select_players: select_statement(player),
            select_matches: select_statement(matches),
            select_player_stats: select_statement(stats),
            delete_team: delete_statement(team, dialect),
            delete_player: delete_statement(player, dialect),
            delete_match: delete_statement(matches, dialect),
        })
    }
}

fn lookup(name: &str) -> Result<&'static TableDef> {
    table_def(name)
        .ok_or_else(|| footballdb_core::Error::InvalidSchema(format!("unknown table {name}")))
}

/// `DELETE` by single-column primary key.
pub fn delete_statement(table: &TableDef, dialect: Dialect) -> String {
    format!(
        "DELETE FROM {} WHERE {} = {}",
        table.name,
        table.primary_key.join(", "),
        dialect.placeholder(1)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &str) -> &'static TableDef {
        table_def(name).expect("table exists")
    }

    #[test]
    fn statements_follow_dependency_order() {
        let statements = schema_statements(Dialect::Postgres).expect("statements");
        assert_eq!(statements.len(), 4);
        assert!(statements[0].contains("EXISTS team ("));
        assert!(statements[3].contains("EXISTS player_statistics ("));
    }

    #[test]
    fn postgres_player_table_sets_null_on_team_delete() {
        let sql = create_table(table(PLAYER_TABLE), Dialect::Postgres);
        assert!(sql.contains("player_id BIGSERIAL"));
        assert!(sql.contains("PRIMARY KEY (player_id)"));
        assert!(sql.contains("FOREIGN KEY (team_id) REFERENCES team(team_id) ON DELETE SET NULL"));
        assert!(sql.contains("CONSTRAINT player_position_check CHECK"));
    }

    #[test]
    fn sqlite_inlines_autoincrement_key() {
        let sql = create_table(table(TEAM_TABLE), Dialect::Sqlite);
        assert!(sql.contains("team_id INTEGER PRIMARY KEY AUTOINCREMENT"));
        assert!(!sql.contains("PRIMARY KEY (team_id)"));
        assert!(sql.contains("team_name TEXT NOT NULL"));
    }

    #[test]
    fn stats_keep_composite_key_and_defaults() {
        let sql = create_table(table(PLAYER_STAT_TABLE), Dialect::Sqlite);
        assert!(sql.contains("PRIMARY KEY (player_id, match_id)"));
        assert!(sql.contains("goals INTEGER NOT NULL DEFAULT 0"));
        assert!(sql.contains("REFERENCES matches(match_id) ON DELETE CASCADE"));
    }

    #[test]
    fn inserts_return_serial_keys() {
        assert_eq!(
            insert_statement(table(TEAM_TABLE), Dialect::Postgres),
            "INSERT INTO team (team_name, city, stadium) VALUES ($1, $2, $3) RETURNING team_id"
        );
        assert_eq!(
            insert_statement(table(MATCH_TABLE), Dialect::Sqlite),
            "INSERT INTO matches (match_date, home_team_id, away_team_id, stadium, home_score, away_score) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING match_id"
        );
        assert!(!insert_statement(table(PLAYER_STAT_TABLE), Dialect::Postgres).contains("RETURNING"));
    }

    #[test]
    fn listings_are_ordered_by_key() {
        let statements = Statements::for_dialect(Dialect::Sqlite).expect("statements");
        assert!(statements.select_player_stats.ends_with("ORDER BY player_id, match_id"));
        assert_eq!(statements.delete_match, "DELETE FROM matches WHERE match_id = ?");
    }
}
