use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::schema::TableDef;

/// Validate internal consistency of a set of table definitions.
///
/// This checks:
/// - duplicate tables/columns
/// - primary key columns exist
/// - foreign key columns and referenced targets exist
/// - foreign keys with `SET NULL` point from nullable columns
pub fn validate_definition(tables: &[TableDef]) -> Result<()> {
    let mut catalog: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

    for table in tables {
        if catalog.contains_key(table.name) {
            return Err(Error::InvalidSchema(format!(
                "duplicate table name: {}",
                table.name
            )));
        }

        let mut columns = BTreeSet::new();
        for column in table.columns {
            if !columns.insert(column.name) {
                return Err(Error::InvalidSchema(format!(
                    "duplicate column name: {}.{}",
                    table.name, column.name
                )));
            }
        }
        catalog.insert(table.name, columns);
    }

    for table in tables {
        let columns = &catalog[table.name];

        if table.primary_key.is_empty() {
            return Err(Error::InvalidSchema(format!(
                "table {} has no primary key",
                table.name
            )));
        }
        for pk_column in table.primary_key {
            if !columns.contains(pk_column) {
                return Err(Error::InvalidSchema(format!(
                    "primary key column missing: {}.{}",
                    table.name, pk_column
                )));
            }
        }

        for fk in table.foreign_keys {
            if fk.columns.len() != fk.referenced_columns.len() {
                return Err(Error::InvalidSchema(format!(
                    "foreign key arity mismatch on {} -> {}",
                    table.name, fk.referenced_table
                )));
            }

            for fk_column in fk.columns {
                let Some(column) = table.column(fk_column) else {
                    return Err(Error::InvalidSchema(format!(
                        "foreign key column missing: {}.{}",
                        table.name, fk_column
                    )));
                };
                if fk.on_delete == crate::constraints::FkAction::SetNull && !column.nullable {
                    return Err(Error::InvalidSchema(format!(
                        "SET NULL foreign key on non-nullable column {}.{}",
                        table.name, fk_column
                    )));
                }
            }

            let referenced = catalog.get(fk.referenced_table).ok_or_else(|| {
                Error::InvalidSchema(format!(
                    "foreign key target table missing: {}",
                    fk.referenced_table
                ))
            })?;
            for ref_column in fk.referenced_columns {
                if !referenced.contains(ref_column) {
                    return Err(Error::InvalidSchema(format!(
                        "foreign key target column missing: {}.{}",
                        fk.referenced_table, ref_column
                    )));
                }
            }
        }
    }

    Ok(())
}
