use serde::{Deserialize, Serialize};

use footballdb_core::Entity;

/// A row the store rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowFailure {
    /// Position of the row in the batch.
    pub index: usize,
    /// Attempted field values.
    pub row: serde_json::Value,
    pub error: String,
}

/// Outcome of loading one entity batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub entity: Entity,
    pub attempted: usize,
    pub persisted: usize,
    pub failures: Vec<RowFailure>,
}

/// Summary of a seed run, one batch per entity in seeding order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedReport {
    pub run_id: String,
    pub batches: Vec<BatchReport>,
    pub duration_ms: u64,
}

impl SeedReport {
    pub fn batch(&self, entity: Entity) -> Option<&BatchReport> {
        self.batches.iter().find(|batch| batch.entity == entity)
    }

    pub fn persisted(&self, entity: Entity) -> usize {
        self.batch(entity).map_or(0, |batch| batch.persisted)
    }

    pub fn failure_count(&self) -> usize {
        self.batches.iter().map(|batch| batch.failures.len()).sum()
    }
}
