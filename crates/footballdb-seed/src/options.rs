use serde::{Deserialize, Serialize};

use footballdb_generate::{GenerateOptions, GenerationError};

/// Options for one seed run: what to generate plus how hard to push the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedOptions {
    #[serde(flatten)]
    pub generate: GenerateOptions,
    /// Upper bound on concurrent inserts within one batch.
    pub max_in_flight: usize,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            generate: GenerateOptions::default(),
            max_in_flight: 16,
        }
    }
}

impl SeedOptions {
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.max_in_flight == 0 {
            return Err(GenerationError::InvalidOptions(
                "max_in_flight must be at least 1".to_string(),
            ));
        }
        self.generate.validate()
    }
}
