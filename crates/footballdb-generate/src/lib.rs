//! Dependency-ordered synthetic data generation for footballdb.
//!
//! Produces candidate rows for teams, players, matches and per-match player
//! statistics. Later stages take the identities assigned to earlier stages by
//! the store, so every generated reference points at a persisted row.

pub mod errors;
pub mod generator;
pub mod locales;
pub mod options;
pub mod sampler;

pub use errors::GenerationError;
pub use generator::{Generator, StatBounds, STAT_BOUNDS, SCORE_RANGE};
pub use locales::LocaleKey;
pub use options::GenerateOptions;
pub use sampler::{FakeSampler, Sampler};
