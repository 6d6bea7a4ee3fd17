//! Seeding pipeline for footballdb.
//!
//! Ties the generator to a [`footballdb_store::Store`]: rows are inserted
//! concurrently within a batch, stage by stage, and every run ends with a
//! [`SeedReport`] rather than an error when individual rows are rejected.

pub mod errors;
pub mod loader;
pub mod options;
pub mod pipeline;
pub mod report;

pub use errors::SeedError;
pub use loader::{BatchOutcome, Persist, load_batch};
pub use options::SeedOptions;
pub use pipeline::run_seed;
pub use report::{BatchReport, RowFailure, SeedReport};
