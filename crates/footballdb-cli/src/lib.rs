//! Library side of the `footballdb` binary: configuration, logging setup and
//! the HTTP service, kept here so integration tests can drive them.

pub mod config;
pub mod errors;
pub mod http;
pub mod logging;

pub use errors::CliError;
