//! Common types shared across the simulator.
//!
//! Currently this holds the error enums for every fallible boundary of the
//! crate. The pipeline engine itself has no error paths.

/// Error types for configuration, loading, validation, and session setup.
pub mod error;

pub use error::{ConfigError, LoadError, OracleError, SimError};
