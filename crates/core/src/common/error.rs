//! Error definitions.
//!
//! This module defines the failure modes at the edges of the simulator:
//! 1. **Configuration:** Reading or parsing JSON configuration.
//! 2. **Loading:** Reading program text from disk.
//! 3. **Oracle:** A remote validator that could not give an answer.
//! 4. **Session:** Validation rejections and unavailable hazard modes.
//!
//! Once a session exists, stepping the pipeline cannot fail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::SimulationMode;

/// Errors raised while loading a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config '{path}': {source}")]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid JSON for the config schema.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while reading program text.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program '{path}': {source}")]
    Io {
        /// Path of the program file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Failure of an instruction oracle to produce a verdict.
///
/// These are never shown to the user; validation treats them as "no opinion".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// The oracle could not be reached.
    #[error("oracle unavailable: {0}")]
    Unavailable(String),

    /// The oracle answered with something that is not a verdict.
    #[error("malformed oracle response: {0}")]
    Malformed(String),
}

/// Errors raised while starting a simulation session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// One or more input lines failed validation; each entry is a user-facing message.
    #[error("{} invalid instruction(s):\n{}", .0.len(), .0.join("\n"))]
    Validation(Vec<String>),

    /// The selected hazard mode is recognised but has no implementation.
    #[error("simulation mode '{0}' is not implemented yet")]
    ModeNotImplemented(SimulationMode),
}
