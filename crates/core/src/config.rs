//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** Baseline values for cycle limits and validation.
//! 2. **Structures:** Hierarchical config for general and pipeline settings.
//! 3. **Enums:** The hazard-handling mode of the pipeline.
//!
//! Configuration is supplied as JSON (`Config::from_json` / `Config::load`) or
//! built with `Config::default()`. Every field is optional in JSON.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Upper bound on cycles executed by a single `run`.
    ///
    /// Programs drain after `len + 4` cycles, so this only matters for
    /// pathological inputs.
    pub const MAX_CYCLES: u64 = 10_000;

    /// Whether program text is validated before the run starts.
    pub const VALIDATE: bool = true;

    /// Whether superseded snapshots are kept for replay.
    pub const RETAIN_SNAPSHOTS: bool = true;
}

/// Hazard-handling mode of the pipeline.
///
/// Only [`SimulationMode::NoHazards`] is wired to a policy. The other modes are
/// accepted by the config schema so front ends can offer them, and session
/// creation rejects them with
/// [`SimError::ModeNotImplemented`](crate::common::SimError::ModeNotImplemented).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum SimulationMode {
    /// Ideal pipeline: every instruction advances one stage per cycle.
    #[default]
    #[serde(alias = "no_hazards")]
    NoHazards,
    /// Detect data hazards and insert stall cycles.
    #[serde(alias = "stalls")]
    Stalls,
    /// Detect data hazards and resolve them by operand forwarding.
    #[serde(alias = "forwarding")]
    Forwarding,
}

impl SimulationMode {
    /// Every mode, in the order front ends list them.
    pub const ALL: [Self; 3] = [Self::NoHazards, Self::Stalls, Self::Forwarding];

    /// Identifier used in configuration files and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoHazards => "no_hazards",
            Self::Stalls => "stalls",
            Self::Forwarding => "forwarding",
        }
    }

    /// Whether a hazard policy exists for this mode.
    pub const fn is_implemented(self) -> bool {
        matches!(self, Self::NoHazards)
    }
}

impl fmt::Display for SimulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Pipeline settings.
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid JSON or does not
    /// match the schema.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation configuration.
///
/// Contains run-level settings such as cycle limits and whether to validate
/// program text before simulating.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Emit a `trace`-level event for every simulated cycle.
    #[serde(default)]
    pub trace: bool,

    /// Maximum number of cycles a single `run` executes.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,

    /// Validate program text before creating a session.
    #[serde(default = "GeneralConfig::default_validate")]
    pub validate: bool,

    /// Keep every superseded snapshot so earlier cycles can be replayed.
    ///
    /// Each snapshot carries the full history up to its cycle, so retention
    /// costs memory quadratic in the cycle count. Turn it off when only the
    /// current snapshot is needed.
    #[serde(default = "GeneralConfig::default_retain_snapshots")]
    pub retain_snapshots: bool,
}

impl GeneralConfig {
    /// Returns the default cycle limit.
    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }

    /// Returns the default validation setting.
    const fn default_validate() -> bool {
        defaults::VALIDATE
    }

    /// Returns the default snapshot retention setting.
    const fn default_retain_snapshots() -> bool {
        defaults::RETAIN_SNAPSHOTS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: false,
            max_cycles: defaults::MAX_CYCLES,
            validate: defaults::VALIDATE,
            retain_snapshots: defaults::RETAIN_SNAPSHOTS,
        }
    }
}

/// Pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Hazard-handling mode.
    #[serde(default)]
    pub mode: SimulationMode,
}
