//! Pipeline tests.

/// Snapshot transition properties.
pub mod engine;

/// Hazard policy resolution.
pub mod hazards;
