//! Simulation tests.

/// Program text parsing.
pub mod loader;
