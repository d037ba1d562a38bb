//! Program loading and simulation sessions.
//!
//! Provides the instruction record, the parser that turns hex program text into
//! instructions, and the [`Simulator`](simulator::Simulator) that drives the
//! pipeline engine over a parsed program.

/// Program text parsing and file reading.
pub mod loader;

/// Immutable instruction records.
pub mod program;

/// Session driver over the pipeline engine.
pub mod simulator;
