//! Pipeline Strategy Interfaces.
//!
//! This module defines the seam through which hazard handling plugs into the
//! clock step. A policy decides how the pipeline advances from one snapshot to
//! the next; the ideal pipeline simply shifts and fetches every cycle, while
//! stalling or forwarding policies would hold or bypass instructions.

use std::fmt;

use crate::config::SimulationMode;
use crate::core::pipeline::engine::SimulationState;
use crate::sim::program::Instruction;

/// Strategy for advancing the pipeline by one cycle.
///
/// Implementations must be pure: the same `state` and `instructions` always
/// produce the same snapshot, and `state` is never modified.
pub trait HazardPolicy: fmt::Debug + Send + Sync {
    /// The mode this policy implements.
    fn mode(&self) -> SimulationMode;

    /// Produces the snapshot one cycle after `state`.
    ///
    /// # Arguments
    ///
    /// * `state` - The current snapshot.
    /// * `instructions` - The full program of the run.
    fn advance(&self, state: &SimulationState, instructions: &[Instruction]) -> SimulationState;
}
