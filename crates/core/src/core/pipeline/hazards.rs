//! Hazard Policies.
//!
//! Resolves a [`SimulationMode`] to the [`HazardPolicy`] that drives the clock
//! step. Only the ideal pipeline is implemented:
//! 1. **No hazards:** Every instruction advances one latch per cycle; data and
//!    control dependencies are ignored.
//! 2. **Stalls / Forwarding:** Recognised modes without a policy yet; selecting
//!    them fails with [`SimError::ModeNotImplemented`].

use crate::common::error::SimError;
use crate::config::SimulationMode;
use crate::core::pipeline::engine::{SimulationState, step};
use crate::core::pipeline::traits::HazardPolicy;
use crate::sim::program::Instruction;

/// The ideal pipeline: shift every latch and fetch in program order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHazards;

impl HazardPolicy for NoHazards {
    fn mode(&self) -> SimulationMode {
        SimulationMode::NoHazards
    }

    fn advance(&self, state: &SimulationState, instructions: &[Instruction]) -> SimulationState {
        step(state, instructions)
    }
}

/// Returns the hazard policy for `mode`.
///
/// # Errors
///
/// Returns [`SimError::ModeNotImplemented`] for [`SimulationMode::Stalls`] and
/// [`SimulationMode::Forwarding`].
pub fn policy_for(mode: SimulationMode) -> Result<Box<dyn HazardPolicy>, SimError> {
    match mode {
        SimulationMode::NoHazards => Ok(Box::new(NoHazards)),
        SimulationMode::Stalls | SimulationMode::Forwarding => {
            Err(SimError::ModeNotImplemented(mode))
        }
    }
}
