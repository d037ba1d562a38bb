//! Instruction pipeline implementation.
//!
//! This module contains the model of the classic five-stage pipeline
//! (IF, ID, EX, MEM, WB). It includes the following components:
//! 1. **Latches:** The four inter-stage registers and their occupants.
//! 2. **Engine:** The immutable simulation snapshot and the one-cycle `step` transition.
//! 3. **Hazards:** Hazard policies selected by [`SimulationMode`](crate::config::SimulationMode).
//! 4. **Traits:** The hazard-policy strategy interface.
//!
//! Write-back has no latch of its own: the instruction occupying MEM/WB at the
//! start of a cycle is the one writing back during it, and is logged in the
//! write-back history.

/// Simulation snapshot and the clock-step transition.
pub mod engine;

/// Hazard policy implementations and mode resolution.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Traits for pluggable pipeline behaviour.
pub mod traits;
