//! MIPS pipeline visualizer library.
//!
//! This crate implements a cycle-level model of the classic five-stage MIPS pipeline with the following:
//! 1. **ISA:** Bit-field decoding of 32-bit MIPS words (R/I/J formats) into assembly mnemonics.
//! 2. **Loader:** Parsing of `0x`-prefixed hex program text into immutable instruction records.
//! 3. **Pipeline:** The IF/ID, ID/EX, EX/MEM and MEM/WB latches, their per-cycle history and the
//!    pure `step` transition that advances the model by one clock.
//! 4. **Validation:** The advisory pre-run check with a pluggable instruction oracle.
//! 5. **Simulation:** Session driver, configuration, and statistics collection.

/// Common types shared across the crate (errors).
pub mod common;
/// Simulator configuration (defaults, hazard mode, JSON loading).
pub mod config;
/// Pipeline core (latches, engine, hazard policies).
pub mod core;
/// Instruction set (field extraction, opcodes, ABI names, decoder, disassembler).
pub mod isa;
/// Program loading and the simulation session.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;
/// Advisory instruction validation with pluggable oracles.
pub mod validate;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Immutable pipeline snapshot produced by each clock step.
pub use crate::core::pipeline::engine::SimulationState;
/// Parsed program instruction.
pub use crate::sim::program::Instruction;
/// Simulation session owning the program and the current snapshot.
pub use crate::sim::simulator::Simulator;
