//! Pipeline engine: simulation snapshots and the clock-step transition.
//!
//! A [`SimulationState`] is an immutable snapshot of the pipeline after some
//! number of clock cycles. [`step`] never modifies its input; it builds and
//! returns the next snapshot, so earlier snapshots can be kept for replay and
//! compared freely.
//!
//! Each step works in three phases:
//! 1. **Log:** Record every latch's occupant in its history, and MEM/WB's
//!    occupant in the write-back history.
//! 2. **Shift:** Move every occupant one latch toward write-back.
//! 3. **Fetch:** Load the next program-order instruction into IF/ID.

use serde::Serialize;

use crate::core::pipeline::latches::{LATCH_COUNT, Latch, PipelineRegister};
use crate::sim::program::Instruction;

/// Number of cycles between an instruction's fetch and its write-back.
///
/// Histories are logged before the shift, so instruction `i` (fetched during
/// cycle `i`) is first logged in IF/ID's history at index `i + 1` and appears
/// in the write-back history at index `i + WRITEBACK_DELAY`.
pub const WRITEBACK_DELAY: usize = LATCH_COUNT;

/// Per-cycle occupants of a latch, one entry per elapsed cycle.
pub type History = Vec<Option<Instruction>>;

/// Snapshot of the pipeline after `clock_cycle` steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationState {
    clock_cycle: u64,
    pipeline: [Latch; LATCH_COUNT],
    history: [History; LATCH_COUNT],
    wb_history: History,
}

impl SimulationState {
    /// Number of completed steps.
    pub const fn clock_cycle(&self) -> u64 {
        self.clock_cycle
    }

    /// The four latches in program-flow order.
    pub const fn pipeline(&self) -> &[Latch; LATCH_COUNT] {
        &self.pipeline
    }

    /// The latch identified by `register`.
    pub const fn latch(&self, register: PipelineRegister) -> &Latch {
        &self.pipeline[register.index()]
    }

    /// The instruction in `register`, if any.
    pub const fn occupant(&self, register: PipelineRegister) -> Option<&Instruction> {
        self.latch(register).instruction.as_ref()
    }

    /// What occupied `register` at the start of each elapsed cycle.
    pub fn history(&self, register: PipelineRegister) -> &[Option<Instruction>] {
        &self.history[register.index()]
    }

    /// What was writing back (the MEM/WB occupant) at the start of each elapsed cycle.
    pub fn wb_history(&self) -> &[Option<Instruction>] {
        &self.wb_history
    }

    /// Checks whether every latch is empty.
    pub fn is_drained(&self) -> bool {
        self.pipeline.iter().all(Latch::is_empty)
    }

    /// Checks whether a program of `instruction_count` instructions has fully
    /// drained through the pipeline.
    pub fn is_finished(&self, instruction_count: usize) -> bool {
        let last_shift = instruction_count as u64 + (WRITEBACK_DELAY as u64 - 1);
        self.clock_cycle > last_shift && self.is_drained()
    }
}

/// Creates the initial snapshot for a run.
///
/// The instruction list is not inspected; it is accepted so that `initialize`
/// and [`step`] share a signature shape.
pub fn initialize(_instructions: &[Instruction]) -> SimulationState {
    SimulationState {
        clock_cycle: 0,
        pipeline: PipelineRegister::ALL.map(Latch::empty),
        history: Default::default(),
        wb_history: Vec::new(),
    }
}

/// Advances the pipeline by one clock cycle.
///
/// Returns a new snapshot; `state` and `instructions` are left untouched.
/// The instruction fetched is `instructions[state.clock_cycle()]`, so fetch is
/// strictly in program order with one instruction per cycle until the list is
/// exhausted.
///
/// # Arguments
///
/// * `state` - The snapshot to advance from.
/// * `instructions` - The full program, identical on every call of a run.
pub fn step(state: &SimulationState, instructions: &[Instruction]) -> SimulationState {
    let history = PipelineRegister::ALL.map(|register| {
        let mut log = state.history[register.index()].clone();
        log.push(state.occupant(register).cloned());
        log
    });

    let mut wb_history = state.wb_history.clone();
    wb_history.push(state.occupant(PipelineRegister::MemWb).cloned());

    let fetched = usize::try_from(state.clock_cycle)
        .ok()
        .and_then(|idx| instructions.get(idx))
        .cloned();

    let pipeline = PipelineRegister::ALL.map(|register| match register.upstream() {
        Some(source) => Latch::holding(register, state.occupant(source).cloned()),
        None => Latch::holding(register, fetched.clone()),
    });

    SimulationState {
        clock_cycle: state.clock_cycle + 1,
        pipeline,
        history,
        wb_history,
    }
}
