//! Simulator: owns the program, the hazard policy, and the snapshot timeline.
//!
//! The pipeline engine is pure and keeps no reference to the program between
//! calls. A `Simulator` holds the program fixed for the run, asks the policy
//! for each next snapshot, and (unless `general.retain_snapshots` is off)
//! retains superseded snapshots so front ends can replay earlier cycles.

use tracing::{debug, trace};

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::pipeline::engine::{SimulationState, initialize};
use crate::core::pipeline::hazards::policy_for;
use crate::core::pipeline::latches::PipelineRegister;
use crate::core::pipeline::traits::HazardPolicy;
use crate::sim::loader::{candidate_lines, parse_instructions};
use crate::sim::program::Instruction;
use crate::stats::SimStats;
use crate::validate::{InstructionOracle, validate_lines};

/// Top-level simulation session.
#[derive(Debug)]
pub struct Simulator {
    instructions: Vec<Instruction>,
    policy: Box<dyn HazardPolicy>,
    state: SimulationState,
    snapshots: Vec<SimulationState>,
    max_cycles: u64,
    trace: bool,
    retain_snapshots: bool,
}

impl Simulator {
    /// Creates a session over an already parsed program.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ModeNotImplemented`] if the configured hazard mode has
    /// no policy.
    pub fn new(instructions: Vec<Instruction>, config: &Config) -> Result<Self, SimError> {
        let policy = policy_for(config.pipeline.mode)?;
        let state = initialize(&instructions);
        debug!(
            instructions = instructions.len(),
            mode = %policy.mode(),
            "simulation initialized"
        );
        Ok(Self {
            instructions,
            policy,
            state,
            snapshots: Vec::new(),
            max_cycles: config.general.max_cycles,
            trace: config.general.trace,
            retain_snapshots: config.general.retain_snapshots,
        })
    }

    /// Validates and parses program text, then creates a session.
    ///
    /// Validation runs only when `config.general.validate` is set. All rejected
    /// lines are reported together and no session is created.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Validation`] with every rejection message, or
    /// [`SimError::ModeNotImplemented`] as for [`Simulator::new`].
    pub fn from_source(
        text: &str,
        config: &Config,
        oracle: &dyn InstructionOracle,
    ) -> Result<Self, SimError> {
        if config.general.validate {
            let errors = validate_lines(&candidate_lines(text), oracle);
            if !errors.is_empty() {
                return Err(SimError::Validation(errors));
            }
        }
        Self::new(parse_instructions(text), config)
    }

    /// Advances one clock cycle and returns the new snapshot.
    ///
    /// The previous snapshot is kept in [`Simulator::snapshots`] when
    /// retention is enabled and dropped otherwise.
    pub fn tick(&mut self) -> &SimulationState {
        let next = self.policy.advance(&self.state, &self.instructions);
        let previous = std::mem::replace(&mut self.state, next);
        if self.retain_snapshots {
            self.snapshots.push(previous);
        }

        if self.trace {
            let name = |register| {
                self.state
                    .occupant(register)
                    .map_or("-", |inst| inst.assembly())
            };
            trace!(
                cycle = self.state.clock_cycle(),
                if_id = name(PipelineRegister::IfId),
                id_ex = name(PipelineRegister::IdEx),
                ex_mem = name(PipelineRegister::ExMem),
                mem_wb = name(PipelineRegister::MemWb),
                "cycle"
            );
        }

        &self.state
    }

    /// Ticks until the program has drained or the cycle limit is reached.
    ///
    /// Returns the number of cycles executed by this call.
    pub fn run(&mut self) -> u64 {
        let start = self.state.clock_cycle();
        while !self.is_finished() && self.state.clock_cycle() < self.max_cycles {
            let _ = self.tick();
        }
        let executed = self.state.clock_cycle() - start;
        debug!(
            cycles = executed,
            finished = self.is_finished(),
            "run stopped"
        );
        executed
    }

    /// Ticks up to `cycles` times, stopping early once finished.
    ///
    /// Returns the number of cycles executed.
    pub fn run_for(&mut self, cycles: u64) -> u64 {
        let mut executed = 0;
        while executed < cycles && !self.is_finished() {
            let _ = self.tick();
            executed += 1;
        }
        executed
    }

    /// Returns to cycle zero with the same program, discarding all snapshots.
    pub fn reset(&mut self) {
        self.state = initialize(&self.instructions);
        self.snapshots.clear();
    }

    /// Whether every instruction has drained through write-back.
    pub fn is_finished(&self) -> bool {
        self.state.is_finished(self.instructions.len())
    }

    /// The current snapshot.
    pub const fn state(&self) -> &SimulationState {
        &self.state
    }

    /// All retained superseded snapshots, oldest first (cycle 0 up to the
    /// previous cycle). Always empty when retention is disabled.
    pub fn snapshots(&self) -> &[SimulationState] {
        &self.snapshots
    }

    /// The snapshot after `cycle` steps, if it has been reached and is still
    /// held. Without retention only the current cycle is available.
    pub fn snapshot_at(&self, cycle: u64) -> Option<&SimulationState> {
        if cycle == self.state.clock_cycle() {
            return Some(&self.state);
        }
        usize::try_from(cycle)
            .ok()
            .and_then(|idx| self.snapshots.get(idx))
    }

    /// The program being simulated.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Statistics for the current snapshot.
    pub fn stats(&self) -> SimStats {
        SimStats::from_state(&self.state, &self.instructions)
    }
}
