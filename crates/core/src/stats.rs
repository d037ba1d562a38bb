//! Simulation statistics collection and reporting.
//!
//! This module derives performance metrics from a pipeline snapshot. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and derived CPI/IPC.
//! 2. **Occupancy:** Busy and bubble cycles per latch.
//! 3. **Instruction mix:** Retired instructions by category (ALU, load, store, branch, jump).

use std::fmt::{self, Write as _};

use serde::Serialize;

use crate::core::pipeline::engine::SimulationState;
use crate::core::pipeline::latches::{LATCH_COUNT, PipelineRegister};
use crate::isa::decode::OpClass;
use crate::sim::program::Instruction;

/// Section names for selective stats output.
///
/// Pass an empty slice to [`SimStats::render_sections`] to render all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "occupancy", "instruction_mix"];

/// Statistics for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total cycles elapsed.
    pub cycles: u64,
    /// Instructions in the program.
    pub program_length: u64,
    /// Instructions that have passed write-back.
    pub instructions_retired: u64,
    /// Cycles each latch held an instruction, indexed like [`PipelineRegister::ALL`].
    pub busy: [u64; LATCH_COUNT],
    /// Cycles each latch held a bubble, indexed like [`PipelineRegister::ALL`].
    pub bubbles: [u64; LATCH_COUNT],

    /// Retired `nop`s.
    pub inst_nop: u64,
    /// Retired ALU instructions (arithmetic, logic, shifts, `lui`).
    pub inst_alu: u64,
    /// Retired loads.
    pub inst_load: u64,
    /// Retired stores.
    pub inst_store: u64,
    /// Retired conditional branches.
    pub inst_branch: u64,
    /// Retired jumps (`j`, `jal`, `jr`).
    pub inst_jump: u64,
    /// Retired encodings outside the supported subset.
    pub inst_unknown: u64,
}

impl SimStats {
    /// Collects statistics from a snapshot.
    ///
    /// # Arguments
    ///
    /// * `state` - The snapshot to summarise.
    /// * `instructions` - The program of the run.
    pub fn from_state(state: &SimulationState, instructions: &[Instruction]) -> Self {
        let mut stats = Self {
            cycles: state.clock_cycle(),
            program_length: instructions.len() as u64,
            ..Self::default()
        };

        for register in PipelineRegister::ALL {
            let history = state.history(register);
            let busy = history.iter().filter(|slot| slot.is_some()).count() as u64;
            stats.busy[register.index()] = busy;
            stats.bubbles[register.index()] = history.len() as u64 - busy;
        }

        for retired in state.wb_history().iter().flatten() {
            stats.instructions_retired += 1;
            match retired.decoded() {
                Some(decoded) if decoded.is_unknown() => stats.inst_unknown += 1,
                Some(decoded) => match decoded.op().map(|op| op.class()) {
                    None => stats.inst_nop += 1,
                    Some(OpClass::Alu) => stats.inst_alu += 1,
                    Some(OpClass::Load) => stats.inst_load += 1,
                    Some(OpClass::Store) => stats.inst_store += 1,
                    Some(OpClass::Branch) => stats.inst_branch += 1,
                    Some(OpClass::Jump) => stats.inst_jump += 1,
                },
                None => stats.inst_unknown += 1,
            }
        }

        stats
    }

    /// Cycles per retired instruction, or `None` before anything retires.
    pub fn cpi(&self) -> Option<f64> {
        (self.instructions_retired > 0)
            .then(|| self.cycles as f64 / self.instructions_retired as f64)
    }

    /// Retired instructions per cycle, or `None` at cycle zero.
    pub fn ipc(&self) -> Option<f64> {
        (self.cycles > 0).then(|| self.instructions_retired as f64 / self.cycles as f64)
    }

    /// Renders the full report.
    pub fn render(&self) -> String {
        self.render_sections::<&str>(&[])
    }

    /// Renders only the requested sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an
    /// empty slice to render everything.
    pub fn render_sections<S: AsRef<str>>(&self, sections: &[S]) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_sections(&mut out, sections);
        out
    }

    /// Prints the full report to stdout.
    pub fn print(&self) {
        print!("{}", self.render());
    }

    fn write_sections<S: AsRef<str>>(&self, out: &mut String, sections: &[S]) -> fmt::Result {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x.as_ref() == s);
        let cyc = self.cycles.max(1) as f64;
        let instr = self.instructions_retired.max(1) as f64;

        if want("summary") {
            writeln!(out, "==========================================================")?;
            writeln!(out, "MIPS PIPELINE SIMULATION STATISTICS")?;
            writeln!(out, "==========================================================")?;
            writeln!(out, "sim_cycles               {}", self.cycles)?;
            writeln!(out, "sim_program              {}", self.program_length)?;
            writeln!(out, "sim_insts                {}", self.instructions_retired)?;
            match (self.ipc(), self.cpi()) {
                (Some(ipc), Some(cpi)) => {
                    writeln!(out, "sim_ipc                  {ipc:.4}")?;
                    writeln!(out, "sim_cpi                  {cpi:.4}")?;
                }
                _ => {
                    writeln!(out, "sim_ipc                  -")?;
                    writeln!(out, "sim_cpi                  -")?;
                }
            }
            writeln!(out, "----------------------------------------------------------")?;
        }
        if want("occupancy") {
            writeln!(out, "LATCH OCCUPANCY")?;
            for register in PipelineRegister::ALL {
                let busy = self.busy[register.index()];
                let bubbles = self.bubbles[register.index()];
                writeln!(
                    out,
                    "  {:<8} busy {:>5} ({:>6.2}%)  bubbles {:>5}",
                    register.name(),
                    busy,
                    (busy as f64 / cyc) * 100.0,
                    bubbles
                )?;
            }
            writeln!(out, "----------------------------------------------------------")?;
        }
        if want("instruction_mix") {
            writeln!(out, "INSTRUCTION MIX")?;
            let rows = [
                ("op.alu", self.inst_alu),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.branch", self.inst_branch),
                ("op.jump", self.inst_jump),
                ("op.nop", self.inst_nop),
                ("op.unknown", self.inst_unknown),
            ];
            for (name, count) in rows {
                writeln!(
                    out,
                    "  {name:<22} {count} ({:.2}%)",
                    (count as f64 / instr) * 100.0
                )?;
            }
            writeln!(out, "----------------------------------------------------------")?;
        }
        Ok(())
    }
}
