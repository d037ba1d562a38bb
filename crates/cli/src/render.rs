//! Text rendering of pipeline snapshots.
//!
//! Produces the two views of the visualizer:
//! 1. **Stages:** The four latches of the current cycle, each showing its
//!    instruction or a bubble.
//! 2. **History:** A grid with one row per latch plus a `WB` row and one column per
//!    elapsed cycle, each cell holding the instruction id that occupied it.

use std::fmt::Write as _;

use mipsvis_core::core::pipeline::engine::SimulationState;
use mipsvis_core::core::pipeline::latches::PipelineRegister;
use mipsvis_core::sim::program::Instruction;

/// Marker shown for an empty latch.
pub const BUBBLE: &str = "-";

/// Minimum width of a history cell.
const CELL: usize = 4;

/// Renders the current latch contents as one line per latch.
pub fn render_stages(state: &SimulationState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Clock Cycle: {}", state.clock_cycle());
    for latch in state.pipeline() {
        let body = latch.instruction.as_ref().map_or_else(
            || BUBBLE.to_owned(),
            |inst| format!("{:<10}  {}", inst.hex(), inst.assembly()),
        );
        let _ = writeln!(out, "  {:<7} {body}", latch.register.name());
    }
    out
}

fn cell(slot: Option<&Instruction>) -> String {
    slot.map_or_else(|| BUBBLE.to_owned(), |inst| format!("I{}", inst.id()))
}

fn history_row(out: &mut String, label: &str, slots: &[Option<Instruction>], width: usize) {
    let _ = write!(out, "{label:<7}");
    for slot in slots {
        let _ = write!(out, "{:>width$}", cell(slot.as_ref()));
    }
    out.push('\n');
}

/// Cell width that fits the widest id and cycle number plus one space.
fn cell_width(state: &SimulationState) -> usize {
    let widest_id = PipelineRegister::ALL
        .iter()
        .flat_map(|&register| state.history(register))
        .chain(state.wb_history())
        .flatten()
        .map(|inst| cell(Some(inst)).len())
        .max()
        .unwrap_or(0);
    let widest_cycle = state.clock_cycle().saturating_sub(1).to_string().len();
    CELL.max(widest_id.max(widest_cycle) + 1)
}

/// Renders the per-cycle history grid.
pub fn render_history(state: &SimulationState) -> String {
    let width = cell_width(state);
    let mut out = String::new();
    let _ = write!(out, "{:<7}", "cycle");
    for cycle in 0..state.clock_cycle() {
        let _ = write!(out, "{cycle:>width$}");
    }
    out.push('\n');

    for register in PipelineRegister::ALL {
        history_row(&mut out, register.name(), state.history(register), width);
    }
    history_row(&mut out, "WB", state.wb_history(), width);
    out
}

/// Renders the program listing with instruction ids.
pub fn render_program(instructions: &[Instruction]) -> String {
    let mut out = String::new();
    for inst in instructions {
        let _ = writeln!(out, "  I{:<3} {:<10}  {}", inst.id(), inst.hex(), inst.assembly());
    }
    out
}
