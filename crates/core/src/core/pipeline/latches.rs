//! Pipeline latch structures for inter-stage communication.
//!
//! The pipeline has four latches between its five stages:
//! Fetch → IF/ID → Decode → ID/EX → Execute → EX/MEM → Memory → MEM/WB → Writeback.
//!
//! Each latch holds at most one instruction; an empty latch is a bubble.

use std::fmt;

use serde::Serialize;

use crate::sim::program::Instruction;

/// Number of latches in the pipeline.
pub const LATCH_COUNT: usize = 4;

/// Identifies one of the four inter-stage latches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PipelineRegister {
    /// Fetch to Decode.
    IfId,
    /// Decode to Execute.
    IdEx,
    /// Execute to Memory.
    ExMem,
    /// Memory to Writeback.
    MemWb,
}

impl PipelineRegister {
    /// All latches in program-flow order, nearest fetch first.
    pub const ALL: [Self; LATCH_COUNT] = [Self::IfId, Self::IdEx, Self::ExMem, Self::MemWb];

    /// Conventional name, e.g. `"IF/ID"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::IfId => "IF/ID",
            Self::IdEx => "ID/EX",
            Self::ExMem => "EX/MEM",
            Self::MemWb => "MEM/WB",
        }
    }

    /// Position in [`PipelineRegister::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::IfId => 0,
            Self::IdEx => 1,
            Self::ExMem => 2,
            Self::MemWb => 3,
        }
    }

    /// The latch that feeds this one on a shift, or `None` for IF/ID, which is
    /// filled by fetch.
    pub const fn upstream(self) -> Option<Self> {
        match self {
            Self::IfId => None,
            Self::IdEx => Some(Self::IfId),
            Self::ExMem => Some(Self::IdEx),
            Self::MemWb => Some(Self::ExMem),
        }
    }
}

impl fmt::Display for PipelineRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A pipeline latch and its current occupant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Latch {
    /// Which latch this is.
    pub register: PipelineRegister,
    /// The instruction held, or `None` for a bubble.
    pub instruction: Option<Instruction>,
}

impl Latch {
    /// Creates an empty latch.
    pub const fn empty(register: PipelineRegister) -> Self {
        Self {
            register,
            instruction: None,
        }
    }

    /// Creates a latch holding `instruction`.
    pub const fn holding(register: PipelineRegister, instruction: Option<Instruction>) -> Self {
        Self {
            register,
            instruction,
        }
    }

    /// Checks if the latch is a bubble.
    pub const fn is_empty(&self) -> bool {
        self.instruction.is_none()
    }
}
