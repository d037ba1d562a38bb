//! Instruction records flowing through the pipeline.

use std::fmt;

use serde::Serialize;

use crate::isa::decode::{Decoded, decode};
use crate::isa::disasm::{disassemble_hex, parse_word};

/// A program instruction.
///
/// Created once by the loader and never modified afterwards. The assembly
/// text is always the disassembly of the hex text, so the fields are only
/// readable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Instruction {
    id: usize,
    hex: String,
    assembly: String,
}

impl Instruction {
    /// Creates an instruction, disassembling `hex`.
    pub fn new(id: usize, hex: impl Into<String>) -> Self {
        let hex = hex.into();
        let assembly = disassemble_hex(&hex);
        Self { id, hex, assembly }
    }

    /// Zero-based position in program order.
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Source text exactly as written (after trimming), e.g. `0x8e110000`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Disassembly of [`Instruction::hex`], computed once at creation.
    pub fn assembly(&self) -> &str {
        &self.assembly
    }

    /// The 32-bit encoding, or `None` if `hex` is not valid hex text.
    pub fn word(&self) -> Option<u32> {
        parse_word(&self.hex)
    }

    /// The typed decoding, or `None` if `hex` is not valid hex text.
    pub fn decoded(&self) -> Option<Decoded> {
        self.word().map(decode)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.assembly, self.hex)
    }
}
