//! Instruction encoders and program builders.

use mipsvis_core::sim::loader::parse_instructions;
use mipsvis_core::sim::program::Instruction;

/// The six-instruction sample program offered by the visualizer.
///
/// `or`, `lw`, `sw`, `add`, `beq`, `nop` in that order.
pub const SAMPLE_PROGRAM: &str =
    "0x02108025\n0x8e110000\n0xae120004\n0x00640820\n0x10800001\n0x00000000\n";

/// Encode an R-type instruction.
pub fn r_type(rs: u32, rt: u32, rd: u32, shamt: u32, funct: u32) -> u32 {
    (rs & 0x1F) << 21 | (rt & 0x1F) << 16 | (rd & 0x1F) << 11 | (shamt & 0x1F) << 6 | (funct & 0x3F)
}

/// Encode an I-type instruction.
pub fn i_type(opcode: u32, rs: u32, rt: u32, imm: i32) -> u32 {
    (opcode & 0x3F) << 26 | (rs & 0x1F) << 21 | (rt & 0x1F) << 16 | (imm as u32 & 0xFFFF)
}

/// Encode a J-type instruction.
pub fn j_type(opcode: u32, target: u32) -> u32 {
    (opcode & 0x3F) << 26 | (target & 0x03FF_FFFF)
}

/// Formats a word as instruction text (`0x` + 8 lowercase digits).
pub fn hex(word: u32) -> String {
    format!("0x{word:08x}")
}

/// Builds a program from raw words, one line per word.
pub fn program(words: &[u32]) -> Vec<Instruction> {
    let text: Vec<String> = words.iter().copied().map(hex).collect();
    parse_instructions(&text.join("\n"))
}
