//! Instruction Disassembler for MIPS32.
//!
//! Converts a 32-bit instruction encoding, or its `0x`-prefixed hexadecimal
//! text, into the assembly string shown in pipeline latches and histories.
//!
//! # Usage
//!
//! ```
//! use mipsvis_core::isa::disasm::{disassemble, disassemble_hex};
//! assert_eq!(disassemble(0x8e110000), "lw $s1, 0($s0)");
//! assert_eq!(disassemble_hex("0x00000000"), "nop");
//! ```

use crate::isa::decode::decode;

/// Disassembles a 32-bit MIPS instruction into a human-readable string.
///
/// Never fails: unsupported encodings produce `"R-type (funct: N)"` or
/// `"Unknown (op: N)"`.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    decode(inst).to_string()
}

/// Parses `0x`-prefixed hexadecimal text into a 32-bit word.
///
/// Accepts either prefix case and either digit case. Returns `None` when the
/// text is not a hexadecimal number that fits in 32 bits.
pub fn parse_word(hex: &str) -> Option<u32> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Disassembles `0x`-prefixed hexadecimal instruction text.
///
/// Total like [`disassemble`]: text that is not a 32-bit hex number renders
/// as `"Invalid (<text>)"`.
pub fn disassemble_hex(hex: &str) -> String {
    parse_word(hex).map_or_else(|| format!("Invalid ({hex})"), disassemble)
}
