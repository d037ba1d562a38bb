//! ISA tests.


/// Disassembly text for known encodings.
pub mod disasm;
