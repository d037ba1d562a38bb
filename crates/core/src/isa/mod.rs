//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the field layout, opcode and function-code tables, and the decoding
//! logic for the subset of MIPS32 that the visualizer understands.
//!
//! # Formats
//!
//! * R-type: `opcode | rs | rt | rd | shamt | funct`
//! * I-type: `opcode | rs | rt | immediate`
//! * J-type: `opcode | target`

/// Application Binary Interface (ABI) register names.
pub mod abi;

/// Decoding of 32-bit words into typed instruction shapes.
pub mod decode;

/// Instruction disassembler producing assembly text.
pub mod disasm;

/// R-type function codes (SPECIAL opcode).
pub mod funct;

/// Bit-field extraction utilities.
pub mod instruction;

/// Primary opcode values.
pub mod opcodes;
