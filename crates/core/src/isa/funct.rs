//! Function codes (bits 5-0) for the SPECIAL opcode.

/// Shift left logical.
pub const SLL: u32 = 0x00;
/// Shift right logical.
pub const SRL: u32 = 0x02;
/// Jump register.
pub const JR: u32 = 0x08;
/// Add (trapping on overflow).
pub const ADD: u32 = 0x20;
/// Add unsigned.
pub const ADDU: u32 = 0x21;
/// Subtract (trapping on overflow).
pub const SUB: u32 = 0x22;
/// Subtract unsigned.
pub const SUBU: u32 = 0x23;
/// Bitwise AND.
pub const AND: u32 = 0x24;
/// Bitwise OR.
pub const OR: u32 = 0x25;
/// Bitwise NOR.
pub const NOR: u32 = 0x27;
/// Set on less than.
pub const SLT: u32 = 0x2a;
/// Set on less than unsigned.
pub const SLTU: u32 = 0x2b;
