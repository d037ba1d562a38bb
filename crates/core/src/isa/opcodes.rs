//! Primary opcode values (bits 31-26).

/// SPECIAL: R-type instructions, dispatched on the funct field.
pub const OP_SPECIAL: u32 = 0x00;
/// Jump.
pub const OP_J: u32 = 0x02;
/// Jump and link.
pub const OP_JAL: u32 = 0x03;
/// Branch on equal.
pub const OP_BEQ: u32 = 0x04;
/// Branch on not equal.
pub const OP_BNE: u32 = 0x05;
/// Add immediate (trapping on overflow).
pub const OP_ADDI: u32 = 0x08;
/// Add immediate unsigned.
pub const OP_ADDIU: u32 = 0x09;
/// Set on less than immediate.
pub const OP_SLTI: u32 = 0x0a;
/// AND immediate.
pub const OP_ANDI: u32 = 0x0c;
/// OR immediate.
pub const OP_ORI: u32 = 0x0d;
/// Load upper immediate.
pub const OP_LUI: u32 = 0x0f;
/// Load word.
pub const OP_LW: u32 = 0x23;
/// Load byte unsigned.
pub const OP_LBU: u32 = 0x24;
/// Load halfword unsigned.
pub const OP_LHU: u32 = 0x25;
/// Store byte.
pub const OP_SB: u32 = 0x28;
/// Store halfword.
pub const OP_SH: u32 = 0x29;
/// Store word.
pub const OP_SW: u32 = 0x2b;
