//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for the MIPS32 instruction fields:
//!
//! ```text
//!  31    26 25   21 20   16 15   11 10    6 5     0
//! | opcode |  rs   |  rt   |  rd   | shamt | funct |   R-type
//! | opcode |  rs   |  rt   |      immediate        |   I-type
//! | opcode |            target                     |   J-type
//! ```

/// Bit shift for the opcode field (bits 26-31).
pub const OPCODE_SHIFT: u32 = 26;
/// Bit mask for the opcode field after shifting (6 bits).
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit shift for the first source register field (bits 21-25).
pub const RS_SHIFT: u32 = 21;
/// Bit shift for the second source / I-type destination field (bits 16-20).
pub const RT_SHIFT: u32 = 16;
/// Bit shift for the R-type destination register field (bits 11-15).
pub const RD_SHIFT: u32 = 11;
/// Bit shift for the shift-amount field (bits 6-10).
pub const SHAMT_SHIFT: u32 = 6;
/// Bit mask for any 5-bit register or shamt field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the funct field (bits 0-5).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the 16-bit immediate field (bits 0-15).
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump target field (bits 0-25).
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Width of the immediate field in bits.
const IMM_BITS: u32 = 16;
/// Width of an instruction word in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the primary opcode (bits 26-31).
    fn opcode(&self) -> u32;

    /// Extracts the first source register index (bits 21-25).
    fn rs(&self) -> usize;

    /// Extracts the second source register index (bits 16-20).
    ///
    /// For I-type instructions this is the destination register.
    fn rt(&self) -> usize;

    /// Extracts the R-type destination register index (bits 11-15).
    fn rd(&self) -> usize;

    /// Extracts the shift amount (bits 6-10).
    fn shamt(&self) -> u32;

    /// Extracts the R-type function code (bits 0-5).
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate (bits 0-15), zero-extended.
    fn imm(&self) -> u32;

    /// Extracts the 16-bit immediate sign-extended to 32 bits.
    fn simm(&self) -> i32;

    /// Extracts the 26-bit jump target field (bits 0-25).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm(&self) -> u32 {
        self & IMM_MASK
    }

    /// Shifts the immediate into the top half and arithmetic-shifts it back,
    /// so bit 15 is replicated through the upper 16 bits.
    #[inline(always)]
    fn simm(&self) -> i32 {
        let shift = INSTRUCTION_WIDTH - IMM_BITS;
        ((self.imm() as i32) << shift) >> shift
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}
