//! MIPS Instruction Decoder.
//!
//! This module turns a 32-bit MIPS encoding into a typed [`Decoded`] value. Every
//! supported mnemonic is an [`Op`] variant and every operand layout is a
//! [`Decoded`] variant, so formatting and classification are exhaustive matches
//! rather than lookups on raw field values.
//!
//! Decoding is total: encodings outside the supported subset decode to
//! [`Decoded::UnknownFunct`] or [`Decoded::UnknownOpcode`].

use std::fmt;

use serde::Serialize;

use crate::isa::abi::reg_name;
use crate::isa::instruction::InstructionBits;
use crate::isa::{funct, opcodes};

/// Encoding format of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Format {
    /// Register format (`opcode == 0`).
    R,
    /// Immediate format.
    I,
    /// Jump format (`j`, `jal`).
    J,
}

/// Coarse instruction category, used for the instruction-mix statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum OpClass {
    /// Register or immediate arithmetic, logic, shifts, and `lui`.
    Alu,
    /// Memory loads.
    Load,
    /// Memory stores.
    Store,
    /// Conditional branches.
    Branch,
    /// Unconditional jumps, including `jr`.
    Jump,
}

/// Supported MIPS operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Op {
    Sll,
    Srl,
    Jr,
    Add,
    Addu,
    Sub,
    Subu,
    And,
    Or,
    Nor,
    Slt,
    Sltu,
    J,
    Jal,
    Beq,
    Bne,
    Addi,
    Addiu,
    Slti,
    Andi,
    Ori,
    Lui,
    Lw,
    Lbu,
    Lhu,
    Sb,
    Sh,
    Sw,
}

impl Op {
    /// Looks up the R-type operation for a SPECIAL funct code.
    pub const fn from_funct(code: u32) -> Option<Self> {
        Some(match code {
            funct::SLL => Self::Sll,
            funct::SRL => Self::Srl,
            funct::JR => Self::Jr,
            funct::ADD => Self::Add,
            funct::ADDU => Self::Addu,
            funct::SUB => Self::Sub,
            funct::SUBU => Self::Subu,
            funct::AND => Self::And,
            funct::OR => Self::Or,
            funct::NOR => Self::Nor,
            funct::SLT => Self::Slt,
            funct::SLTU => Self::Sltu,
            _ => return None,
        })
    }

    /// Looks up the J- or I-type operation for a primary opcode.
    ///
    /// Returns `None` for `OP_SPECIAL`; R-type operations are keyed by funct.
    pub const fn from_opcode(opcode: u32) -> Option<Self> {
        Some(match opcode {
            opcodes::OP_J => Self::J,
            opcodes::OP_JAL => Self::Jal,
            opcodes::OP_BEQ => Self::Beq,
            opcodes::OP_BNE => Self::Bne,
            opcodes::OP_ADDI => Self::Addi,
            opcodes::OP_ADDIU => Self::Addiu,
            opcodes::OP_SLTI => Self::Slti,
            opcodes::OP_ANDI => Self::Andi,
            opcodes::OP_ORI => Self::Ori,
            opcodes::OP_LUI => Self::Lui,
            opcodes::OP_LW => Self::Lw,
            opcodes::OP_LBU => Self::Lbu,
            opcodes::OP_LHU => Self::Lhu,
            opcodes::OP_SB => Self::Sb,
            opcodes::OP_SH => Self::Sh,
            opcodes::OP_SW => Self::Sw,
            _ => return None,
        })
    }

    /// Assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Jr => "jr",
            Self::Add => "add",
            Self::Addu => "addu",
            Self::Sub => "sub",
            Self::Subu => "subu",
            Self::And => "and",
            Self::Or => "or",
            Self::Nor => "nor",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::J => "j",
            Self::Jal => "jal",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Addi => "addi",
            Self::Addiu => "addiu",
            Self::Slti => "slti",
            Self::Andi => "andi",
            Self::Ori => "ori",
            Self::Lui => "lui",
            Self::Lw => "lw",
            Self::Lbu => "lbu",
            Self::Lhu => "lhu",
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sw => "sw",
        }
    }

    /// Encoding format of the operation.
    pub const fn format(self) -> Format {
        match self {
            Self::Sll
            | Self::Srl
            | Self::Jr
            | Self::Add
            | Self::Addu
            | Self::Sub
            | Self::Subu
            | Self::And
            | Self::Or
            | Self::Nor
            | Self::Slt
            | Self::Sltu => Format::R,
            Self::J | Self::Jal => Format::J,
            _ => Format::I,
        }
    }

    /// Instruction category.
    pub const fn class(self) -> OpClass {
        match self {
            Self::Lw | Self::Lbu | Self::Lhu => OpClass::Load,
            Self::Sb | Self::Sh | Self::Sw => OpClass::Store,
            Self::Beq | Self::Bne => OpClass::Branch,
            Self::J | Self::Jal | Self::Jr => OpClass::Jump,
            _ => OpClass::Alu,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A decoded instruction, one variant per operand layout.
///
/// Register operands are 5-bit indices into [`REG_NAMES`](crate::isa::abi::REG_NAMES).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Decoded {
    /// The all-zero word.
    Nop,
    /// `sll`/`srl`: `op $rd, $rt, shamt`.
    Shift {
        /// Operation.
        op: Op,
        /// Destination register.
        rd: usize,
        /// Source register.
        rt: usize,
        /// Shift amount.
        shamt: u32,
    },
    /// Three-register ALU operation: `op $rd, $rs, $rt`.
    RegReg {
        /// Operation.
        op: Op,
        /// Destination register.
        rd: usize,
        /// First source register.
        rs: usize,
        /// Second source register.
        rt: usize,
    },
    /// `jr $rs`.
    JumpReg {
        /// Operation.
        op: Op,
        /// Register holding the target address.
        rs: usize,
    },
    /// `j`/`jal` with the raw 26-bit target field.
    Jump {
        /// Operation.
        op: Op,
        /// Target field (bits 25-0), not shifted or combined with the PC.
        target: u32,
    },
    /// `addi`/`addiu`/`slti`: `op $rt, $rs, imm` with a signed immediate.
    ImmArith {
        /// Operation.
        op: Op,
        /// Destination register.
        rt: usize,
        /// Source register.
        rs: usize,
        /// Sign-extended immediate.
        imm: i32,
    },
    /// `andi`/`ori`: `op $rt, $rs, 0ximm` with a zero-extended immediate.
    ImmLogic {
        /// Operation.
        op: Op,
        /// Destination register.
        rt: usize,
        /// Source register.
        rs: usize,
        /// Zero-extended immediate.
        imm: u32,
    },
    /// `lui $rt, 0ximm`.
    LoadUpper {
        /// Destination register.
        rt: usize,
        /// Upper-half immediate.
        imm: u32,
    },
    /// `beq`/`bne`: `op $rs, $rt, offset`.
    Branch {
        /// Operation.
        op: Op,
        /// First compared register.
        rs: usize,
        /// Second compared register.
        rt: usize,
        /// Sign-extended word offset, as encoded.
        offset: i32,
    },
    /// Loads and stores: `op $rt, offset($rs)`.
    Memory {
        /// Operation.
        op: Op,
        /// Data register (destination for loads, source for stores).
        rt: usize,
        /// Base address register.
        base: usize,
        /// Sign-extended byte offset.
        offset: i32,
    },
    /// R-type encoding with an unsupported funct code.
    UnknownFunct {
        /// The funct field.
        funct: u32,
    },
    /// Unsupported primary opcode.
    UnknownOpcode {
        /// The opcode field.
        opcode: u32,
    },
}

impl Decoded {
    /// The operation, or `None` for `nop` and unsupported encodings.
    pub const fn op(&self) -> Option<Op> {
        match *self {
            Self::Shift { op, .. }
            | Self::RegReg { op, .. }
            | Self::JumpReg { op, .. }
            | Self::Jump { op, .. }
            | Self::ImmArith { op, .. }
            | Self::ImmLogic { op, .. }
            | Self::Branch { op, .. }
            | Self::Memory { op, .. } => Some(op),
            Self::LoadUpper { .. } => Some(Op::Lui),
            Self::Nop | Self::UnknownFunct { .. } | Self::UnknownOpcode { .. } => None,
        }
    }

    /// Whether the encoding fell outside the supported subset.
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::UnknownFunct { .. } | Self::UnknownOpcode { .. })
    }
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Nop => f.write_str("nop"),
            Self::Shift { op, rd, rt, shamt } => {
                write!(f, "{op} ${}, ${}, {shamt}", reg_name(rd), reg_name(rt))
            }
            Self::RegReg { op, rd, rs, rt } => write!(
                f,
                "{op} ${}, ${}, ${}",
                reg_name(rd),
                reg_name(rs),
                reg_name(rt)
            ),
            Self::JumpReg { op, rs } => write!(f, "{op} ${}", reg_name(rs)),
            Self::Jump { op, target } => write!(f, "{op} 0x{target:x}"),
            Self::ImmArith { op, rt, rs, imm } => {
                write!(f, "{op} ${}, ${}, {imm}", reg_name(rt), reg_name(rs))
            }
            Self::ImmLogic { op, rt, rs, imm } => {
                write!(f, "{op} ${}, ${}, 0x{imm:x}", reg_name(rt), reg_name(rs))
            }
            Self::LoadUpper { rt, imm } => write!(f, "lui ${}, 0x{imm:x}", reg_name(rt)),
            Self::Branch { op, rs, rt, offset } => {
                write!(f, "{op} ${}, ${}, {offset}", reg_name(rs), reg_name(rt))
            }
            Self::Memory {
                op,
                rt,
                base,
                offset,
            } => write!(f, "{op} ${}, {offset}(${})", reg_name(rt), reg_name(base)),
            Self::UnknownFunct { funct } => write!(f, "R-type (funct: {funct})"),
            Self::UnknownOpcode { opcode } => write!(f, "Unknown (op: {opcode})"),
        }
    }
}

/// Decodes a MIPS instruction into its typed form.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode
pub fn decode(inst: u32) -> Decoded {
    if inst == 0 {
        return Decoded::Nop;
    }

    let opcode = inst.opcode();
    if opcode == opcodes::OP_SPECIAL {
        return decode_r_type(inst);
    }

    match Op::from_opcode(opcode) {
        Some(op) => decode_ij_type(inst, op),
        None => Decoded::UnknownOpcode { opcode },
    }
}

/// Decodes the SPECIAL opcode space by funct.
fn decode_r_type(inst: u32) -> Decoded {
    let code = inst.funct();
    let Some(op) = Op::from_funct(code) else {
        return Decoded::UnknownFunct { funct: code };
    };

    match op {
        Op::Sll | Op::Srl => Decoded::Shift {
            op,
            rd: inst.rd(),
            rt: inst.rt(),
            shamt: inst.shamt(),
        },
        Op::Jr => Decoded::JumpReg { op, rs: inst.rs() },
        _ => Decoded::RegReg {
            op,
            rd: inst.rd(),
            rs: inst.rs(),
            rt: inst.rt(),
        },
    }
}

/// Decodes J-type and I-type encodings once the opcode is known.
fn decode_ij_type(inst: u32, op: Op) -> Decoded {
    let rs = inst.rs();
    let rt = inst.rt();

    match op {
        Op::J | Op::Jal => Decoded::Jump {
            op,
            target: inst.target(),
        },
        Op::Beq | Op::Bne => Decoded::Branch {
            op,
            rs,
            rt,
            offset: inst.simm(),
        },
        Op::Andi | Op::Ori => Decoded::ImmLogic {
            op,
            rt,
            rs,
            imm: inst.imm(),
        },
        Op::Lui => Decoded::LoadUpper { rt, imm: inst.imm() },
        Op::Lw | Op::Lbu | Op::Lhu | Op::Sb | Op::Sh | Op::Sw => Decoded::Memory {
            op,
            rt,
            base: rs,
            offset: inst.simm(),
        },
        _ => Decoded::ImmArith {
            op,
            rt,
            rs,
            imm: inst.simm(),
        },
    }
}
