//! MIPS o32 ABI register names.
//!
//! Maps the 5-bit register numbers found in instruction fields to the
//! conventional assembler names used in disassembly.

/// ABI register names for `$0`–`$31`.
pub const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// Returns the ABI name for a register index.
///
/// Field extraction masks indices to five bits, so out-of-range values only
/// appear through direct calls and are rendered as `"??"`.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("??")
}
