//! Advisory instruction validation.
//!
//! Before a run starts, the raw program lines are checked in two tiers:
//! 1. **Format:** Lines that are not `0x` + 8 hex digits are rejected locally and
//!    deterministically; the oracle is not consulted for them.
//! 2. **Semantics:** Well-formed lines are put to an [`InstructionOracle`], which
//!    may explain why a word is not a valid MIPS instruction.
//!
//! The oracle is advisory. If it cannot answer, the line passes and the failure
//! is only logged. Errors are collected for every line rather than stopping at
//! the first one.

use tracing::{debug, warn};

use crate::common::error::OracleError;
use crate::isa::decode::{Decoded, decode};
use crate::isa::disasm::parse_word;
use crate::sim::loader::is_instruction_text;

/// An oracle's opinion on one instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The instruction is valid.
    Valid,
    /// The instruction is invalid, with an explanation for the user.
    Invalid(String),
}

/// A source of opinions on whether an instruction is valid MIPS.
///
/// Remote validators (for example a language-model service) implement this and
/// report transport problems as [`OracleError`]s.
pub trait InstructionOracle {
    /// Judges a single well-formed instruction line such as `0x8e110000`.
    ///
    /// # Errors
    ///
    /// Returns an [`OracleError`] when no verdict could be obtained.
    fn check(&self, instruction: &str) -> Result<Verdict, OracleError>;
}

/// Offline oracle backed by the decoder.
///
/// A word is invalid when it falls outside the decoded instruction subset.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoderOracle;

impl InstructionOracle for DecoderOracle {
    fn check(&self, instruction: &str) -> Result<Verdict, OracleError> {
        let word = parse_word(instruction)
            .ok_or_else(|| OracleError::Malformed(format!("'{instruction}' is not hex")))?;

        Ok(match decode(word) {
            Decoded::UnknownOpcode { opcode } => Verdict::Invalid(format!(
                "opcode 0x{opcode:02x} is not a supported MIPS instruction"
            )),
            Decoded::UnknownFunct { funct } => Verdict::Invalid(format!(
                "R-type funct 0x{funct:02x} is not a supported MIPS instruction"
            )),
            _ => Verdict::Valid,
        })
    }
}

/// Oracle that accepts every instruction.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveOracle;

impl InstructionOracle for PermissiveOracle {
    fn check(&self, _instruction: &str) -> Result<Verdict, OracleError> {
        Ok(Verdict::Valid)
    }
}

/// Formats the error for a line that does not have the instruction shape.
///
/// `line_no` is 1-based.
pub fn format_error(line_no: usize, text: &str) -> String {
    format!("Line {line_no}: \"{text}\" is not a valid 32-bit hex value (e.g., 0x01234567).")
}

/// Formats the error for a line the oracle rejected.
///
/// `line_no` is 1-based.
pub fn invalid_error(line_no: usize, text: &str, reason: &str) -> String {
    format!("Line {line_no} ({text}): {reason}")
}

/// Validates candidate program lines.
///
/// Returns one message per rejected line, in line order. An empty result means
/// the program may be parsed and simulated.
///
/// # Arguments
///
/// * `lines` - Trimmed, non-empty program lines (see
///   [`candidate_lines`](crate::sim::loader::candidate_lines)).
/// * `oracle` - The validator consulted for well-formed lines.
pub fn validate_lines<S: AsRef<str>>(lines: &[S], oracle: &dyn InstructionOracle) -> Vec<String> {
    let mut errors = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let line_no = idx + 1;

        if !is_instruction_text(line) {
            errors.push(format_error(line_no, line));
            continue;
        }

        match oracle.check(line) {
            Ok(Verdict::Valid) => {}
            Ok(Verdict::Invalid(reason)) => errors.push(invalid_error(line_no, line, &reason)),
            Err(err) => warn!(line = line_no, instruction = line, error = %err, "oracle failed; accepting line"),
        }
    }

    debug!(lines = lines.len(), errors = errors.len(), "validation finished");
    errors
}
