//! Program Loader.
//!
//! This module turns user-supplied program text into instructions. It performs:
//! 1. **Shape check:** A line is an instruction only if it is exactly `0x` followed by eight
//!    hexadecimal digits.
//! 2. **Parsing:** Surviving lines become [`Instruction`]s numbered in program order.
//! 3. **File reading:** Program text can be read from disk for the CLI.
//!
//! Lines that fail the shape check are dropped silently; reporting them is the job of
//! [`validate`](crate::validate).

use std::fs;
use std::path::Path;

use crate::common::error::LoadError;
use crate::sim::program::Instruction;

/// Required prefix of instruction text.
pub const HEX_PREFIX: &str = "0x";

/// Number of hexadecimal digits in an instruction word.
pub const HEX_DIGITS: usize = 8;

/// Total length of instruction text (`0x` + 8 digits).
pub const INSTRUCTION_TEXT_LEN: usize = HEX_PREFIX.len() + HEX_DIGITS;

/// Checks whether `line` has the instruction text shape `0x` + 8 hex digits.
///
/// The prefix must be lowercase; the digits may be either case.
pub fn is_instruction_text(line: &str) -> bool {
    line.len() == INSTRUCTION_TEXT_LEN
        && line
            .strip_prefix(HEX_PREFIX)
            .is_some_and(|digits| digits.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Returns the trimmed, non-empty lines of `text` in order.
///
/// This is the list handed to validation before a run starts.
pub fn candidate_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parses program text into instructions.
///
/// Each line is trimmed; lines that are not instruction text are skipped. The
/// remaining lines get `id`s `0..n` in the order they appear.
///
/// # Arguments
///
/// * `text` - Multi-line program text.
pub fn parse_instructions(text: &str) -> Vec<Instruction> {
    text.lines()
        .map(str::trim)
        .filter(|line| is_instruction_text(line))
        .enumerate()
        .map(|(id, hex)| Instruction::new(id, hex))
        .collect()
}

/// Reads program text from a file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read.
pub fn read_program(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
