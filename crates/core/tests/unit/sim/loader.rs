//! Program Loader Tests.
//!
//! Verifies the instruction shape check, line filtering, id assignment, and
//! file reading.

use std::io::Write as _;

use mipsvis_core::common::LoadError;
use mipsvis_core::isa::disasm::disassemble;
use mipsvis_core::sim::loader::{
    candidate_lines, is_instruction_text, parse_instructions, read_program,
};
use mipsvis_core::sim::program::Instruction;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::{SAMPLE_PROGRAM, hex};

#[rstest]
#[case("0x8e110000", true)]
#[case("0x8E110000", true)]
#[case("0X8e110000", false)]
#[case("0x8e11000", false)]
#[case("0x8e1100000", false)]
#[case("0x8e11000z", false)]
#[case("8e110000ab", false)]
#[case("", false)]
fn checks_instruction_shape(#[case] line: &str, #[case] expected: bool) {
    assert_eq!(is_instruction_text(line), expected);
}

#[test]
fn parses_sample_program_in_order() {
    let instrs = parse_instructions(SAMPLE_PROGRAM);
    let listing: Vec<(usize, &str)> = instrs
        .iter()
        .map(|inst| (inst.id(), inst.assembly()))
        .collect();
    assert_eq!(
        listing,
        vec![
            (0, "or $s0, $s0, $s0"),
            (1, "lw $s1, 0($s0)"),
            (2, "sw $s2, 4($s0)"),
            (3, "add $at, $v1, $a0"),
            (4, "beq $a0, $zero, 1"),
            (5, "nop"),
        ]
    );
}

#[test]
fn skips_blank_and_malformed_lines() {
    let text = "\n  0x8e110000  \nhello\n\t\n0x1234\n0x00000000\r\n";
    let instrs = parse_instructions(text);
    assert_eq!(
        instrs,
        vec![
            Instruction::new(0, "0x8e110000"),
            Instruction::new(1, "0x00000000"),
        ]
    );
}

#[test]
fn candidate_lines_keep_malformed_text() {
    let text = "\n  0x8e110000  \nhello\n\t\n";
    assert_eq!(candidate_lines(text), vec!["0x8e110000", "hello"]);
}

#[test]
fn empty_text_has_no_instructions() {
    assert!(parse_instructions("").is_empty());
    assert!(parse_instructions("\n\n   \n").is_empty());
}

#[test]
fn instruction_display_and_word() {
    let inst = Instruction::new(3, "0x8e110000");
    assert_eq!(inst.to_string(), "lw $s1, 0($s0) (0x8e110000)");
    assert_eq!(inst.word(), Some(0x8e110000));
    assert!(inst.decoded().is_some());
    assert_eq!(Instruction::new(0, "junk").word(), None);
    assert_eq!(Instruction::new(0, "junk").assembly(), "Invalid (junk)");
}

#[test]
fn reads_program_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_PROGRAM.as_bytes()).unwrap();
    let text = read_program(file.path()).unwrap();
    assert_eq!(parse_instructions(&text).len(), 6);
}

#[test]
fn missing_program_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.hex");
    let err = read_program(&path).unwrap_err();
    assert!(matches!(&err, LoadError::Io { path: p, .. } if *p == path));
    assert!(err.to_string().contains("missing.hex"));
}

proptest! {
    #[test]
    fn ids_follow_surviving_lines(lines in prop::collection::vec(
        prop_oneof![any::<u32>().prop_map(hex), "[a-z ]{0,12}"],
        0..20,
    )) {
        let text = lines.join("\n");
        let instrs = parse_instructions(&text);
        let expected: Vec<&String> = lines.iter().filter(|l| is_instruction_text(l.trim())).collect();

        prop_assert_eq!(instrs.len(), expected.len());
        for (idx, (inst, line)) in instrs.iter().zip(expected).enumerate() {
            prop_assert_eq!(inst.id(), idx);
            prop_assert_eq!(inst.hex(), line.trim());
        }
    }

    #[test]
    fn assembly_is_the_disassembly_of_hex(id in 0usize..4096, word in any::<u32>()) {
        let inst = Instruction::new(id, hex(word));
        prop_assert_eq!(inst.id(), id);
        prop_assert_eq!(inst.hex(), hex(word));
        prop_assert_eq!(inst.assembly(), disassemble(word));
    }

    #[test]
    fn every_word_round_trips_through_text(word in any::<u32>()) {
        let instrs = parse_instructions(&hex(word));
        prop_assert_eq!(instrs.len(), 1);
        prop_assert_eq!(instrs[0].word(), Some(word));
    }
}
