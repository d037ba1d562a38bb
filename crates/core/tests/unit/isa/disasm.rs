//! Instruction Disassembler Unit Tests.
//!
//! Verifies the exact assembly text for the sample program and for one
//! encoding of every operand layout, plus the fallbacks for unsupported
//! encodings and non-hex text.

use mipsvis_core::isa::disasm::{disassemble, disassemble_hex, parse_word};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
// Sample program
#[case(0x02108025, "or $s0, $s0, $s0")]
#[case(0x8e110000, "lw $s1, 0($s0)")]
#[case(0xae120004, "sw $s2, 4($s0)")]
#[case(0x00640820, "add $at, $v1, $a0")]
#[case(0x10800001, "beq $a0, $zero, 1")]
#[case(0x00000000, "nop")]
// One per layout
#[case(0x00021080, "sll $v0, $v0, 2")]
#[case(0x03e00008, "jr $ra")]
#[case(0x08000010, "j 0x10")]
#[case(0x2008ffff, "addi $t0, $zero, -1")]
#[case(0x3108ff00, "andi $t0, $t0, 0xff00")]
#[case(0x3c01abcd, "lui $at, 0xabcd")]
#[case(0x8fbffffc, "lw $ra, -4($sp)")]
// Unsupported encodings
#[case(0x0000003f, "R-type (funct: 63)")]
#[case(0xfc000000, "Unknown (op: 63)")]
fn disassembles_word(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(disassemble(word), expected);
    assert_eq!(disassemble_hex(&format!("0x{word:08x}")), expected);
}

#[rstest]
#[case("0x8e110000", Some(0x8e110000))]
#[case("0X8E110000", Some(0x8e110000))]
#[case("0x1", Some(1))]
#[case("0x", None)]
#[case("8e110000", None)]
#[case("0x8e11000g", None)]
#[case("0x+1", None)]
#[case("0x123456789", None)]
fn parses_hex_words(#[case] text: &str, #[case] expected: Option<u32>) {
    assert_eq!(parse_word(text), expected);
}

#[test]
fn non_hex_text_is_reported_invalid() {
    assert_eq!(disassemble_hex("hello"), "Invalid (hello)");
    assert_eq!(disassemble_hex(""), "Invalid ()");
}
