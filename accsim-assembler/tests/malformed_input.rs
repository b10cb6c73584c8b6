//! Tests for malformed input handling in the assembler
//!
//! Default mode degrades quietly; strict mode turns the same inputs into errors.

use accsim_assembler::{assemble, assemble_with, AssemblerConfig, AssemblerError};
use accsim_spec::NOP_WORD;

const STRICT: AssemblerConfig = AssemblerConfig { strict: true };

// ============================================================================
// Unknown Instruction Tests
// ============================================================================

#[test]
fn test_unknown_instruction() {
    let program = assemble("FOOBAR R1").unwrap();
    assert_eq!(program.code, vec![NOP_WORD]);

    match assemble_with("FOOBAR R1", &STRICT) {
        Err(AssemblerError::UnknownInstruction { line, mnemonic }) => {
            assert_eq!(line, 1);
            assert_eq!(mnemonic, "FOOBAR");
        }
        other => panic!("Expected UnknownInstruction, got {:?}", other),
    }
}

#[test]
fn test_instruction_typo() {
    let source = "LOAD #1\nADDD #2\nHALT";
    assert_eq!(assemble(source).unwrap().code, vec![0x1001, NOP_WORD, 0xF000]);
    assert!(assemble_with(source, &STRICT).is_err());
}

#[test]
fn test_lowercase_mnemonic_accepted() {
    assert_eq!(assemble("load #1\nhalt").unwrap().code, vec![0x1001, 0xF000]);
}

#[test]
fn test_blank_and_comment_lines() {
    let source = r#"

        ; header comment
           ;indented comment
        HALT ; trailing

    "#;
    assert_eq!(assemble(source).unwrap().code, vec![0xF000]);
}

// ============================================================================
// Operand Tests
// ============================================================================

#[test]
fn test_missing_operand_is_immediate_zero() {
    assert_eq!(assemble("LOAD").unwrap().code, vec![0x1000]);
    assert_eq!(assemble_with("LOAD", &STRICT).unwrap().code, vec![0x1000]);
}

#[test]
fn test_bad_immediate() {
    for text in ["#", "#x", "#1.5", "#2e3"] {
        let source = format!("ADD {}", text);
        assert_eq!(assemble(&source).unwrap().code, vec![0x3000], "{}", text);

        match assemble_with(&source, &STRICT) {
            Err(AssemblerError::InvalidNumber { text: bad, .. }) => assert_eq!(bad, text),
            other => panic!("Expected InvalidNumber for {}, got {:?}", text, other),
        }
    }
}

#[test]
fn test_oversized_numbers_are_masked() {
    // 99999999999999999999 has 0x3FF in its low ten bits
    let program = assemble("LOAD 99999999999999999999\nADD #99999999999999999999").unwrap();
    assert_eq!(program.code, vec![0x17FF, 0x33FF]);

    // 2^64 + 5 keeps only the 5
    let program = assemble_with("SUB #18446744073709551621", &STRICT).unwrap();
    assert_eq!(program.code, vec![0x4005]);
}

#[test]
fn test_extra_operand_tokens_rejected() {
    let err = assemble("LOAD R1 R2").unwrap_err();
    assert!(matches!(err, AssemblerError::InvalidOperand { .. }));
}

#[test]
fn test_unclosed_bracket_rejected() {
    let err = assemble("LOAD [R1").unwrap_err();
    assert_eq!(
        err,
        AssemblerError::InvalidOperand {
            line: 1,
            mnemonic: "LOAD".to_string(),
            operand: "[R1".to_string(),
        }
    );
}

#[test]
fn test_lowercase_register_is_label() {
    assert!(assemble("STORE r1").is_err());
}

#[test]
fn test_error_reports_first_bad_line() {
    let err = assemble("LOAD #1\n\nSTORE X\nADD Y").unwrap_err();
    assert_eq!(err.line(), 3);
}

// ============================================================================
// Jump Target Tests
// ============================================================================

#[test]
fn test_undefined_jump_target() {
    assert_eq!(assemble("JN MISSING").unwrap().code, vec![0x9000]);
    assert!(matches!(
        assemble_with("JN MISSING", &STRICT),
        Err(AssemblerError::UndefinedLabel { line: 1, .. })
    ));
}

#[test]
fn test_negative_jump_target_not_an_address() {
    assert_eq!(assemble("JMP -4").unwrap().code, vec![0x7000]);
}

#[test]
fn test_jump_to_bare_address() {
    assert_eq!(assemble("JZ 12").unwrap().code, vec![0x800C]);
}

// ============================================================================
// Label Tests
// ============================================================================

#[test]
fn test_duplicate_label_last_wins() {
    let program = assemble("A:\nINC R1\nA:\nJMP A").unwrap();
    assert_eq!(program.label("A"), Some(1));
    assert_eq!(program.code[1], 0x7001);

    assert!(matches!(
        assemble_with("A:\nINC R1\nA:\nJMP A", &STRICT),
        Err(AssemblerError::DuplicateLabel { line: 3, .. })
    ));
}

#[test]
fn test_label_with_trailing_comment() {
    let program = assemble("INC R1\nLOOP: ; loop head\nJMP LOOP").unwrap();
    assert_eq!(program.label("LOOP"), Some(1));
    assert_eq!(program.code, vec![0xA801, 0x7001]);
}

#[test]
fn test_label_only_source() {
    let program = assemble("END:").unwrap();
    assert!(program.is_empty());
    assert_eq!(program.label("END"), Some(0));
}
