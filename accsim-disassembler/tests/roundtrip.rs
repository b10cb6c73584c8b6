//! Disassembly must reassemble to the same words

use accsim_assembler::assemble;
use accsim_disassembler::{decode, disassemble, format};
use accsim_spec::{encode, AddressingMode, Opcode, Program};

#[test]
fn test_every_assembler_form_roundtrips() {
    let source = r#"
        LOAD #0
        LOAD #-512
        LOAD #511
        STORE R1
        ADD 17
        SUB [R8]
        MUL R2
        CMP #5
        INC [R3]
        DEC R2
        JMP 0
        JZ 11
        JN 3
        HALT
    "#;

    let program = assemble(source).unwrap();
    let text: String = program
        .code
        .iter()
        .map(|&w| format(w))
        .collect::<Vec<_>>()
        .join("\n");
    let reassembled = assemble(&text).unwrap();

    assert_eq!(reassembled.code, program.code);
}

#[test]
fn test_labelled_jumps_roundtrip_as_addresses() {
    let program = assemble("TOP:\nDEC R1\nJN DONE\nJMP TOP\nDONE:\nHALT").unwrap();
    let text: Vec<String> = program.code.iter().map(|&w| format(w)).collect();
    assert_eq!(text, vec!["DEC R1", "JN 3", "JMP 0", "HALT"]);
}

#[test]
fn test_disassemble_listing_includes_labels() {
    let program = assemble("START:\nLOAD #1\nLOOP:\nJMP LOOP").unwrap();
    let asm = disassemble(&program);

    assert!(asm.contains("START:\n000: 0x1001  LOAD #1"));
    assert!(asm.contains("LOOP:\n001: 0x7001  JMP 1"));
}

#[test]
fn test_checked_decode_accepts_assembler_output() {
    let program = assemble("LOAD [R1]\nSTORE R8\nJMP 0\nHALT").unwrap();
    for &word in &program.code {
        assert!(decode(word).is_ok(), "word 0x{:04X} rejected", word);
    }
}

#[test]
fn test_unknown_word_in_program() {
    let program = Program::new(vec![encode(Opcode::Load, AddressingMode::Immediate, 1), 0xE000]);
    let asm = disassemble(&program);
    assert!(asm.contains("001: 0xE000  UNKNOWN 0xE000"));
}
