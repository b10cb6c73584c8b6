//! Instruction formatting to assembly text
//!
//! The text reassembles to the same word for everything the assembler can
//! emit. Jumps in immediate mode print their target bare (`JMP 6`), since
//! that is how jump targets are written in source.

use accsim_spec::{AddressingMode, Instruction, Opcode, Word, NOP_WORD};

/// Mnemonic for a word's opcode, or a placeholder carrying the raw word
pub fn mnemonic_of(word: Word) -> String {
    match Instruction::decode(word).opcode() {
        Some(opcode) => opcode.mnemonic().to_string(),
        None => unknown(word),
    }
}

/// Format a word as assembly text
pub fn format(word: Word) -> String {
    if word == NOP_WORD {
        return "NOP".to_string();
    }

    let instr = Instruction::decode(word);
    let Some(opcode) = instr.opcode() else {
        return unknown(word);
    };

    if !opcode.has_operand() {
        return opcode.mnemonic().to_string();
    }

    format!("{} {}", opcode.mnemonic(), format_operand(opcode, &instr))
}

fn format_operand(opcode: Opcode, instr: &Instruction) -> String {
    match instr.mode {
        AddressingMode::Immediate if opcode.is_jump() => instr.operand.to_string(),
        AddressingMode::Immediate => format!("#{}", instr.immediate()),
        AddressingMode::Direct => instr.operand.to_string(),
        AddressingMode::Register => match instr.register() {
            Some(reg) => reg.to_string(),
            None => format!("0x{:X}", instr.operand),
        },
        AddressingMode::RegisterIndirect => match instr.register() {
            Some(reg) => format!("[{}]", reg),
            None => format!("0x{:X}", instr.operand),
        },
    }
}

fn unknown(word: Word) -> String {
    format!("UNKNOWN 0x{:04X}", word)
}
