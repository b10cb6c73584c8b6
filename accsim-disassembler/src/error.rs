//! Disassembler errors

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisassemblerError {
    #[error("Unknown opcode 0x{opcode:X} in word 0x{word:04X}")]
    UnknownOpcode { word: u16, opcode: u8 },

    #[error("Invalid register R{index} in word 0x{word:04X}")]
    InvalidRegister { word: u16, index: u16 },
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
