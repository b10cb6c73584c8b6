//! Assembler errors

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssemblerError {
    #[error("Invalid operand '{operand}' for instruction {mnemonic} at line {line}")]
    InvalidOperand {
        line: usize,
        mnemonic: String,
        operand: String,
    },

    #[error("Unknown instruction at line {line}: {mnemonic}")]
    UnknownInstruction { line: usize, mnemonic: String },

    #[error("Invalid number at line {line}: {text}")]
    InvalidNumber { line: usize, text: String },

    #[error("Undefined label at line {line}: {label}")]
    UndefinedLabel { line: usize, label: String },

    #[error("Duplicate label at line {line}: {label}")]
    DuplicateLabel { line: usize, label: String },
}

impl AssemblerError {
    /// Source line (1-based) the error refers to
    pub fn line(&self) -> usize {
        match self {
            AssemblerError::InvalidOperand { line, .. }
            | AssemblerError::UnknownInstruction { line, .. }
            | AssemblerError::InvalidNumber { line, .. }
            | AssemblerError::UndefinedLabel { line, .. }
            | AssemblerError::DuplicateLabel { line, .. } => *line,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
