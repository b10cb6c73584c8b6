//! Runtime error types

use accsim_assembler::AssemblerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Assembly failed: {0}")]
    Assembler(#[from] AssemblerError),

    #[error("Invalid data value '{token}'")]
    InvalidData { token: String },

    #[error("Nothing to load: program has no instructions")]
    NothingToLoad,

    #[error("No program loaded")]
    NoProgramLoaded,
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
