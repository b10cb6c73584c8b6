//! # Accumulator ISA Specification
//!
//! Single-accumulator instruction set with a Harvard split between code
//! memory (16-bit instruction words) and data memory (signed integers).
//!
//! ## Key Features
//! - 16-bit fixed-width instruction words
//! - 12 instructions, one operand each (HALT takes none)
//! - 4 addressing modes: immediate, direct, register, register-indirect
//! - 8 general registers R1-R8 plus the accumulator
//! - Zero and negative flags
//!
//! ## Instruction Format
//!
//! ```text
//! | opcode(4) | mode(2) | operand(10) |
//!  15      12  11    10  9           0
//! ```

pub mod opcode;
pub mod mode;
pub mod register;
pub mod encoding;
pub mod instruction;
pub mod program;

pub use opcode::Opcode;
pub use mode::AddressingMode;
pub use register::{Register, NUM_REGISTERS};
pub use instruction::Instruction;
pub use program::Program;
pub use encoding::{decode, encode, MAX_CODE_SIZE};

/// Instruction word (16 bits)
pub type Word = u16;

/// Accumulator, register, and data memory cell value.
///
/// Arithmetic on it is checked; the engine halts instead of wrapping.
pub type Value = i128;

/// Default code memory size in words
pub const DEFAULT_CODE_SIZE: usize = 256;

/// Default data memory size in cells
pub const DEFAULT_DATA_SIZE: usize = 256;

/// Reserved all-zero word: uninitialized cell / no-op
pub const NOP_WORD: Word = 0;
