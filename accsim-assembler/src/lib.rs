//! Accumulator ISA Assembler
//!
//! Assemble mnemonic source text into 16-bit instruction words.
//!
//! ## Example
//!
//! ```rust
//! use accsim_assembler::assemble;
//!
//! let source = r#"
//! START:
//!     LOAD #1
//!     JMP START
//!     HALT
//! "#;
//!
//! let program = assemble(source).unwrap();
//! assert_eq!(program.code.len(), 3);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod encoder;
pub mod assembler;

pub use error::{AssemblerError, Result};
pub use assembler::{assemble, assemble_with, AssemblerConfig};
pub use parser::{parse_line, parse_operand, Operand, SourceLine};
pub use encoder::{encode, encode_jump};
