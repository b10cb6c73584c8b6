//! # Accumulator ISA Disassembler
//!
//! Turn instruction words back into assembly text, and render code and data
//! memory the way a front panel would show them.
//!
//! ## Example
//!
//! ```rust
//! use accsim_disassembler::format;
//!
//! assert_eq!(format(0x1C03), "LOAD [R3]");
//! assert_eq!(format(0x7006), "JMP 6");
//! ```

pub mod error;
pub mod decoder;
pub mod formatter;
pub mod disassembler;

pub use error::{DisassemblerError, Result};
pub use disassembler::{code_listing, data_listing, disassemble, format_line};
pub use decoder::decode;
pub use formatter::{format, mnemonic_of};
