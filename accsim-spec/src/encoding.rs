//! # Instruction Encoding Constants and Helpers
//!
//! ## Instruction Format (16-bit)
//!
//! ```text
//! [opcode:4][mode:2][operand:10]
//! ```
//!
//! Encoding never fails: each field is masked to its width, so an operand
//! outside 0..=1023 silently loses its high bits. Negative immediates land
//! in the field as 10-bit two's complement.

use crate::{AddressingMode, Opcode, Value, Word};

// ============================================================================
// Bit Position Constants
// ============================================================================

/// Opcode field: bits 12-15 (4 bits)
pub const OPCODE_SHIFT: u32 = 12;

/// Addressing mode field: bits 10-11 (2 bits)
pub const MODE_SHIFT: u32 = 10;

/// Operand field: bits 0-9 (10 bits)
pub const OPERAND_SHIFT: u32 = 0;

// ============================================================================
// Field Masks
// ============================================================================

/// Opcode mask (4 bits)
pub const OPCODE_MASK: Word = 0xF;

/// Addressing mode mask (2 bits)
pub const MODE_MASK: Word = 0x3;

/// Operand mask (10 bits)
pub const OPERAND_MASK: Word = 0x3FF;

/// Sign bit of an immediate operand
pub const IMM_SIGN_BIT: Word = 0x200;

/// Subtracted from a negative immediate field (2^10)
pub const IMM_SIGN_EXTEND: Value = 0x400;

/// Smallest immediate that survives a round trip
pub const IMM_MIN: Value = -512;

/// Largest immediate that survives a round trip
pub const IMM_MAX: Value = 511;

/// Code memory cells a jump can reach: jump targets are immediates, so
/// anything above [`IMM_MAX`] sign-extends to a negative address
pub const MAX_CODE_SIZE: usize = IMM_MAX as usize + 1;

// ============================================================================
// Encoding
// ============================================================================

/// Pack raw fields into a word
#[inline]
pub const fn encode_fields(opcode: u8, mode: u8, operand: Value) -> Word {
    let opcode = (opcode as Word) & OPCODE_MASK;
    let mode = (mode as Word) & MODE_MASK;
    let operand = (operand as Word) & OPERAND_MASK;
    (opcode << OPCODE_SHIFT) | (mode << MODE_SHIFT) | (operand << OPERAND_SHIFT)
}

/// Encode an instruction word
#[inline]
pub const fn encode(opcode: Opcode, mode: AddressingMode, operand: Value) -> Word {
    encode_fields(opcode.to_u8(), mode.bits(), operand)
}

// ============================================================================
// Field Extraction Functions
// ============================================================================

/// Extract opcode (bits 12-15)
#[inline]
pub const fn extract_opcode(word: Word) -> u8 {
    ((word >> OPCODE_SHIFT) & OPCODE_MASK) as u8
}

/// Extract addressing mode tag (bits 10-11)
#[inline]
pub const fn extract_mode(word: Word) -> u8 {
    ((word >> MODE_SHIFT) & MODE_MASK) as u8
}

/// Extract operand field (bits 0-9)
#[inline]
pub const fn extract_operand(word: Word) -> u16 {
    (word >> OPERAND_SHIFT) & OPERAND_MASK
}

/// Split a word into `(opcode, mode, operand)` raw fields
#[inline]
pub const fn decode(word: Word) -> (u8, u8, u16) {
    (extract_opcode(word), extract_mode(word), extract_operand(word))
}

/// Reinterpret a 10-bit operand field as a signed immediate
#[inline]
pub const fn sign_extend_operand(operand: u16) -> Value {
    let operand = operand & OPERAND_MASK;
    if operand & IMM_SIGN_BIT != 0 {
        operand as Value - IMM_SIGN_EXTEND
    } else {
        operand as Value
    }
}

/// Extract the operand field of a word as a signed immediate
#[inline]
pub const fn extract_immediate(word: Word) -> Value {
    sign_extend_operand(extract_operand(word))
}
