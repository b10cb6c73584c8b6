//! Instruction encoding to 16-bit words
//!
//! Jumps encode their target address in immediate mode: the engine sets the
//! PC to the resolved immediate value, so the target itself is the operand.

use accsim_spec::{encoding, AddressingMode, Opcode, Value, Word};
use crate::parser::Operand;

/// Encode a non-jump instruction. Returns `None` for label operands, which
/// only jumps may take.
pub fn encode(opcode: Opcode, operand: &Operand) -> Option<Word> {
    let (mode, value) = operand.encoding()?;
    Some(encoding::encode(opcode, mode, value))
}

/// Encode a jump to an absolute code address
pub fn encode_jump(opcode: Opcode, target: usize) -> Word {
    encoding::encode(opcode, AddressingMode::Immediate, target as Value)
}
