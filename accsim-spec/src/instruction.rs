//! Decoded instruction view

use serde::{Deserialize, Serialize};

use crate::encoding::{self, sign_extend_operand};
use crate::{AddressingMode, Opcode, Register, Value, Word};

/// An instruction word split into its fields.
///
/// The opcode is kept raw so that words with undefined opcodes still decode;
/// use [`Instruction::opcode`] to classify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instruction {
    pub raw_opcode: u8,
    pub mode: AddressingMode,
    pub operand: u16,
}

impl Instruction {
    /// Build from a known opcode. The operand is masked to 10 bits.
    pub const fn new(opcode: Opcode, mode: AddressingMode, operand: Value) -> Self {
        Self::decode(encoding::encode(opcode, mode, operand))
    }

    pub const fn decode(word: Word) -> Self {
        let (raw_opcode, mode, operand) = encoding::decode(word);
        Self {
            raw_opcode,
            mode: AddressingMode::from_bits(mode),
            operand,
        }
    }

    pub const fn encode(&self) -> Word {
        encoding::encode_fields(self.raw_opcode, self.mode.bits(), self.operand as Value)
    }

    /// `None` for the four undefined opcode values
    #[inline]
    pub fn opcode(&self) -> Option<Opcode> {
        Opcode::from_u8(self.raw_opcode)
    }

    /// Operand field read as a signed immediate
    #[inline]
    pub const fn immediate(&self) -> Value {
        sign_extend_operand(self.operand)
    }

    /// Operand field read as a register number. `None` outside R1..R8.
    #[inline]
    pub fn register(&self) -> Option<Register> {
        Register::from_number(self.operand as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_encode() {
        let instr = Instruction::new(Opcode::Add, AddressingMode::Register, 2);
        assert_eq!(instr.opcode(), Some(Opcode::Add));
        assert_eq!(instr.register(), Some(Register::R2));
        assert_eq!(instr.encode(), 0x3802);
    }

    #[test]
    fn test_unknown_opcode_still_decodes() {
        let instr = Instruction::decode(0xC123);
        assert_eq!(instr.raw_opcode, 0xC);
        assert_eq!(instr.opcode(), None);
        assert_eq!(instr.encode(), 0xC123);
    }

    #[test]
    fn test_immediate_sign() {
        let instr = Instruction::new(Opcode::Load, AddressingMode::Immediate, -7);
        assert_eq!(instr.immediate(), -7);
    }

    #[test]
    fn test_register_out_of_range() {
        let instr = Instruction::new(Opcode::Load, AddressingMode::Register, 0);
        assert_eq!(instr.register(), None);
        let instr = Instruction::new(Opcode::Load, AddressingMode::Register, 9);
        assert_eq!(instr.register(), None);
    }
}
