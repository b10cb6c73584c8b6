//! Checked instruction decoding
//!
//! [`accsim_spec::Instruction::decode`] is total. This decoder additionally
//! rejects words the assembler can never produce: undefined opcodes and
//! register operands outside R1..R8.

use accsim_spec::{Instruction, Opcode, Word};
use crate::error::{DisassemblerError, Result};

/// Decode a word, rejecting undefined opcodes and bad register fields
pub fn decode(word: Word) -> Result<(Opcode, Instruction)> {
    let instr = Instruction::decode(word);

    let opcode = instr.opcode().ok_or(DisassemblerError::UnknownOpcode {
        word,
        opcode: instr.raw_opcode,
    })?;

    if opcode.has_operand() && instr.mode.uses_register() && instr.register().is_none() {
        return Err(DisassemblerError::InvalidRegister {
            word,
            index: instr.operand,
        });
    }

    Ok((opcode, instr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use accsim_spec::AddressingMode;

    #[test]
    fn test_decode_load_immediate() {
        let (opcode, instr) = decode(0x1005).unwrap();
        assert_eq!(opcode, Opcode::Load);
        assert_eq!(instr.mode, AddressingMode::Immediate);
        assert_eq!(instr.immediate(), 5);
    }

    #[test]
    fn test_decode_unknown_opcode() {
        assert_eq!(
            decode(0xC001),
            Err(DisassemblerError::UnknownOpcode { word: 0xC001, opcode: 0xC })
        );
        assert!(decode(0x0000).is_err());
    }

    #[test]
    fn test_decode_bad_register() {
        assert_eq!(
            decode(0x1809),
            Err(DisassemblerError::InvalidRegister { word: 0x1809, index: 9 })
        );
        assert!(decode(0x1C00).is_err());
    }

    #[test]
    fn test_decode_halt_ignores_operand() {
        // HALT never reads its operand, so the register field is irrelevant
        assert!(decode(0xF800).is_ok());
    }
}
