//! # Opcode Definitions
//!
//! Opcodes occupy bits 15:12 of the instruction word. Twelve of the sixteen
//! possible values are defined; opcode 0 is left unused so that the all-zero
//! word can mark an empty cell.

use serde::{Deserialize, Serialize};

/// Instruction opcode (4 bits)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// LOAD: ACC = operand
    Load = 0x1,
    /// STORE: operand location = ACC
    Store = 0x2,
    /// ADD: ACC = ACC + operand
    Add = 0x3,
    /// SUB: ACC = ACC - operand
    Sub = 0x4,
    /// MUL: ACC = ACC * operand
    Mul = 0x5,
    /// CMP: set flags from ACC - operand, ACC unchanged
    Cmp = 0x6,
    /// JMP: PC = operand
    Jmp = 0x7,
    /// JZ: if Z then PC = operand
    Jz = 0x8,
    /// JN: if N then PC = operand
    Jn = 0x9,
    /// INC: operand location = operand + 1
    Inc = 0xA,
    /// DEC: operand location = operand - 1
    Dec = 0xB,
    /// HALT: stop execution
    Halt = 0xF,
}

impl Opcode {
    /// Opcode width in bits
    pub const BITS: u32 = 4;

    /// All defined opcodes, in encoding order
    pub const ALL: [Opcode; 12] = [
        Opcode::Load,
        Opcode::Store,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Cmp,
        Opcode::Jmp,
        Opcode::Jz,
        Opcode::Jn,
        Opcode::Inc,
        Opcode::Dec,
        Opcode::Halt,
    ];

    /// Try to convert from the raw 4-bit field
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x1 => Some(Opcode::Load),
            0x2 => Some(Opcode::Store),
            0x3 => Some(Opcode::Add),
            0x4 => Some(Opcode::Sub),
            0x5 => Some(Opcode::Mul),
            0x6 => Some(Opcode::Cmp),
            0x7 => Some(Opcode::Jmp),
            0x8 => Some(Opcode::Jz),
            0x9 => Some(Opcode::Jn),
            0xA => Some(Opcode::Inc),
            0xB => Some(Opcode::Dec),
            0xF => Some(Opcode::Halt),
            _ => None,
        }
    }

    /// Convert to u8
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Look up an opcode by mnemonic, ignoring case
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(mnemonic))
    }

    /// Upper-case mnemonic text
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Load => "LOAD",
            Opcode::Store => "STORE",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Cmp => "CMP",
            Opcode::Jmp => "JMP",
            Opcode::Jz => "JZ",
            Opcode::Jn => "JN",
            Opcode::Inc => "INC",
            Opcode::Dec => "DEC",
            Opcode::Halt => "HALT",
        }
    }

    /// Control transfer (JMP, JZ, JN). The operand is a code address.
    #[inline]
    pub const fn is_jump(self) -> bool {
        matches!(self, Opcode::Jmp | Opcode::Jz | Opcode::Jn)
    }

    /// Recomputes Z/N from the new accumulator value.
    ///
    /// CMP also sets flags, but from the discarded difference, so it is not
    /// included here.
    #[inline]
    pub const fn updates_flags_from_acc(self) -> bool {
        matches!(self, Opcode::Load | Opcode::Add | Opcode::Sub | Opcode::Mul)
    }

    /// Whether the instruction takes an operand at all
    #[inline]
    pub const fn has_operand(self) -> bool {
        !matches!(self, Opcode::Halt)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}
