//! Addressing modes (bits 11:10 of the instruction word)

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the 10-bit operand field is turned into an effective value
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressingMode {
    /// `#v`: the operand field itself, as a signed 10-bit value
    Immediate = 0b00,
    /// `a`: `data[a]`
    Direct = 0b01,
    /// `Rn`: `R[n]`
    Register = 0b10,
    /// `[Rn]`: `data[R[n]]`
    RegisterIndirect = 0b11,
}

impl AddressingMode {
    /// Mode width in bits
    pub const BITS: u32 = 2;

    /// Convert from the 2-bit field. Total: higher bits are ignored.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => AddressingMode::Immediate,
            0b01 => AddressingMode::Direct,
            0b10 => AddressingMode::Register,
            _ => AddressingMode::RegisterIndirect,
        }
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Immediate operands are never write targets
    #[inline]
    pub const fn is_writable(self) -> bool {
        !matches!(self, AddressingMode::Immediate)
    }

    /// Operand field names a register (R1..R8)
    #[inline]
    pub const fn uses_register(self) -> bool {
        matches!(self, AddressingMode::Register | AddressingMode::RegisterIndirect)
    }

    pub const fn name(self) -> &'static str {
        match self {
            AddressingMode::Immediate => "immediate",
            AddressingMode::Direct => "direct",
            AddressingMode::Register => "register",
            AddressingMode::RegisterIndirect => "register-indirect",
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
