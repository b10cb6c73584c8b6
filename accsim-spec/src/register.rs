//! General register names (R1-R8)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of general registers
pub const NUM_REGISTERS: usize = 8;

/// General register. The operand field stores the register number (1-8).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Register {
    R1 = 1,
    R2 = 2,
    R3 = 3,
    R4 = 4,
    R5 = 5,
    R6 = 6,
    R7 = 7,
    R8 = 8,
}

impl Register {
    pub const ALL: [Register; NUM_REGISTERS] = [
        Register::R1,
        Register::R2,
        Register::R3,
        Register::R4,
        Register::R5,
        Register::R6,
        Register::R7,
        Register::R8,
    ];

    /// Register from its number as written in the operand field.
    /// Returns `None` outside 1..=8.
    #[inline]
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1..=8 => Some(Self::ALL[(number - 1) as usize]),
            _ => None,
        }
    }

    /// Register number (1-8)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based slot in a register file
    #[inline]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    pub const fn name(self) -> &'static str {
        match self {
            Register::R1 => "R1",
            Register::R2 => "R2",
            Register::R3 => "R3",
            Register::R4 => "R4",
            Register::R5 => "R5",
            Register::R6 => "R6",
            Register::R7 => "R7",
            Register::R8 => "R8",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_number() {
        assert_eq!(Register::from_number(1), Some(Register::R1));
        assert_eq!(Register::from_number(8), Some(Register::R8));
        assert_eq!(Register::from_number(0), None);
        assert_eq!(Register::from_number(9), None);
        assert_eq!(Register::from_number(-1), None);
    }

    #[test]
    fn test_index_and_number() {
        for (i, reg) in Register::ALL.iter().enumerate() {
            assert_eq!(reg.index(), i);
            assert_eq!(reg.number() as usize, i + 1);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Register::R7.to_string(), "R7");
    }
}
