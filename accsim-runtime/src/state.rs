//! Processor state

use serde::{Deserialize, Serialize};

use accsim_spec::{Value, Word, NUM_REGISTERS};

/// Engine lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Reset or freshly loaded, nothing executed yet
    Idle,
    /// At least one step executed, not halted
    Running,
    /// Terminal until the next reset or load
    Halted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HaltReason {
    /// HALT instruction
    Halt,
    /// PC left code memory, by falling off the end or by a jump
    OutOfCode { target: Value },
    /// Arithmetic result outside the accumulator range
    Overflow { pc: usize },
    /// Undefined opcode (strict mode only)
    InvalidInstruction { pc: usize, word: Word },
    /// Register operand outside R1..R8 (strict mode only)
    InvalidRegister { pc: usize, index: u16 },
}

/// VM state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VMState {
    /// Accumulator
    pub acc: Value,

    /// Program counter
    pub pc: usize,

    /// Instruction register: last fetched word
    pub ir: Word,

    /// General registers R1-R8
    pub registers: [Value; NUM_REGISTERS],

    /// Zero flag
    pub zero: bool,

    /// Negative flag
    pub negative: bool,

    /// Instructions executed since reset
    pub steps: u64,

    pub run_state: RunState,

    pub halt_reason: Option<HaltReason>,
}

impl Default for VMState {
    fn default() -> Self {
        Self::new()
    }
}

impl VMState {
    pub fn new() -> Self {
        VMState {
            acc: 0,
            pc: 0,
            ir: 0,
            registers: [0; NUM_REGISTERS],
            zero: false,
            negative: false,
            steps: 0,
            run_state: RunState::Idle,
            halt_reason: None,
        }
    }

    /// Set Z and N from a value
    #[inline]
    pub fn set_flags(&mut self, value: Value) {
        self.zero = value == 0;
        self.negative = value < 0;
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.run_state == RunState::Halted
    }

    /// Halt execution
    pub fn halt(&mut self, reason: HaltReason) {
        self.run_state = RunState::Halted;
        self.halt_reason = Some(reason);
    }
}
