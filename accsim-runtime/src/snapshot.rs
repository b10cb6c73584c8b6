//! Read-only machine views

use serde::{Deserialize, Serialize};

use accsim_disassembler::{code_listing, data_listing, format};
use accsim_spec::{Value, Word, NUM_REGISTERS};

use crate::memory::Memory;
use crate::state::{HaltReason, RunState, VMState};

/// Everything a front end needs to draw the machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub acc: Value,
    pub pc: usize,
    pub ir: Word,
    /// IR as `0xWWWW`
    pub ir_hex: String,
    /// IR in assembly syntax
    pub ir_text: String,
    pub registers: [Value; NUM_REGISTERS],
    pub zero: bool,
    pub negative: bool,
    pub steps: u64,
    pub run_state: RunState,
    pub halt_reason: Option<HaltReason>,
    pub code: Vec<Word>,
    pub data: Vec<Value>,
}

impl Snapshot {
    pub fn capture(state: &VMState, memory: &Memory) -> Self {
        Snapshot {
            acc: state.acc,
            pc: state.pc,
            ir: state.ir,
            ir_hex: format!("0x{:04X}", state.ir),
            ir_text: format(state.ir),
            registers: state.registers,
            zero: state.zero,
            negative: state.negative,
            steps: state.steps,
            run_state: state.run_state,
            halt_reason: state.halt_reason,
            code: memory.code().to_vec(),
            data: memory.data().to_vec(),
        }
    }

    /// Plain-text panel view: registers, flags, code around the PC and the
    /// first `data_rows` data cells
    pub fn render(&self, data_rows: usize) -> String {
        let mut lines = vec![
            format!("ACC: {}", self.acc),
            format!("PC:  {}", self.pc),
            format!("IR:  {} ({})", self.ir_hex, self.ir_text),
            format!("Z: {}  N: {}", u8::from(self.zero), u8::from(self.negative)),
            format!("State: {:?}", self.run_state),
        ];
        if let Some(reason) = self.halt_reason {
            lines.push(format!("Halt: {:?}", reason));
        }
        lines.push(String::new());

        for (i, value) in self.registers.iter().enumerate() {
            lines.push(format!("R{}: {}", i + 1, value));
        }

        lines.push(String::new());
        lines.push("Code:".to_string());
        lines.extend(code_listing(&self.code, Some(self.pc)));

        lines.push(String::new());
        lines.push("Data:".to_string());
        lines.extend(data_listing(&self.data, data_rows));

        lines.join("\n")
    }
}
