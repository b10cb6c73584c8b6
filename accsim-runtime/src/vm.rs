//! Execution engine

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use accsim_assembler::{assemble_with, AssemblerConfig};
use accsim_disassembler::DisassemblerError;
use accsim_spec::{
    Instruction, Program, Value, Word, DEFAULT_CODE_SIZE, DEFAULT_DATA_SIZE, MAX_CODE_SIZE, NOP_WORD,
};

use crate::error::{Result, RuntimeError};
use crate::execute::execute;
use crate::io::parse_data;
use crate::memory::Memory;
use crate::snapshot::Snapshot;
use crate::state::{HaltReason, RunState, VMState};

/// VM configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VMConfig {
    /// Step ceiling for a single [`VM::run`]
    pub max_steps: u64,

    /// Code memory size in words, at most [`MAX_CODE_SIZE`]
    pub code_size: usize,

    /// Data memory size in values
    pub data_size: usize,

    /// Log every executed instruction at debug level
    pub trace: bool,

    /// Halt on undefined opcodes and bad register fields instead of skipping
    /// them, and assemble sources in strict mode
    pub strict: bool,
}

impl Default for VMConfig {
    fn default() -> Self {
        Self {
            max_steps: 1000,
            code_size: DEFAULT_CODE_SIZE,
            data_size: DEFAULT_DATA_SIZE,
            trace: false,
            strict: false,
        }
    }
}

/// Outcome of a single [`VM::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Instruction executed, engine still running
    Continue,
    /// Engine is halted, either by this step or earlier
    Halted(HaltReason),
}

/// How a bulk run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Halted(HaltReason),
    /// Ceiling hit while the program was still running; state stays inspectable
    StepLimitReached { limit: u64 },
}

/// Execution result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Steps executed by this run
    pub steps: u64,

    pub outcome: RunOutcome,

    /// Accumulator when the run stopped
    pub acc: Value,
}

impl ExecutionResult {
    pub fn halted(&self) -> bool {
        matches!(self.outcome, RunOutcome::Halted(_))
    }
}

/// What a load placed in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    /// Words stored in code memory
    pub words: usize,

    /// Non-zero words among them
    pub instructions: usize,

    /// Values stored in data memory
    pub data_values: usize,
}

/// Accumulator machine
pub struct VM {
    state: VMState,
    memory: Memory,
    config: VMConfig,
    loaded: bool,
    data_values: usize,
}

impl VM {
    /// Create an empty VM. Nothing can execute until a program is loaded.
    ///
    /// Code memory is capped at [`MAX_CODE_SIZE`] words, the range a jump
    /// operand can address.
    pub fn new(mut config: VMConfig) -> Self {
        if config.code_size > MAX_CODE_SIZE {
            warn!(
                requested = config.code_size,
                max = MAX_CODE_SIZE,
                "code size exceeds jump range, capping"
            );
            config.code_size = MAX_CODE_SIZE;
        }
        VM {
            state: VMState::new(),
            memory: Memory::new(config.code_size, config.data_size),
            config,
            loaded: false,
            data_values: 0,
        }
    }

    /// Create a VM with data and an assembled program already loaded
    pub fn with_program(program: &Program, data: &[Value], config: VMConfig) -> Result<Self> {
        let mut vm = VM::new(config);
        vm.load_data(data);
        vm.load_program(program)?;
        Ok(vm)
    }

    pub fn config(&self) -> &VMConfig {
        &self.config
    }

    pub fn state(&self) -> &VMState {
        &self.state
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Zero all processor state and both memories, and forget the program
    pub fn reset(&mut self) {
        self.state = VMState::new();
        self.memory.clear();
        self.loaded = false;
        self.data_values = 0;
        debug!("reset");
    }

    /// Replace data memory contents
    pub fn load_data(&mut self, values: &[Value]) -> usize {
        self.data_values = self.memory.load_data(values);
        self.data_values
    }

    /// Place an assembled program in code memory and reset processor state.
    /// Data memory is left as is.
    pub fn load_program(&mut self, program: &Program) -> Result<LoadSummary> {
        if !program.is_loadable() {
            return Err(RuntimeError::NothingToLoad);
        }

        self.state = VMState::new();
        let words = self.memory.load_code(&program.code);
        let instructions = self.memory.code()[..words]
            .iter()
            .filter(|&&w| w != NOP_WORD)
            .count();
        self.loaded = true;

        let summary = LoadSummary {
            words,
            instructions,
            data_values: self.data_values,
        };
        debug!(
            words = summary.words,
            instructions = summary.instructions,
            data_values = summary.data_values,
            "program loaded"
        );
        Ok(summary)
    }

    /// Reset, load data, then assemble and load the source.
    ///
    /// A malformed data string fails before anything is assembled. An
    /// assembly failure leaves the data in place and no program loaded.
    pub fn load(&mut self, source: &str, data: &str) -> Result<LoadSummary> {
        self.reset();
        let values = parse_data(data)?;
        self.load_data(&values);

        let assembler = AssemblerConfig {
            strict: self.config.strict,
        };
        let program = assemble_with(source, &assembler)?;
        self.load_program(&program)
    }

    /// Execute one instruction
    pub fn step(&mut self) -> Result<StepOutcome> {
        if !self.loaded {
            return Err(RuntimeError::NoProgramLoaded);
        }
        if let Some(reason) = self.state.halt_reason {
            return Ok(StepOutcome::Halted(reason));
        }

        let pc = self.state.pc;
        let Some(word) = self.memory.fetch(pc) else {
            let reason = HaltReason::OutOfCode { target: pc as Value };
            self.state.halt(reason);
            return Ok(StepOutcome::Halted(reason));
        };

        self.state.run_state = RunState::Running;
        self.state.ir = word;

        if self.config.trace {
            debug!(
                step = self.state.steps + 1,
                pc,
                word = format_args!("0x{:04X}", word),
                instr = %accsim_disassembler::format(word),
                acc = self.state.acc,
                "execute"
            );
        } else {
            trace!(pc, word, "execute");
        }

        if word == NOP_WORD {
            self.state.pc += 1;
        } else {
            self.dispatch(pc, word);
        }

        if !self.state.is_halted() && self.state.pc >= self.memory.code_len() {
            self.state.halt(HaltReason::OutOfCode {
                target: self.state.pc as Value,
            });
        }

        // HALT and faulting instructions are not counted
        if let None | Some(HaltReason::OutOfCode { .. }) = self.state.halt_reason {
            self.state.steps += 1;
        }

        match self.state.halt_reason {
            Some(reason) => {
                debug!(?reason, steps = self.state.steps, acc = self.state.acc, "halted");
                Ok(StepOutcome::Halted(reason))
            }
            None => Ok(StepOutcome::Continue),
        }
    }

    fn dispatch(&mut self, pc: usize, word: Word) {
        if self.config.strict {
            match accsim_disassembler::decode(word) {
                Ok((opcode, instr)) => execute(opcode, &instr, &mut self.state, &mut self.memory),
                Err(DisassemblerError::UnknownOpcode { .. }) => {
                    warn!(pc, word, "undefined opcode");
                    self.state.halt(HaltReason::InvalidInstruction { pc, word });
                }
                Err(DisassemblerError::InvalidRegister { index, .. }) => {
                    warn!(pc, index, "invalid register");
                    self.state.halt(HaltReason::InvalidRegister { pc, index });
                }
            }
            return;
        }

        let instr = Instruction::decode(word);
        match instr.opcode() {
            Some(opcode) => execute(opcode, &instr, &mut self.state, &mut self.memory),
            None => {
                trace!(pc, word, "skipping undefined opcode");
                self.state.pc += 1;
            }
        }
    }

    /// Step until the engine halts or `max_steps` steps have executed
    pub fn run(&mut self) -> Result<ExecutionResult> {
        let limit = self.config.max_steps;
        let start = self.state.steps;

        let outcome = loop {
            if self.state.steps - start >= limit {
                warn!(limit, pc = self.state.pc, "step limit reached");
                break RunOutcome::StepLimitReached { limit };
            }
            if let StepOutcome::Halted(reason) = self.step()? {
                break RunOutcome::Halted(reason);
            }
        };

        Ok(ExecutionResult {
            steps: self.state.steps - start,
            outcome,
            acc: self.state.acc,
        })
    }

    /// Read-only view of the whole machine
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.memory)
    }
}
