//! # accsim runtime
//!
//! Execution engine for the 16-bit accumulator ISA.
//!
//! The machine has an accumulator, eight general registers R1-R8, zero and
//! negative flags, and separate code and data memories. Programs are loaded
//! from assembly source or from an assembled [`Program`], then executed one
//! step at a time or in bulk under a step ceiling.
//!
//! ## Example
//!
//! ```rust
//! use accsim_runtime::{RunOutcome, VMConfig, VM};
//!
//! let mut vm = VM::new(VMConfig::default());
//! vm.load("LOAD 0\nADD 1\nHALT", "20 22").unwrap();
//! let result = vm.run().unwrap();
//! assert_eq!(result.acc, 42);
//! assert!(matches!(result.outcome, RunOutcome::Halted(_)));
//! ```

pub mod error;
pub mod state;
pub mod memory;
pub mod operand;
pub mod execute;
pub mod io;
pub mod snapshot;
pub mod vm;

pub use error::{Result, RuntimeError};
pub use state::{HaltReason, RunState, VMState};
pub use memory::Memory;
pub use io::parse_data;
pub use snapshot::Snapshot;
pub use vm::{ExecutionResult, LoadSummary, RunOutcome, StepOutcome, VMConfig, VM};

use accsim_spec::Program;

/// Simple execution helper
///
/// Runs a program over the given data with the default configuration.
pub fn run(program: &Program, data: &[accsim_spec::Value]) -> Result<ExecutionResult> {
    let mut vm = VM::with_program(program, data, VMConfig::default())?;
    vm.run()
}
