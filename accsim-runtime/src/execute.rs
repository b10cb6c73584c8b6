//! Instruction execution

use accsim_spec::{Instruction, Opcode, Value};

use crate::memory::Memory;
use crate::operand::{read_operand, write_operand};
use crate::state::{HaltReason, VMState};

/// Transfer control to `target`. Targets outside code memory halt the
/// engine with the PC parked one past the last cell.
fn jump(state: &mut VMState, target: Value, code_len: usize) {
    match usize::try_from(target).ok().filter(|&t| t < code_len) {
        Some(t) => state.pc = t,
        None => {
            state.pc = code_len;
            state.halt(HaltReason::OutOfCode { target });
        }
    }
}

/// Halt on an arithmetic result that does not fit the accumulator. The PC
/// stays on the faulting instruction.
fn overflow(state: &mut VMState) {
    state.halt(HaltReason::Overflow { pc: state.pc });
}

/// New accumulator for LOAD/ADD/SUB/MUL, `None` on overflow
fn accumulate(opcode: Opcode, acc: Value, value: Value) -> Option<Value> {
    match opcode {
        Opcode::Add => acc.checked_add(value),
        Opcode::Sub => acc.checked_sub(value),
        Opcode::Mul => acc.checked_mul(value),
        _ => Some(value),
    }
}

/// Execute a single decoded instruction
pub fn execute(opcode: Opcode, instr: &Instruction, state: &mut VMState, memory: &mut Memory) {
    let code_len = memory.code_len();
    let value = read_operand(instr, &state.registers, memory.data());

    if opcode.updates_flags_from_acc() {
        match accumulate(opcode, state.acc, value) {
            Some(acc) => {
                state.acc = acc;
                state.set_flags(acc);
                state.pc += 1;
            }
            None => overflow(state),
        }
        return;
    }

    match opcode {
        Opcode::Store => {
            write_operand(instr, state.acc, &mut state.registers, memory.data_mut());
            state.pc += 1;
        }

        Opcode::Cmp => match state.acc.checked_sub(value) {
            Some(diff) => {
                state.set_flags(diff);
                state.pc += 1;
            }
            None => overflow(state),
        },

        Opcode::Jmp => jump(state, value, code_len),

        Opcode::Jz => {
            if state.zero {
                jump(state, value, code_len);
            } else {
                state.pc += 1;
            }
        }

        Opcode::Jn => {
            if state.negative {
                jump(state, value, code_len);
            } else {
                state.pc += 1;
            }
        }

        Opcode::Inc | Opcode::Dec => {
            let delta = if opcode == Opcode::Inc { 1 } else { -1 };
            match value.checked_add(delta) {
                Some(updated) => {
                    write_operand(instr, updated, &mut state.registers, memory.data_mut());
                    state.pc += 1;
                }
                None => overflow(state),
            }
        }

        Opcode::Halt => {
            state.halt(HaltReason::Halt);
            state.pc += 1;
        }

        Opcode::Load | Opcode::Add | Opcode::Sub | Opcode::Mul => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accsim_spec::AddressingMode;

    fn setup() -> (VMState, Memory) {
        (VMState::new(), Memory::new(16, 8))
    }

    fn imm(opcode: Opcode, value: Value) -> Instruction {
        Instruction::new(opcode, AddressingMode::Immediate, value)
    }

    #[test]
    fn test_load_sets_flags() {
        let (mut state, mut mem) = setup();
        execute(Opcode::Load, &imm(Opcode::Load, -5), &mut state, &mut mem);
        assert_eq!(state.acc, -5);
        assert!(state.negative && !state.zero);
        assert_eq!(state.pc, 1);

        execute(Opcode::Load, &imm(Opcode::Load, 0), &mut state, &mut mem);
        assert!(state.zero && !state.negative);
    }

    #[test]
    fn test_arithmetic() {
        let (mut state, mut mem) = setup();
        execute(Opcode::Load, &imm(Opcode::Load, 6), &mut state, &mut mem);
        execute(Opcode::Add, &imm(Opcode::Add, 4), &mut state, &mut mem);
        assert_eq!(state.acc, 10);
        execute(Opcode::Mul, &imm(Opcode::Mul, -3), &mut state, &mut mem);
        assert_eq!(state.acc, -30);
        assert!(state.negative);
        execute(Opcode::Sub, &imm(Opcode::Sub, -30), &mut state, &mut mem);
        assert_eq!(state.acc, 0);
        assert!(state.zero);
        assert_eq!(state.pc, 4);
    }

    #[test]
    fn test_cmp_keeps_accumulator() {
        let (mut state, mut mem) = setup();
        state.acc = 5;
        execute(Opcode::Cmp, &imm(Opcode::Cmp, 5), &mut state, &mut mem);
        assert_eq!(state.acc, 5);
        assert!(state.zero);
        execute(Opcode::Cmp, &imm(Opcode::Cmp, 7), &mut state, &mut mem);
        assert_eq!(state.acc, 5);
        assert!(state.negative && !state.zero);
    }

    #[test]
    fn test_store_and_flags_untouched() {
        let (mut state, mut mem) = setup();
        state.negative = true;
        state.acc = 12;
        let store = Instruction::new(Opcode::Store, AddressingMode::Direct, 3);
        execute(Opcode::Store, &store, &mut state, &mut mem);
        assert_eq!(mem.data()[3], 12);
        assert!(state.negative);
    }

    #[test]
    fn test_inc_dec_leave_flags() {
        let (mut state, mut mem) = setup();
        state.zero = true;
        let inc = Instruction::new(Opcode::Inc, AddressingMode::Register, 2);
        execute(Opcode::Inc, &inc, &mut state, &mut mem);
        execute(Opcode::Inc, &inc, &mut state, &mut mem);
        assert_eq!(state.registers[1], 2);
        let dec = Instruction::new(Opcode::Dec, AddressingMode::Direct, 0);
        execute(Opcode::Dec, &dec, &mut state, &mut mem);
        assert_eq!(mem.data()[0], -1);
        assert!(state.zero);
        assert_eq!(state.acc, 0);
    }

    #[test]
    fn test_conditional_jumps() {
        let (mut state, mut mem) = setup();
        state.pc = 3;
        execute(Opcode::Jz, &imm(Opcode::Jz, 9), &mut state, &mut mem);
        assert_eq!(state.pc, 4);

        state.zero = true;
        execute(Opcode::Jz, &imm(Opcode::Jz, 9), &mut state, &mut mem);
        assert_eq!(state.pc, 9);

        execute(Opcode::Jn, &imm(Opcode::Jn, 2), &mut state, &mut mem);
        assert_eq!(state.pc, 10);

        state.negative = true;
        execute(Opcode::Jn, &imm(Opcode::Jn, 2), &mut state, &mut mem);
        assert_eq!(state.pc, 2);
    }

    #[test]
    fn test_jump_through_register() {
        let (mut state, mut mem) = setup();
        state.registers[4] = 11;
        let jmp = Instruction::new(Opcode::Jmp, AddressingMode::Register, 5);
        execute(Opcode::Jmp, &jmp, &mut state, &mut mem);
        assert_eq!(state.pc, 11);
    }

    #[test]
    fn test_jump_out_of_code_halts() {
        let (mut state, mut mem) = setup();
        execute(Opcode::Jmp, &imm(Opcode::Jmp, -1), &mut state, &mut mem);
        assert!(state.is_halted());
        assert_eq!(state.pc, 16);
        assert_eq!(state.halt_reason, Some(HaltReason::OutOfCode { target: -1 }));
    }

    #[test]
    fn test_halt_advances_pc() {
        let (mut state, mut mem) = setup();
        state.pc = 5;
        execute(Opcode::Halt, &imm(Opcode::Halt, 0), &mut state, &mut mem);
        assert!(state.is_halted());
        assert_eq!(state.pc, 6);
    }

    #[test]
    fn test_mul_past_64_bits() {
        let (mut state, mut mem) = setup();
        state.acc = 511;
        for _ in 0..7 {
            execute(Opcode::Mul, &imm(Opcode::Mul, 511), &mut state, &mut mem);
        }
        assert_eq!(state.acc, 4_649_081_944_211_090_042_881);
        assert!(!state.negative && !state.zero);
        assert_eq!(state.pc, 7);
    }

    #[test]
    fn test_overflow_halts_in_place() {
        let (mut state, mut mem) = setup();
        state.acc = Value::MAX;
        state.pc = 2;
        execute(Opcode::Add, &imm(Opcode::Add, 1), &mut state, &mut mem);
        assert!(state.is_halted());
        assert_eq!(state.halt_reason, Some(HaltReason::Overflow { pc: 2 }));
        assert_eq!(state.acc, Value::MAX);
        assert_eq!(state.pc, 2);

        let (mut state, mut mem) = setup();
        state.acc = Value::MIN;
        execute(Opcode::Cmp, &imm(Opcode::Cmp, 1), &mut state, &mut mem);
        assert_eq!(state.halt_reason, Some(HaltReason::Overflow { pc: 0 }));
    }

    #[test]
    fn test_inc_overflow_leaves_operand() {
        let (mut state, mut mem) = setup();
        state.registers[0] = Value::MAX;
        let inc = Instruction::new(Opcode::Inc, AddressingMode::Register, 1);
        execute(Opcode::Inc, &inc, &mut state, &mut mem);
        assert_eq!(state.registers[0], Value::MAX);
        assert_eq!(state.halt_reason, Some(HaltReason::Overflow { pc: 0 }));
    }
}
