//! Operand resolution
//!
//! Addressing is fail-soft: reads from an invalid register or an
//! out-of-range data address yield 0, and writes to them are dropped.

use accsim_spec::{AddressingMode, Instruction, Value, NUM_REGISTERS};

/// Data address named by the operand, if it falls inside data memory
fn effective_address(
    instr: &Instruction,
    registers: &[Value; NUM_REGISTERS],
    data_len: usize,
) -> Option<usize> {
    let addr = match instr.mode {
        AddressingMode::Direct => Value::from(instr.operand),
        AddressingMode::RegisterIndirect => registers[instr.register()?.index()],
        AddressingMode::Immediate | AddressingMode::Register => return None,
    };
    usize::try_from(addr).ok().filter(|&a| a < data_len)
}

/// Value of the operand of `instr`
pub fn read_operand(instr: &Instruction, registers: &[Value; NUM_REGISTERS], data: &[Value]) -> Value {
    match instr.mode {
        AddressingMode::Immediate => instr.immediate(),
        AddressingMode::Register => instr.register().map_or(0, |r| registers[r.index()]),
        AddressingMode::Direct | AddressingMode::RegisterIndirect => {
            effective_address(instr, registers, data.len()).map_or(0, |a| data[a])
        }
    }
}

/// Store `value` at the operand of `instr`. Immediate operands are not writable.
pub fn write_operand(
    instr: &Instruction,
    value: Value,
    registers: &mut [Value; NUM_REGISTERS],
    data: &mut [Value],
) {
    if !instr.mode.is_writable() {
        return;
    }

    if instr.mode == AddressingMode::Register {
        if let Some(r) = instr.register() {
            registers[r.index()] = value;
        }
    } else if let Some(a) = effective_address(instr, registers, data.len()) {
        data[a] = value;
    }
}
