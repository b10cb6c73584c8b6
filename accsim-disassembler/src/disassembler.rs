//! Program and memory listings

use accsim_spec::{Program, Value, Word, NOP_WORD};
use crate::formatter::format;

/// One listing line: `AAA: 0xWWWW  TEXT`
pub fn format_line(addr: usize, word: Word) -> String {
    format!("{:03}: 0x{:04X}  {}", addr, word, format(word))
}

/// Disassemble a program into assembly text, one word per line.
///
/// Labels are re-inserted at their addresses as `NAME:` lines.
pub fn disassemble(program: &Program) -> String {
    let mut output = String::new();

    output.push_str("; Accumulator ISA disassembly\n");
    output.push_str(&format!(
        "; {} words ({} instructions)\n",
        program.len(),
        program.instruction_count()
    ));
    output.push('\n');

    for (addr, &word) in program.code.iter().enumerate() {
        for (name, _) in program.labels.iter().filter(|(_, a)| **a == addr) {
            output.push_str(&format!("{}:\n", name));
        }
        output.push_str(&format_line(addr, word));
        output.push('\n');
    }

    output
}

/// Code memory panel: every non-empty cell, plus the cell at `pc` if given
pub fn code_listing(memory: &[Word], pc: Option<usize>) -> Vec<String> {
    memory
        .iter()
        .enumerate()
        .filter(|&(addr, &word)| word != NOP_WORD || Some(addr) == pc)
        .map(|(addr, &word)| {
            let marker = if Some(addr) == pc { "> " } else { "  " };
            format!("{}{}", marker, format_line(addr, word))
        })
        .collect()
}

/// Data memory panel: the first `limit` cells as `AAA: value`
pub fn data_listing(memory: &[Value], limit: usize) -> Vec<String> {
    memory
        .iter()
        .take(limit)
        .enumerate()
        .map(|(addr, value)| format!("{:03}: {}", addr, value))
        .collect()
}
