//! Main assembler logic
//!
//! Two passes over the classified source lines. Pass 1 binds every label to
//! the address of the next instruction; pass 2 encodes one word per
//! instruction line, so forward references resolve exactly like backward
//! ones and word `i` always comes from the `i`-th instruction line.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use accsim_spec::{Opcode, Program, Word, NOP_WORD};
use crate::encoder::{encode, encode_jump};
use crate::error::{AssemblerError, Result};
use crate::parser::{parse_address, parse_line, parse_operand, Operand, SourceLine};

/// Assembler configuration
#[derive(Debug, Clone, Default)]
pub struct AssemblerConfig {
    /// Reject input the default mode silently degrades: unknown mnemonics,
    /// malformed numbers, unresolvable jump targets, and duplicate labels.
    pub strict: bool,
}

/// Assemble source code into a program
pub fn assemble(source: &str) -> Result<Program> {
    assemble_with(source, &AssemblerConfig::default())
}

/// Assemble source code with an explicit configuration
pub fn assemble_with(source: &str, config: &AssemblerConfig) -> Result<Program> {
    let lines: Vec<(usize, SourceLine)> = source
        .lines()
        .enumerate()
        .filter_map(|(idx, text)| parse_line(text).map(|line| (idx + 1, line)))
        .collect();

    let labels = collect_labels(&lines, config)?;

    let mut code = Vec::new();
    for (line_num, line) in &lines {
        if let SourceLine::Instruction { mnemonic, operand } = line {
            code.push(encode_line(*line_num, mnemonic, operand, &labels, config)?);
        }
    }

    debug!(words = code.len(), labels = labels.len(), "assembled program");
    Ok(Program::with_labels(code, labels))
}

/// Pass 1: label name -> address of the following instruction
fn collect_labels(
    lines: &[(usize, SourceLine)],
    config: &AssemblerConfig,
) -> Result<BTreeMap<String, usize>> {
    let mut labels = BTreeMap::new();
    let mut addr = 0usize;

    for (line_num, line) in lines {
        match line {
            SourceLine::Label(name) => {
                debug!(label = %name, addr, "label defined");
                if labels.insert(name.clone(), addr).is_some() && config.strict {
                    return Err(AssemblerError::DuplicateLabel {
                        line: *line_num,
                        label: name.clone(),
                    });
                }
            }
            SourceLine::Instruction { .. } => addr += 1,
        }
    }

    Ok(labels)
}

/// Pass 2: encode a single instruction line
fn encode_line(
    line: usize,
    mnemonic: &str,
    operand: &str,
    labels: &BTreeMap<String, usize>,
    config: &AssemblerConfig,
) -> Result<Word> {
    let Some(opcode) = Opcode::from_mnemonic(mnemonic) else {
        if config.strict {
            return Err(AssemblerError::UnknownInstruction {
                line,
                mnemonic: mnemonic.to_string(),
            });
        }
        warn!(line, mnemonic, "unknown instruction, emitting no-op word");
        return Ok(NOP_WORD);
    };

    if opcode.is_jump() {
        return encode_jump_line(line, opcode, operand, labels, config);
    }

    let parsed = parse_operand(operand);
    if let Operand::Malformed(text) = &parsed {
        if config.strict {
            return Err(AssemblerError::InvalidNumber {
                line,
                text: text.clone(),
            });
        }
        warn!(line, operand = %text, "malformed number, using immediate 0");
    }

    encode(opcode, &parsed).ok_or_else(|| AssemblerError::InvalidOperand {
        line,
        mnemonic: mnemonic.to_string(),
        operand: operand.to_string(),
    })
}

/// Jump targets: label first, then a bare address
fn encode_jump_line(
    line: usize,
    opcode: Opcode,
    operand: &str,
    labels: &BTreeMap<String, usize>,
    config: &AssemblerConfig,
) -> Result<Word> {
    let target = match labels.get(operand).copied().or_else(|| parse_address(operand)) {
        Some(target) => target,
        None if config.strict => {
            return Err(AssemblerError::UndefinedLabel {
                line,
                label: operand.to_string(),
            });
        }
        None => {
            warn!(line, target = operand, "unresolved jump target, using address 0");
            0
        }
    };

    Ok(encode_jump(opcode, target))
}
