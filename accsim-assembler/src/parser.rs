//! Assembly parser
//!
//! Line classification and operand syntax. Parsing never fails on its own:
//! anything that does not fit the operand grammar comes back as
//! [`Operand::Label`] or [`Operand::Malformed`] and the assembler decides
//! what to do with it.

use logos::Logos;

use accsim_spec::{AddressingMode, Register, Value};
use crate::lexer::Token;

/// Comment marker: the rest of the line is ignored
pub const COMMENT_MARKER: char = ';';

/// Label terminator: `NAME:` on its own line
pub const LABEL_TERMINATOR: char = ':';

/// A meaningful source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLine {
    /// Label definition, bound to the next instruction address
    Label(String),
    /// Mnemonic (upper-cased) and the raw operand text (may be empty)
    Instruction { mnemonic: String, operand: String },
}

/// Operand as written in source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// No operand text
    None,
    /// `#v`
    Immediate(Value),
    /// bare `a`
    Direct(Value),
    /// `Rn`
    Register(Register),
    /// `[Rn]`
    Indirect(Register),
    /// `#` followed by something that is not a number
    Malformed(String),
    /// Anything else; only meaningful as a jump target
    Label(String),
}

impl Operand {
    /// Addressing mode and operand value to encode.
    ///
    /// A missing or malformed operand encodes as immediate 0. Labels have no
    /// encoding of their own and return `None`.
    pub fn encoding(&self) -> Option<(AddressingMode, Value)> {
        match self {
            Operand::None | Operand::Malformed(_) => Some((AddressingMode::Immediate, 0)),
            Operand::Immediate(v) => Some((AddressingMode::Immediate, *v)),
            Operand::Direct(a) => Some((AddressingMode::Direct, *a)),
            Operand::Register(r) => Some((AddressingMode::Register, Value::from(r.number()))),
            Operand::Indirect(r) => Some((AddressingMode::RegisterIndirect, Value::from(r.number()))),
            Operand::Label(_) => None,
        }
    }
}

/// Drop an inline comment and surrounding whitespace
pub fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(pos) => line[..pos].trim(),
        None => line.trim(),
    }
}

/// Classify one line of source. Blank and comment-only lines yield `None`.
pub fn parse_line(line: &str) -> Option<SourceLine> {
    let line = strip_comment(line);
    if line.is_empty() {
        return None;
    }

    if let Some(name) = line.strip_suffix(LABEL_TERMINATOR) {
        return Some(SourceLine::Label(name.trim().to_string()));
    }

    let (mnemonic, operand) = match line.split_once(char::is_whitespace) {
        Some((mnemonic, rest)) => (mnemonic, rest.trim()),
        None => (line, ""),
    };

    Some(SourceLine::Instruction {
        mnemonic: mnemonic.to_uppercase(),
        operand: operand.to_string(),
    })
}

/// Parse operand text by the operand grammar:
///
/// | text | operand |
/// |---|---|
/// | `#<int>` | immediate |
/// | `[R<n>]`, n in 1..8 | register-indirect |
/// | `R<n>`, n in 1..8 | register |
/// | `<int>` | direct |
/// | anything else | label |
pub fn parse_operand(text: &str) -> Operand {
    let text = text.trim();
    if text.is_empty() {
        return Operand::None;
    }

    let tokens: Result<Vec<Token>, ()> = Token::lexer(text).collect();
    let Ok(tokens) = tokens else {
        return unparsed(text);
    };

    match tokens.as_slice() {
        [Token::Hash, Token::Number(value)] => Operand::Immediate(*value),
        [Token::LBracket, Token::Register(n), Token::RBracket] => match Register::from_number(*n) {
            Some(reg) => Operand::Indirect(reg),
            None => Operand::Label(text.to_string()),
        },
        [Token::Register(n)] => match Register::from_number(*n) {
            Some(reg) => Operand::Register(reg),
            None => Operand::Label(text.to_string()),
        },
        [Token::Number(addr)] => Operand::Direct(*addr),
        _ => unparsed(text),
    }
}

fn unparsed(text: &str) -> Operand {
    if text.starts_with('#') {
        Operand::Malformed(text.to_string())
    } else {
        Operand::Label(text.to_string())
    }
}

/// Parse a jump target written as a bare address
pub fn parse_address(text: &str) -> Option<usize> {
    text.trim().parse::<usize>().ok()
}
