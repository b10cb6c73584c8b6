//! # Lexer for operand text

use logos::Logos;

use accsim_spec::Value;

/// Decimal literal of any length. Values past the `Value` range wrap, which
/// keeps the low bits that survive encoding.
fn wrapping_decimal(text: &str) -> Value {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = digits.bytes().fold(0 as Value, |acc, d| {
        acc.wrapping_mul(10).wrapping_add(Value::from(d - b'0'))
    });
    if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

/// Tokens of a single operand (`#5`, `R2`, `[R3]`, `17`, `LOOP`)
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    /// Immediate prefix
    #[token("#")]
    Hash,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    /// Register name (`R` followed by digits). Range is checked by the parser.
    #[regex(r"R[0-9]+", |lex| lex.slice()[1..].parse::<i64>().ok(), priority = 10)]
    Register(i64),

    /// Decimal number
    #[regex(r"[+-]?[0-9]+", |lex| wrapping_decimal(lex.slice()))]
    Number(Value),

    /// Anything name-like (labels)
    #[regex(r"[A-Za-z_.][A-Za-z0-9_.]*", |lex| lex.slice().to_string())]
    Identifier(String),
}
