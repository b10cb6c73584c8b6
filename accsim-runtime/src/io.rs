//! Data memory input

use accsim_spec::Value;

use crate::error::{Result, RuntimeError};

/// Parse whitespace-separated signed integers. Empty input yields no values.
pub fn parse_data(text: &str) -> Result<Vec<Value>> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<Value>().map_err(|_| RuntimeError::InvalidData {
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_whitespace() {
        assert_eq!(parse_data("10 1\n2\t-3  +4\n").unwrap(), vec![10, 1, 2, -3, 4]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_data("").unwrap().is_empty());
        assert!(parse_data("  \n\t").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        match parse_data("1 2 x3 4") {
            Err(RuntimeError::InvalidData { token }) => assert_eq!(token, "x3"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_wide_values() {
        assert_eq!(
            parse_data("99999999999999999999 -5").unwrap(),
            vec![99_999_999_999_999_999_999, -5]
        );
    }

    #[test]
    fn test_parse_rejects_fraction() {
        assert!(parse_data("1.5").is_err());
    }
}
