//! Parsing of typed moves.

use derive_more::{Display, Error};
use std::str::FromStr;

/// A move as typed at the prompt: `row,col`, zero-based from the top-left.
///
/// Parsing only checks the shape of the input. Whether the coordinates
/// fit on the board is for the board to decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinates {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

/// Why a typed move could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseMoveError {
    /// Not exactly two comma-separated values.
    #[display("expected 'row,col' but found {found} value(s)")]
    WrongArity {
        /// Number of comma-separated values found.
        found: usize,
    },
    /// A value was not a non-negative integer.
    #[display("'{value}' is not a non-negative integer")]
    NotANumber {
        /// Offending text.
        value: String,
    },
}

impl FromStr for Coordinates {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(',').map(str::trim).collect();
        let [row, col] = parts.as_slice() else {
            return Err(ParseMoveError::WrongArity { found: parts.len() });
        };
        Ok(Self {
            row: parse_index(row)?,
            col: parse_index(col)?,
        })
    }
}

fn parse_index(s: &str) -> Result<usize, ParseMoveError> {
    s.parse().map_err(|_| ParseMoveError::NotANumber {
        value: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_row_and_col() {
        assert_eq!("1,2".parse::<Coordinates>(), Ok(Coordinates { row: 1, col: 2 }));
    }

    #[test]
    fn test_tolerates_whitespace() {
        assert_eq!(" 0 , 2 \n".parse::<Coordinates>(), Ok(Coordinates { row: 0, col: 2 }));
    }

    #[test]
    fn test_out_of_range_values_still_parse() {
        assert_eq!("5,0".parse::<Coordinates>(), Ok(Coordinates { row: 5, col: 0 }));
    }

    #[test]
    fn test_rejects_wrong_arity() {
        assert_eq!(
            "1".parse::<Coordinates>(),
            Err(ParseMoveError::WrongArity { found: 1 })
        );
        assert_eq!(
            "1,2,3".parse::<Coordinates>(),
            Err(ParseMoveError::WrongArity { found: 3 })
        );
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(
            "a,1".parse::<Coordinates>(),
            Err(ParseMoveError::NotANumber {
                value: "a".to_string()
            })
        );
        assert_eq!(
            "1,-1".parse::<Coordinates>(),
            Err(ParseMoveError::NotANumber {
                value: "-1".to_string()
            })
        );
    }
}
