use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid hex digit at line {line} in {field}: {char:?}")]
    InvalidHexDigit {
        line: usize,
        field: &'static str,
        char: char,
    },

    #[error("record truncated at line {line}: missing {field}")]
    TruncatedField { line: usize, field: &'static str },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::InvalidHexDigit { line, .. } | ParseError::TruncatedField { line, .. } => {
                *line
            }
        }
    }
}
