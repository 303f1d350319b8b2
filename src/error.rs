use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Encoder errors
    #[error("Input symbol sequence is empty")]
    EmptyInput,

    // Decoder / token stream errors
    #[error("Token list is empty")]
    EmptyTokenList,

    #[error("Token {index} is corrupt: offset {offset} exceeds {available} decoded symbols")]
    CorruptToken { index: usize, offset: usize, available: usize },

    // Token text format errors
    #[error("Invalid token format on line {line} ({text:?}): {issue}")]
    Format { line: usize, text: String, issue: FormatIssue },
}

/// Which rule of the `(offset,length,symbol|eof)` grammar a line broke
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    #[error("expected 3 comma-separated fields, found {0}")]
    FieldCount(usize),

    #[error("offset is not a non-negative integer")]
    InvalidOffset,

    #[error("length is not a non-negative integer")]
    InvalidLength,

    #[error("symbol field is empty")]
    EmptySymbol,

    #[error("symbol field must be a single symbol or 'eof'")]
    SymbolTooLong,
}

pub type Result<T> = std::result::Result<T, Error>;
