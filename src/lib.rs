pub mod decoder;
pub mod encoder;
pub mod error;
pub mod ratio;
pub mod text;
pub mod token;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{Error, FormatIssue, Result};
pub use ratio::{estimate, CompressionEstimate};
pub use token::{Token, TokenStats};

/// How the encoder searches the already-encoded prefix for matches
///
/// Both strategies produce identical tokens; they differ only in speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    /// Try every earlier start position
    Exhaustive,
    /// Try only earlier positions that start with the same symbol
    #[default]
    Indexed,
}

/// Configuration for encoding
#[derive(Clone, Debug, Default)]
pub struct EncoderConfig {
    /// Match search strategy (default: indexed)
    pub strategy: MatchStrategy,
}

/// Encode `input` with the default configuration
pub fn encode(input: &str) -> Result<Vec<Token>> {
    Encoder::default().encode(input)
}

/// Decode `tokens` back into the original text
pub fn decode(tokens: &[Token]) -> Result<String> {
    Decoder::new().decode(tokens)
}
