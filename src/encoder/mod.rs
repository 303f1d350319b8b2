pub mod matcher;

pub use matcher::{ExhaustiveMatcher, IndexedMatcher, Match, MatchFinder};

use crate::error::{Error, Result};
use crate::token::Token;
use crate::{EncoderConfig, MatchStrategy};

/// Greedy LZ77 encoder over an unbounded window
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode a string, one symbol per `char`
    pub fn encode(&self, input: &str) -> Result<Vec<Token>> {
        let symbols: Vec<char> = input.chars().collect();
        self.encode_symbols(&symbols)
    }

    /// Encode a symbol sequence into tokens
    pub fn encode_symbols(&self, input: &[char]) -> Result<Vec<Token>> {
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }

        let tokens = match self.config.strategy {
            MatchStrategy::Exhaustive => encode_with(input, ExhaustiveMatcher),
            MatchStrategy::Indexed => encode_with(input, IndexedMatcher::new()),
        };
        Ok(tokens)
    }
}

/// Emit one token per step until the whole input is covered
fn encode_with<M: MatchFinder>(input: &[char], mut finder: M) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut position = 0;

    while position < input.len() {
        let found = finder.find(input, position);

        let token = if found.length == 0 {
            Token::literal(input[position])
        } else {
            // Match ran to the end of input: no trailing symbol
            let next = input.get(position + found.length).copied();
            Token::copy(found.offset, found.length, next)
        };
        tokens.push(token);

        let end = (position + found.length + 1).min(input.len());
        finder.commit(input, position, end);
        position += found.length + 1;
    }

    tokens
}
