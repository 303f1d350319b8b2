use crate::error::{Error, Result};
use crate::token::Token;

const MAX_PREALLOC: usize = 1 << 20;

/// Replays tokens into a growing output buffer
#[derive(Clone, Debug, Default)]
pub struct Decoder;

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode tokens into a string
    pub fn decode(&self, tokens: &[Token]) -> Result<String> {
        Ok(self.decode_symbols(tokens)?.into_iter().collect())
    }

    /// Decode tokens into a symbol sequence
    pub fn decode_symbols(&self, tokens: &[Token]) -> Result<Vec<char>> {
        if tokens.is_empty() {
            return Err(Error::EmptyTokenList);
        }

        // Lengths may come from untrusted text; cap the up-front reservation
        let capacity = tokens.iter().map(Token::uncompressed_size).fold(0, usize::saturating_add);
        let mut output = Vec::with_capacity(capacity.min(MAX_PREALLOC));

        for (index, token) in tokens.iter().enumerate() {
            if token.length > 0 {
                copy_back(&mut output, index, token)?;
            }
            if let Some(symbol) = token.next {
                output.push(symbol);
            }
        }

        Ok(output)
    }
}

/// Append `token.length` symbols starting `token.offset` back.
///
/// Symbols are pushed one at a time so a run longer than its offset re-reads
/// what it has just written ("AB" at offset 2, length 6 -> "ABABAB").
#[inline]
fn copy_back(output: &mut Vec<char>, index: usize, token: &Token) -> Result<()> {
    let available = output.len();
    if token.offset == 0 || token.offset > available {
        return Err(Error::CorruptToken { index, offset: token.offset, available });
    }

    let start = available - token.offset;
    for i in 0..token.length {
        let symbol = output[start + i];
        output.push(symbol);
    }
    Ok(())
}
