//! Theoretical compression ratio of a token sequence.
//!
//! Models a fixed-width binary packing of every token: the offset and length
//! fields are as wide as their largest value needs, the symbol is 8 bits.
//! This is not the size of the text format written by [`crate::text`].

use crate::token::Token;

/// Bits per symbol assumed for both the original text and token symbols
pub const SYMBOL_BITS: u32 = 8;

/// Result of [`estimate`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CompressionEstimate {
    pub original_bits: u64,
    pub encoded_bits: u64,
    pub offset_bits: u32,
    pub length_bits: u32,
    pub symbol_bits: u32,
    pub bits_per_token: u32,
    /// `original_bits / encoded_bits`, 0.0 for the degenerate case
    pub ratio: f64,
}

/// Compare `input` at 8 bits per symbol against `tokens` at a fixed width.
///
/// Returns an all-zero estimate when either side is empty.
pub fn estimate(input: &str, tokens: &[Token]) -> CompressionEstimate {
    let symbols = input.chars().count();
    if symbols == 0 || tokens.is_empty() {
        return CompressionEstimate::default();
    }

    let max_offset = tokens.iter().map(|t| t.offset).max().unwrap_or(0).max(1);
    let max_length = tokens.iter().map(|t| t.length).max().unwrap_or(0).max(1);

    let offset_bits = ceil_log2(max_offset);
    let length_bits = ceil_log2(max_length);
    let bits_per_token = offset_bits + length_bits + SYMBOL_BITS;

    let original_bits = symbols as u64 * SYMBOL_BITS as u64;
    let encoded_bits = tokens.len() as u64 * bits_per_token as u64;

    CompressionEstimate {
        original_bits,
        encoded_bits,
        offset_bits,
        length_bits,
        symbol_bits: SYMBOL_BITS,
        bits_per_token,
        ratio: original_bits as f64 / encoded_bits as f64,
    }
}

/// `ceil(log2(n))` for n >= 1
#[inline]
fn ceil_log2(n: usize) -> u32 {
    debug_assert!(n >= 1);
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}
