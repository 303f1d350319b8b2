use std::fmt;

/// A single token in the LZ77 stream: copy `length` symbols from `offset`
/// symbols back, then emit `next`.
///
/// `offset == 0 && length == 0` is a pure literal. `next == None` marks the
/// token that ends the stream without a trailing symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub offset: usize,
    pub length: usize,
    pub next: Option<char>,
}

impl Token {
    pub fn new(offset: usize, length: usize, next: Option<char>) -> Self {
        Self { offset, length, next }
    }

    /// A literal-only token
    pub fn literal(symbol: char) -> Self {
        Self { offset: 0, length: 0, next: Some(symbol) }
    }

    /// A back-reference followed by an optional trailing symbol
    pub fn copy(offset: usize, length: usize, next: Option<char>) -> Self {
        debug_assert!(length == 0 || offset > 0);
        Self { offset, length, next }
    }

    /// Whether this token carries no back-reference
    pub fn is_literal(&self) -> bool {
        self.length == 0
    }

    /// Whether the copied run reads symbols it produces itself
    pub fn is_self_referential(&self) -> bool {
        self.length > 0 && self.offset < self.length
    }

    /// Returns the number of symbols this token expands to
    pub fn uncompressed_size(&self) -> usize {
        self.length.saturating_add(usize::from(self.next.is_some()))
    }
}

/// Text form `(offset,length,symbol)` / `(offset,length,eof)`.
///
/// Symbols that would break the one-token-per-line layout are escaped, see
/// [`crate::text`].
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},", self.offset, self.length)?;
        match self.next {
            None => f.write_str("eof")?,
            Some('\n') => f.write_str("\\n")?,
            Some('\r') => f.write_str("\\r")?,
            Some('\t') => f.write_str("\\t")?,
            Some('\0') => f.write_str("\\0")?,
            Some('\\') => f.write_str("\\\\")?,
            Some(c) => write!(f, "{}", c)?,
        }
        f.write_str(")")
    }
}

/// Summary counts over a token sequence
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStats {
    pub tokens: usize,
    pub literals: usize,
    pub back_references: usize,
    pub self_referential: usize,
    /// Symbols the sequence decodes to
    pub symbols: usize,
}

impl TokenStats {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut stats = Self { tokens: tokens.len(), ..Default::default() };
        for token in tokens {
            if token.is_literal() {
                stats.literals += 1;
            } else {
                stats.back_references += 1;
            }
            if token.is_self_referential() {
                stats.self_referential += 1;
            }
            stats.symbols = stats.symbols.saturating_add(token.uncompressed_size());
        }
        stats
    }
}
