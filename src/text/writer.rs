use crate::error::Result;
use crate::token::Token;
use std::io::Write;

/// Writes tokens in the `(offset,length,symbol|eof)` text form, one per line
pub struct TokenWriter<W: Write> {
    writer: W,
    tokens_written: usize,
}

impl<W: Write> TokenWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, tokens_written: 0 }
    }

    /// Write a single token line
    pub fn write_token(&mut self, token: &Token) -> Result<()> {
        writeln!(self.writer, "{}", token)?;
        self.tokens_written += 1;
        Ok(())
    }

    /// Write every token in order
    pub fn write_tokens(&mut self, tokens: &[Token]) -> Result<()> {
        for token in tokens {
            self.write_token(token)?;
        }
        Ok(())
    }

    /// Number of token lines written so far
    pub fn tokens_written(&self) -> usize {
        self.tokens_written
    }

    /// Flush and finish writing
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    /// Get a reference to the inner writer
    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}

/// Write `tokens` to `writer` and flush
pub fn write_tokens<W: Write>(writer: W, tokens: &[Token]) -> Result<()> {
    let mut writer = TokenWriter::new(writer);
    writer.write_tokens(tokens)?;
    writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_tokens() {
        let tokens = [Token::literal('A'), Token::literal('B'), Token::copy(2, 2, None)];
        let mut output = Vec::new();
        let mut writer = TokenWriter::new(&mut output);
        writer.write_tokens(&tokens).unwrap();
        assert_eq!(writer.tokens_written(), 3);
        writer.finish().unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "(0,0,A)\n(0,0,B)\n(2,2,eof)\n");
    }

    #[test]
    fn test_write_newline_symbol_stays_on_one_line() {
        let mut output = Vec::new();
        write_tokens(&mut output, &[Token::literal('\n'), Token::copy(1, 1, Some('\r'))]).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "(0,0,\\n)\n(1,1,\\r)\n");
    }
}
