use crate::error::{Error, FormatIssue, Result};
use crate::token::Token;
use memchr::memchr_iter;
use std::io::Read;
use std::str::FromStr;

/// Parse one `(offset,length,symbol|eof)` line.
///
/// One leading `(` and one trailing `)` are stripped, then the body is split
/// into at most three fields so the symbol itself may be `,`.
pub fn parse_token(line: &str) -> std::result::Result<Token, FormatIssue> {
    let body = line.trim();
    let body = body.strip_prefix('(').unwrap_or(body);
    let body = body.strip_suffix(')').unwrap_or(body);

    let mut fields = body.splitn(3, ',');
    let offset_field = fields.next().unwrap_or_default();
    let length_field = fields.next().ok_or(FormatIssue::FieldCount(1))?;
    let symbol_field = fields.next().ok_or(FormatIssue::FieldCount(2))?;

    let offset = offset_field.trim().parse::<usize>().map_err(|_| FormatIssue::InvalidOffset)?;
    let length = length_field.trim().parse::<usize>().map_err(|_| FormatIssue::InvalidLength)?;
    let next = parse_symbol(symbol_field)?;

    Ok(Token { offset, length, next })
}

/// `eof`, a single symbol, or one of the escapes written by the writer
fn parse_symbol(field: &str) -> std::result::Result<Option<char>, FormatIssue> {
    if field == "eof" {
        return Ok(None);
    }

    let mut chars = field.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (None, _, _) => Err(FormatIssue::EmptySymbol),
        (Some(c), None, _) => Ok(Some(c)),
        (Some('\\'), Some(escape), None) => match escape {
            'n' => Ok(Some('\n')),
            'r' => Ok(Some('\r')),
            't' => Ok(Some('\t')),
            '0' => Ok(Some('\0')),
            '\\' => Ok(Some('\\')),
            _ => Err(FormatIssue::SymbolTooLong),
        },
        // "(1,2,3,4)": the extra commas were extra fields
        _ if field.contains(',') => Err(FormatIssue::FieldCount(2 + field.split(',').count())),
        _ => Err(FormatIssue::SymbolTooLong),
    }
}

impl FromStr for Token {
    type Err = FormatIssue;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_token(s)
    }
}

/// Parse a whole token text, skipping blank lines.
///
/// Fails with [`Error::EmptyTokenList`] when no token line remains.
pub fn parse_tokens(text: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();

    let mut start = 0;
    let ends = memchr_iter(b'\n', text.as_bytes()).chain(std::iter::once(text.len()));
    for (index, end) in ends.enumerate() {
        let line = &text[start..end];
        start = end + 1;

        if line.trim().is_empty() {
            continue;
        }

        let token = parse_token(line).map_err(|issue| Error::Format {
            line: index + 1,
            text: line.trim_end().to_string(),
            issue,
        })?;
        tokens.push(token);
    }

    if tokens.is_empty() {
        return Err(Error::EmptyTokenList);
    }
    Ok(tokens)
}

/// Read and parse token text from `reader`
pub fn read_tokens<R: Read>(mut reader: R) -> Result<Vec<Token>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_tokens(&text)
}
