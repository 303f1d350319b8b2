//! Line-oriented text form of a token sequence.
//!
//! Each token is written as `(offset,length,symbol)`, or `(offset,length,eof)`
//! when it carries no trailing symbol. Symbols that would break the layout
//! are escaped as `\n`, `\r`, `\t`, `\0` and `\\`.

pub mod reader;
pub mod writer;

pub use reader::{parse_token, parse_tokens, read_tokens};
pub use writer::{write_tokens, TokenWriter};
