#![no_main]

use libfuzzer_sys::fuzz_target;
use lz77_coder::text::{parse_tokens, write_tokens};
use lz77_coder::{decode, encode};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.is_empty() {
        return;
    }

    // Encoding is quadratic; keep inputs small
    let mut end = text.len().min(4 * 1024);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let text = &text[..end];
    if text.is_empty() {
        return;
    }

    let tokens = encode(text).expect("non-empty input must encode");
    assert_eq!(decode(&tokens).expect("encoded tokens must decode"), text, "Round-trip mismatch");

    // The text form must carry the same tokens
    let mut written = Vec::new();
    write_tokens(&mut written, &tokens).expect("write to Vec");
    let parsed = parse_tokens(std::str::from_utf8(&written).expect("utf-8")).expect("parse");
    assert_eq!(parsed, tokens);
});
