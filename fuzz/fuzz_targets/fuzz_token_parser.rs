#![no_main]

use libfuzzer_sys::fuzz_target;
use lz77_coder::decode;
use lz77_coder::text::parse_tokens;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Arbitrary token text may be rejected - that's OK
    // We're looking for panics, not errors
    if let Ok(tokens) = parse_tokens(text) {
        // Skip streams that would expand to huge outputs
        let total = tokens.iter().map(|t| t.length.saturating_add(1)).fold(0usize, usize::saturating_add);
        if total <= 1 << 20 {
            let _ = decode(&tokens);
        }
    }
});
