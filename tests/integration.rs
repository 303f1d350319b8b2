//! End-to-end integration tests for lz77-coder.
//!
//! Exercises the encoder, decoder, ratio estimator, text format and CLI
//! together on synthetic data.

use std::fs;
use std::process::Command;

use lz77_coder::text::{parse_tokens, read_tokens, write_tokens};
use lz77_coder::{
    decode, encode, estimate, Decoder, Encoder, EncoderConfig, Error, FormatIssue, MatchStrategy,
    Token,
};

// ============================================================================
// Test Data Generators
// ============================================================================

/// Generate random text over a small alphabet using a simple PRNG
fn generate_random_text(size: usize, seed: u64) -> String {
    let alphabet: Vec<char> = "abcdefghijklmnopqrstuvwxyz ,.()\n".chars().collect();
    let mut state = seed;
    let mut text = String::with_capacity(size);
    for _ in 0..size {
        // Simple xorshift PRNG
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        text.push(alphabet[(state % alphabet.len() as u64) as usize]);
    }
    text
}

/// Generate highly repetitive text
fn generate_repetitive_text(size: usize) -> String {
    "ABCD".chars().cycle().take(size).collect()
}

/// Generate text with mixed patterns
fn generate_mixed_text(size: usize) -> String {
    let patterns = ["ACGTACGTACGT", "NNNNNNNN", "ATATATATAT", "the quick brown fox\n"];
    let mut text = String::with_capacity(size);
    let mut idx = 0;
    while text.chars().count() < size {
        text.push_str(patterns[idx % patterns.len()]);
        idx += 1;
    }
    text.chars().take(size).collect()
}

fn lz77_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lz77"))
}

// ============================================================================
// Codec Round-Trip Tests
// ============================================================================

#[test]
fn test_roundtrip_random() {
    for seed in [1, 42, 12345] {
        let text = generate_random_text(2_000, seed);
        assert_eq!(decode(&encode(&text).unwrap()).unwrap(), text);
    }
}

#[test]
fn test_roundtrip_repetitive() {
    let text = generate_repetitive_text(5_000);
    let tokens = encode(&text).unwrap();
    assert!(tokens.len() < text.len() / 10, "expected long matches, got {} tokens", tokens.len());
    assert_eq!(decode(&tokens).unwrap(), text);
}

#[test]
fn test_roundtrip_mixed() {
    let text = generate_mixed_text(3_000);
    assert_eq!(decode(&encode(&text).unwrap()).unwrap(), text);
}

#[test]
fn test_roundtrip_unicode() {
    let text = "Привет, мир! Привет, мир! 日本語日本語 🦀🦀🦀";
    assert_eq!(decode(&encode(text).unwrap()).unwrap(), text);
}

#[test]
fn test_strategies_agree() {
    let exhaustive = Encoder::new(EncoderConfig { strategy: MatchStrategy::Exhaustive });
    let indexed = Encoder::new(EncoderConfig { strategy: MatchStrategy::Indexed });

    for text in [generate_random_text(1_000, 7), generate_mixed_text(1_000)] {
        assert_eq!(exhaustive.encode(&text).unwrap(), indexed.encode(&text).unwrap());
    }
}

#[test]
fn test_literal_only_for_distinct_symbols() {
    let text = "abcdefghijklmnopqrstuvwxyz0123456789";
    let tokens = encode(text).unwrap();
    assert_eq!(tokens.len(), text.len());
    assert!(tokens.iter().all(|t| t.offset == 0 && t.length == 0));
}

// ============================================================================
// Concrete Scenarios
// ============================================================================

#[test]
fn test_abab_scenario() {
    let tokens = encode("ABAB").unwrap();
    assert_eq!(tokens, vec![Token::literal('A'), Token::literal('B'), Token::copy(2, 2, None)]);
    assert_eq!(decode(&tokens).unwrap(), "ABAB");

    let est = estimate("ABAB", &tokens);
    assert_eq!(est.original_bits, 32);
    assert_eq!(est.offset_bits, 1);
    assert_eq!(est.length_bits, 1);
    assert_eq!(est.bits_per_token, 10);
    assert_eq!(est.encoded_bits, 30);
    assert!((est.ratio - 1.0667).abs() < 1e-4);
}

#[test]
fn test_single_symbol_scenario() {
    let tokens = encode("A").unwrap();
    assert_eq!(tokens, vec![Token::literal('A')]);
    assert_eq!(decode(&tokens).unwrap(), "A");
}

#[test]
fn test_estimate_matches_formula() {
    let text = generate_mixed_text(2_000);
    let tokens = encode(&text).unwrap();
    let est = estimate(&text, &tokens);

    assert_eq!(est.original_bits, 2_000 * 8);
    assert_eq!(est.encoded_bits, tokens.len() as u64 * est.bits_per_token as u64);
    assert_eq!(est.ratio, est.original_bits as f64 / est.encoded_bits as f64);
    assert!(est.ratio > 1.0);
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_empty_input_rejected() {
    assert!(matches!(encode(""), Err(Error::EmptyInput)));
}

#[test]
fn test_empty_tokens_rejected() {
    assert!(matches!(Decoder::new().decode(&[]), Err(Error::EmptyTokenList)));
}

#[test]
fn test_corrupt_token_rejected() {
    let tokens = parse_tokens("(0,0,A)\n(5,2,eof)\n").unwrap();
    assert!(matches!(decode(&tokens), Err(Error::CorruptToken { index: 1, offset: 5, .. })));
}

#[test]
fn test_format_errors() {
    for (text, expected) in [
        ("(1,2)", FormatIssue::FieldCount(2)),
        ("(a,2,x)", FormatIssue::InvalidOffset),
        ("(1,2,)", FormatIssue::EmptySymbol),
    ] {
        match parse_tokens(text) {
            Err(Error::Format { issue, .. }) => assert_eq!(issue, expected, "for {:?}", text),
            other => panic!("expected format error for {:?}, got {:?}", text, other),
        }
    }
}

// ============================================================================
// Text Format Tests
// ============================================================================

#[test]
fn test_text_roundtrip_through_file() {
    let text = generate_random_text(1_500, 99);
    let tokens = encode(&text).unwrap();

    let file = tempfile::NamedTempFile::new().unwrap();
    write_tokens(fs::File::create(file.path()).unwrap(), &tokens).unwrap();

    let read_back = read_tokens(fs::File::open(file.path()).unwrap()).unwrap();
    assert_eq!(read_back, tokens);
    assert_eq!(decode(&read_back).unwrap(), text);
}

#[test]
fn test_text_layout_one_token_per_line() {
    let tokens = encode("line one\nline two\n").unwrap();
    let mut output = Vec::new();
    write_tokens(&mut output, &tokens).unwrap();

    let written = String::from_utf8(output).unwrap();
    assert_eq!(written.lines().count(), tokens.len());
}

// ============================================================================
// Binary CLI Tests
// ============================================================================

#[test]
fn test_cli_encode_decode_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let text_path = dir.path().join("coding.txt");
    let tokens_path = dir.path().join("decoding.txt");
    let decoded_path = dir.path().join("decoded.txt");

    let text = generate_mixed_text(1_000);
    fs::write(&text_path, &text).unwrap();

    let status = lz77_bin()
        .args(["encode", "-i"])
        .arg(&text_path)
        .arg("-o")
        .arg(&tokens_path)
        .status()
        .expect("Failed to run CLI");
    assert!(status.success());

    let tokens = parse_tokens(&fs::read_to_string(&tokens_path).unwrap()).unwrap();
    assert_eq!(tokens, encode(&text).unwrap());

    let status = lz77_bin()
        .args(["decode", "-i"])
        .arg(&tokens_path)
        .arg("-o")
        .arg(&decoded_path)
        .status()
        .expect("Failed to run CLI");
    assert!(status.success());

    assert_eq!(fs::read_to_string(&decoded_path).unwrap(), text);
}

#[test]
fn test_cli_ratio_and_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let text_path = dir.path().join("coding.txt");
    let tokens_path = dir.path().join("decoding.txt");

    fs::write(&text_path, "ABAB").unwrap();
    fs::write(&tokens_path, "(0,0,A)\n(0,0,B)\n\n(2,2,eof)\n").unwrap();

    let output = lz77_bin()
        .args(["ratio", "--text"])
        .arg(&text_path)
        .arg("--tokens")
        .arg(&tokens_path)
        .output()
        .expect("Failed to run CLI");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Original bits:    32"));
    assert!(stdout.contains("Encoded bits:     30"));
    assert!(stdout.contains("Ratio:            1.07"));

    let output = lz77_bin().args(["tokens", "-i"]).arg(&tokens_path).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("(2,2,eof)"));
    assert!(stdout.contains("Total tokens: 3"));
}

#[test]
fn test_cli_reports_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let tokens_path = dir.path().join("decoding.txt");
    fs::write(&tokens_path, "(0,0,A)\n(a,2,x)\n").unwrap();

    let output = lz77_bin()
        .args(["decode", "-i"])
        .arg(&tokens_path)
        .arg("-o")
        .arg(dir.path().join("out.txt"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 2"), "stderr: {}", stderr);
}

#[test]
fn test_cli_empty_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let text_path = dir.path().join("coding.txt");
    fs::write(&text_path, "").unwrap();

    let status = lz77_bin()
        .args(["encode", "-i"])
        .arg(&text_path)
        .arg("-o")
        .arg(dir.path().join("decoding.txt"))
        .status()
        .unwrap();
    assert!(!status.success());
}
