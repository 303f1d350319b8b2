use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand, ValueEnum};
use lz77_coder::text::{read_tokens, TokenWriter};
use lz77_coder::{
    estimate, Decoder, Encoder, EncoderConfig, Error, MatchStrategy, Token, TokenStats,
};

#[derive(Parser, Debug)]
#[command(name = "lz77")]
#[command(about = "Encode text into LZ77 tokens, decode it back, and estimate compression")]
#[command(version)]
struct Args {
    /// Show verbose statistics
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a text file into a token file
    Encode {
        /// Input text file (use - for stdin)
        #[arg(short, long, default_value = "coding.txt")]
        input: PathBuf,

        /// Output token file (use - for stdout)
        #[arg(short, long, default_value = "decoding.txt")]
        output: PathBuf,

        /// Match search strategy
        #[arg(long, value_enum, default_value_t = Strategy::Indexed)]
        strategy: Strategy,
    },

    /// Decode a token file back into text
    Decode {
        /// Input token file (use - for stdin)
        #[arg(short, long, default_value = "decoding.txt")]
        input: PathBuf,

        /// Output text file (use - for stdout)
        #[arg(short, long, default_value = "coding.txt")]
        output: PathBuf,
    },

    /// Show the theoretical compression ratio of a token file
    Ratio {
        /// Original text file
        #[arg(long, default_value = "coding.txt")]
        text: PathBuf,

        /// Token file produced from it
        #[arg(long, default_value = "decoding.txt")]
        tokens: PathBuf,
    },

    /// List the tokens in a token file and their count
    Tokens {
        /// Input token file (use - for stdin)
        #[arg(short, long, default_value = "decoding.txt")]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    /// Try every earlier position
    Exhaustive,
    /// Try only earlier positions with the same first symbol
    Indexed,
}

impl From<Strategy> for MatchStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Exhaustive => MatchStrategy::Exhaustive,
            Strategy::Indexed => MatchStrategy::Indexed,
        }
    }
}

const EXIT_ERROR: u8 = 1;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run() -> Result<(), Error> {
    let args = Args::parse();

    match &args.command {
        Command::Encode { input, output, strategy } => {
            run_encode(input, output, *strategy, args.verbose)
        }
        Command::Decode { input, output } => run_decode(input, output, args.verbose),
        Command::Ratio { text, tokens } => run_ratio(text, tokens),
        Command::Tokens { input } => run_tokens(input),
    }
}

fn is_stdio(path: &Path) -> bool {
    path.to_str() == Some("-")
}

fn open_input(path: &Path) -> io::Result<Box<dyn Read>> {
    if is_stdio(path) {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

fn open_output(path: &Path) -> io::Result<Box<dyn Write>> {
    if is_stdio(path) {
        Ok(Box::new(io::stdout().lock()))
    } else {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    }
}

fn read_text(path: &Path) -> io::Result<String> {
    let mut text = String::new();
    open_input(path)?.read_to_string(&mut text)?;
    Ok(text)
}

fn run_encode(input: &Path, output: &Path, strategy: Strategy, verbose: bool) -> Result<(), Error> {
    let text = read_text(input)?;

    let config = EncoderConfig { strategy: strategy.into() };
    let start = Instant::now();
    let tokens = Encoder::new(config).encode(&text)?;
    let elapsed = start.elapsed();

    let mut writer = TokenWriter::new(open_output(output)?);
    writer.write_tokens(&tokens)?;
    writer.finish()?;

    if verbose {
        eprintln!("Encoding complete:");
        print_stats(&TokenStats::from_tokens(&tokens), elapsed);
    }
    if !is_stdio(output) {
        eprintln!("Encoded {} tokens to {}", tokens.len(), output.display());
    }

    Ok(())
}

fn run_decode(input: &Path, output: &Path, verbose: bool) -> Result<(), Error> {
    let tokens = read_tokens(open_input(input)?)?;

    let start = Instant::now();
    let text = Decoder::new().decode(&tokens)?;
    let elapsed = start.elapsed();

    let mut out = open_output(output)?;
    out.write_all(text.as_bytes())?;
    out.flush()?;

    if verbose {
        eprintln!("Decoding complete:");
        print_stats(&TokenStats::from_tokens(&tokens), elapsed);
    }
    if !is_stdio(output) {
        eprintln!("Decoded {} symbols to {}", text.chars().count(), output.display());
    }

    Ok(())
}

fn run_ratio(text_path: &Path, tokens_path: &Path) -> Result<(), Error> {
    let text = read_text(text_path)?;
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }
    let tokens = read_tokens(open_input(tokens_path)?)?;

    let est = estimate(&text, &tokens);
    println!("Original bits:    {}", est.original_bits);
    println!("Encoded bits:     {}", est.encoded_bits);
    println!(
        "Bits per token:   {} (offset {} + length {} + symbol {})",
        est.bits_per_token, est.offset_bits, est.length_bits, est.symbol_bits
    );
    println!("Ratio:            {:.2}", est.ratio);

    Ok(())
}

fn run_tokens(input: &Path) -> Result<(), Error> {
    let tokens: Vec<Token> = read_tokens(open_input(input)?)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Tokens:")?;
    for token in &tokens {
        writeln!(stdout, "{}", token)?;
    }
    writeln!(stdout, "Total tokens: {}", tokens.len())?;

    Ok(())
}

fn print_stats(stats: &TokenStats, elapsed: Duration) {
    eprintln!("  Symbols:          {}", stats.symbols);
    eprintln!("  Tokens:           {}", stats.tokens);
    eprintln!("  Literals:         {}", stats.literals);
    eprintln!("  Back-references:  {}", stats.back_references);
    eprintln!("  Self-referential: {}", stats.self_referential);
    eprintln!("  Time:             {:.2?}", elapsed);
    eprintln!(
        "  Throughput:       {:.1} Ksym/s",
        stats.symbols as f64 / elapsed.as_secs_f64().max(f64::EPSILON) / 1_000.0
    );
}
