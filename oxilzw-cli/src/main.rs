//! OxiLZW CLI - policy-driven LZW compression over standard streams.
//!
//! `compress` reads raw bytes from stdin and writes the compressed stream
//! to stdout; `expand` does the inverse. The compressed stream is
//! self-describing, so `expand` takes no further arguments.

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use oxilzw::{Alphabet, CodecConfig, Decoder, Encoder, Policy};
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "oxilzw")]
#[command(
    author,
    version,
    about = "Policy-driven LZW codec for byte streams"
)]
#[command(long_about = "
OxiLZW compresses a byte stream with variable-width LZW codes and a
selectable full-dictionary policy.

Examples:
  oxilzw --mode compress --alphabet ascii.txt < plain > packed
  oxilzw --mode compress --alphabet ascii.txt --minW 9 --maxW 12 --policy lru < plain > packed
  oxilzw --mode expand < packed > plain
")]
struct Cli {
    /// Direction of operation
    #[arg(long, value_enum)]
    mode: Mode,

    /// Alphabet file, one symbol per line (required for compression)
    #[arg(long)]
    alphabet: Option<PathBuf>,

    /// Minimum code width in bits
    #[arg(long = "minW", default_value_t = 9)]
    min_width: u8,

    /// Maximum code width in bits
    #[arg(long = "maxW", default_value_t = 16)]
    max_width: u8,

    /// Full-dictionary policy: freeze, reset, lru or lfu
    #[arg(long, default_value = "freeze")]
    policy: String,
}

/// Direction of operation (for clap ValueEnum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Compress stdin to stdout
    Compress,
    /// Expand stdin to stdout
    Expand,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                // Unrecognized option tokens are distinguished from other
                // argument problems by their exit code.
                ErrorKind::UnknownArgument => 2,
                _ => 1,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    let result = match cli.mode {
        Mode::Compress => cmd_compress(&cli),
        Mode::Expand => cmd_expand(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn cmd_compress(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = &cli.alphabet else {
        return Err("--alphabet is required in compress mode".into());
    };
    if cli.min_width < 1 {
        return Err("--minW must be at least 1".into());
    }
    if cli.max_width < cli.min_width {
        return Err("--maxW must be at least --minW".into());
    }
    if cli.max_width > 32 {
        eprintln!(
            "Warning: --maxW {} is excessive; code widths above 32 are rarely useful",
            cli.max_width
        );
    }

    // Unknown policy names silently fall back to freeze.
    let policy = Policy::from_name(&cli.policy).unwrap_or(Policy::Freeze);

    let text = std::fs::read(path)
        .map_err(|e| format!("cannot read alphabet file {}: {e}", path.display()))?;
    if text.is_empty() {
        return Err(format!("alphabet file {} is empty", path.display()).into());
    }
    let alphabet = Alphabet::parse(&text);
    let config = CodecConfig::new(cli.min_width, cli.max_width, policy);
    let encoder = Encoder::new(alphabet, config)?;

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    encoder.encode(BufReader::new(stdin), BufWriter::new(stdout))?;
    Ok(())
}

fn cmd_expand() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Decoder::decode(BufReader::new(stdin), BufWriter::new(stdout))?;
    Ok(())
}
