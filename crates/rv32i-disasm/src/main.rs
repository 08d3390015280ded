use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use rv32i_decode::{decode, render, DecodedView};
use rv32i_disasm::{parse_word, USAGE};

#[derive(Parser, Debug)]
#[command(author, version, about = "Decode one RV32I instruction word", long_about = None)]
struct Cli {
    /// Instruction word as bare hex digits (e.g. 00a00513)
    #[arg(value_name = "HEX")]
    word: String,
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

fn usage_exit() -> ! {
    println!("{USAGE}");
    std::process::exit(1);
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            tracing::debug!(error = %e, "bad arguments");
            usage_exit();
        }
    };
    let word = match parse_word(&cli.word) {
        Ok(w) => w,
        Err(e) => {
            tracing::debug!(error = %e, "bad instruction word");
            usage_exit();
        }
    };

    let insn = decode(word).with_context(|| format!("decoding {word:#010x}"))?;
    tracing::debug!(word, major = %insn.major(), format = %insn.format(), "decoded");

    match cli.format {
        OutputFormat::Text => {
            let text = render(&insn).with_context(|| format!("decoding {word:#010x}"))?;
            println!("{text}");
        }
        OutputFormat::Json => {
            let view = DecodedView::new(&insn).with_context(|| format!("decoding {word:#010x}"))?;
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }
    Ok(())
}
