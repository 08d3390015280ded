use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use rv32i_disasm::{disassemble, format_text, load_raw_bin, parse_addr};

#[derive(Parser, Debug)]
#[command(author, version, about = "List RV32I instructions from a raw binary", long_about = None)]
struct Opts {
    /// Load address for the binary in target address space
    #[arg(long, default_value_t = 0u32)]
    base: u32,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Input binary path
    #[arg(value_name = "BINFILE")]
    input: String,
    /// Start address (hex or dec); defaults to --base
    #[arg(long)]
    start: Option<String>,
    /// End address (hex or dec, exclusive); defaults to end of image
    #[arg(long)]
    end: Option<String>,
    /// Show instruction bytes
    #[arg(long)]
    show_bytes: bool,
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let img = load_raw_bin(Path::new(&opts.input), opts.base, opts.skip, opts.len)?;

    let start = match &opts.start {
        Some(s) => parse_addr(s)?,
        None => opts.base,
    };
    let end = match &opts.end {
        Some(s) => parse_addr(s)?,
        None => img.end(),
    };
    anyhow::ensure!(end >= start, "end must be >= start");
    tracing::debug!(start, end, "listing range");

    let entries = disassemble(&img, start, end);
    let buf = match opts.format {
        OutputFormat::Text => format_text(&img, &entries, opts.show_bytes),
        OutputFormat::Json => serde_json::to_string_pretty(&entries)? + "\n",
    };
    if let Some(path) = opts.out { std::fs::write(path, buf)?; } else { print!("{}", buf); }
    Ok(())
}
