pub mod listing;
pub mod model;

pub use listing::{disassemble, format_text, Entry};
pub use model::{load_raw_bin, Image};

use anyhow::{Context, Result};

/// Usage line printed for a missing or malformed instruction argument.
pub const USAGE: &str = "usage: rv32i-disasm <32-bit-rv32i-instruction-in-hex>";

/// Parse a bare hex instruction word: one or more hex digits, any case, no prefix.
pub fn parse_word(s: &str) -> Result<u32> {
    anyhow::ensure!(
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit()),
        "expected hex digits, got {s:?}"
    );
    u32::from_str_radix(s, 16).with_context(|| format!("{s:?} does not fit in 32 bits"))
}

/// Address argument: `0x`-prefixed hex or decimal.
pub fn parse_addr(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}
