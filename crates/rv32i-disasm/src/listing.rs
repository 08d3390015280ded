use std::fmt::Write as _;

use serde::Serialize;

use rv32i_decode::{decode, DecodedView};

use crate::model::Image;

/// One listing row: a decoded word, or the reason it could not be decoded.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub addr: u32,
    pub word: u32,
    pub decoded: Option<DecodedView>,
    pub error: Option<String>,
}

/// Decode every 4-byte word lying wholly inside `[start, end)`. A trailing
/// partial word is not listed. Stops early at the first address whose word is
/// not fully mapped.
pub fn disassemble(img: &Image, start: u32, end: u32) -> Vec<Entry> {
    let mut out = Vec::new();
    let mut pc = start;
    while let Some(next) = pc.checked_add(4).filter(|&n| n <= end) {
        let Some(word) = img.read_u32(pc) else {
            tracing::warn!(addr = pc, "word not fully mapped, stopping");
            break;
        };
        let entry = match decode(word).and_then(|i| DecodedView::new(&i)) {
            Ok(v) => Entry { addr: pc, word, decoded: Some(v), error: None },
            Err(e) => {
                tracing::debug!(addr = pc, word, error = %e, "undecodable word");
                Entry { addr: pc, word, decoded: None, error: Some(e.to_string()) }
            }
        };
        out.push(entry);
        pc = next;
    }
    out
}

pub fn format_text(img: &Image, entries: &[Entry], show_bytes: bool) -> String {
    let mut buf = String::new();
    for e in entries {
        let _ = write!(buf, "{:#010x}: ", e.addr);
        if show_bytes {
            for i in 0..4 {
                let b = img.read_u8(e.addr.wrapping_add(i)).unwrap_or(0);
                let _ = write!(buf, "{b:02x} ");
            }
            buf.push_str("  ");
        }
        match (&e.decoded, &e.error) {
            (Some(v), _) => {
                let _ = writeln!(buf, "{}", v.text);
            }
            (None, Some(err)) => {
                let _ = writeln!(buf, ".word {:#010x} ; {err}", e.word);
            }
            (None, None) => {
                let _ = writeln!(buf, ".word {:#010x}", e.word);
            }
        }
    }
    buf
}
