use anyhow::{Context, Result};
use std::path::Path;

/// A raw binary mapped at `base`.
#[derive(Debug, Clone)]
pub struct Image {
    pub base: u32,
    pub bytes: Vec<u8>,
}

impl Image {
    /// One past the last mapped address.
    pub fn end(&self) -> u32 {
        self.base.saturating_add(self.bytes.len() as u32)
    }

    pub fn read_u8(&self, addr: u32) -> Option<u8> {
        let off = addr.checked_sub(self.base)? as usize;
        self.bytes.get(off).copied()
    }

    // RISC-V instruction parcels are little-endian.
    pub fn read_u32(&self, addr: u32) -> Option<u32> {
        let off = addr.checked_sub(self.base)? as usize;
        let raw = self.bytes.get(off..off.checked_add(4)?)?;
        Some(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
    }
}

pub fn load_raw_bin(path: &Path, base: u32, skip: usize, len: Option<usize>) -> Result<Image> {
    let file = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    anyhow::ensure!(skip <= file.len(), "--skip exceeds file size");
    let mut payload = &file[skip..];
    if let Some(lim) = len {
        anyhow::ensure!(lim <= payload.len(), "--len exceeds remaining file size after skip");
        payload = &payload[..lim];
    }
    Ok(Image { base, bytes: payload.to_vec() })
}
