use serde::Serialize;

use crate::decoder::Instruction;
use crate::error::DecodeError;
use crate::isa::rv32i::Mnemonic;
use crate::opcodes::{Format, Major};

/// One-line text form: mnemonic, `r<N>` for rd, rs1, rs2 when present, then
/// the immediate as `0x` plus six zero-padded hex digits.
pub fn render(i: &Instruction) -> Result<String, DecodeError> {
    let mut parts = vec![i.mnemonic()?.to_string()];
    if i.has_rd() {
        parts.push(format!("r{}", i.rd()?));
    }
    if i.has_rs1() {
        parts.push(format!("r{}", i.rs1()?));
    }
    if i.has_rs2() {
        parts.push(format!("r{}", i.rs2()?));
    }
    if i.has_imm() {
        parts.push(format!("0x{:06x}", i.imm()?));
    }
    Ok(parts.join(" "))
}

/// Serializable snapshot of a decoded word; absent fields are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedView {
    pub word: u32,
    pub major: Major,
    pub format: Format,
    pub mnemonic: Mnemonic,
    pub rd: Option<u8>,
    pub rs1: Option<u8>,
    pub rs2: Option<u8>,
    pub imm: Option<u32>,
    pub text: String,
}

impl DecodedView {
    pub fn new(i: &Instruction) -> Result<Self, DecodeError> {
        Ok(Self {
            word: i.word(),
            major: i.major(),
            format: i.format(),
            mnemonic: i.mnemonic()?,
            rd: i.has_rd().then(|| i.rd()).transpose()?,
            rs1: i.has_rs1().then(|| i.rs1()).transpose()?,
            rs2: i.has_rs2().then(|| i.rs2()).transpose()?,
            imm: i.has_imm().then(|| i.imm()).transpose()?,
            text: render(i)?,
        })
    }
}
