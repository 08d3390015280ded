use bitflags::bitflags;
use serde::Serialize;

use crate::bits::field;
use crate::error::DecodeError;
use crate::isa::rv32i::{self, Mnemonic};
use crate::opcodes::{lookup, Format, Major, Opcode};

bitflags! {
    /// Operand fields a format carries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct Fields: u8 {
        const RD = 1 << 0;
        const RS1 = 1 << 1;
        const RS2 = 1 << 2;
        const IMM = 1 << 3;
    }
}

/// One decoded word, bound to the registry entry its opcode bits matched.
///
/// Field values are pulled out of the word on demand. `rd`, `rs1`, `rs2` and
/// `imm` fail with [`DecodeError::MissingField`] when the format lacks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    word: u32,
    opcode: &'static Opcode,
}

impl Instruction {
    pub fn word(&self) -> u32 {
        self.word
    }

    pub fn opcode(&self) -> &'static Opcode {
        self.opcode
    }

    pub fn major(&self) -> Major {
        self.opcode.major
    }

    pub fn format(&self) -> Format {
        self.opcode.format
    }

    pub fn fields(&self) -> Fields {
        self.opcode.format.fields()
    }

    pub fn has_rd(&self) -> bool {
        self.fields().contains(Fields::RD)
    }

    pub fn has_rs1(&self) -> bool {
        self.fields().contains(Fields::RS1)
    }

    pub fn has_rs2(&self) -> bool {
        self.fields().contains(Fields::RS2)
    }

    pub fn has_imm(&self) -> bool {
        self.fields().contains(Fields::IMM)
    }

    pub fn rd(&self) -> Result<u8, DecodeError> {
        self.require(Fields::RD, "rd")?;
        Ok(field(self.word, 11, 7) as u8)
    }

    pub fn rs1(&self) -> Result<u8, DecodeError> {
        self.require(Fields::RS1, "rs1")?;
        Ok(field(self.word, 19, 15) as u8)
    }

    pub fn rs2(&self) -> Result<u8, DecodeError> {
        self.require(Fields::RS2, "rs2")?;
        Ok(field(self.word, 24, 20) as u8)
    }

    /// Assembled immediate as an unsigned magnitude, not sign-extended.
    pub fn imm(&self) -> Result<u32, DecodeError> {
        let w = self.word;
        let imm = match self.format() {
            Format::R => return Err(self.missing("imm")),
            Format::I => field(w, 31, 20),
            // Low group is read from bits [4:0], not the RISC-V rd slot [11:7].
            Format::S => (field(w, 31, 25) << 5) + field(w, 4, 0),
            Format::B => {
                (field(w, 31, 31) << 12)
                    | (field(w, 7, 7) << 11)
                    | (field(w, 30, 25) << 5)
                    | (field(w, 11, 8) << 1)
            }
            Format::U => field(w, 31, 12),
            Format::J => {
                (field(w, 31, 31) << 20)
                    | (field(w, 19, 12) << 12)
                    | (field(w, 20, 20) << 11)
                    | (field(w, 30, 21) << 1)
            }
        };
        Ok(imm)
    }

    pub fn func3(&self) -> u32 {
        field(self.word, 14, 12)
    }

    pub fn func7(&self) -> u32 {
        field(self.word, 31, 25)
    }

    pub fn mnemonic(&self) -> Result<Mnemonic, DecodeError> {
        rv32i::resolve(self)
    }

    fn require(&self, f: Fields, name: &'static str) -> Result<(), DecodeError> {
        if self.fields().contains(f) {
            Ok(())
        } else {
            Err(self.missing(name))
        }
    }

    fn missing(&self, name: &'static str) -> DecodeError {
        DecodeError::MissingField {
            field: name,
            format: self.format(),
            word: self.word,
        }
    }
}

pub trait Decoder {
    fn decode(&self, raw32: u32) -> Result<Instruction, DecodeError>;
}

/// Classify `word` by its opcode bits and bind it to the matching format.
pub fn decode(word: u32) -> Result<Instruction, DecodeError> {
    let opcode = lookup(field(word, 6, 0))?;
    Ok(Instruction { word, opcode })
}
