use std::fmt;

use serde::Serialize;

use crate::decoder::Fields;
use crate::error::DecodeError;

/// Major opcode groups of the base ISA, named after the RISC-V opcode map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Major {
    Load,
    MiscMem,
    OpImm,
    Auipc,
    #[serde(rename = "OP_IMM_32")]
    OpImm32,
    Store,
    Op,
    Lui,
    Branch,
    Jalr,
    Jal,
    System,
}

impl Major {
    pub fn name(self) -> &'static str {
        match self {
            Major::Load => "LOAD",
            Major::MiscMem => "MISC_MEM",
            Major::OpImm => "OP_IMM",
            Major::Auipc => "AUIPC",
            Major::OpImm32 => "OP_IMM_32",
            Major::Store => "STORE",
            Major::Op => "OP",
            Major::Lui => "LUI",
            Major::Branch => "BRANCH",
            Major::Jalr => "JALR",
            Major::Jal => "JAL",
            Major::System => "SYSTEM",
        }
    }
}

impl fmt::Display for Major {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Encoding format class. Selects operand layout and immediate assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Format {
    R,
    I,
    S,
    B,
    U,
    J,
}

impl Format {
    pub fn fields(self) -> Fields {
        match self {
            Format::R => Fields::RD | Fields::RS1 | Fields::RS2,
            Format::I => Fields::RD | Fields::RS1 | Fields::IMM,
            Format::S | Format::B => Fields::RS1 | Fields::RS2 | Fields::IMM,
            Format::U | Format::J => Fields::RD | Fields::IMM,
        }
    }

    /// Width in bits of the assembled immediate, 0 when the format has none.
    /// Pair with [`crate::bits::sign_extend`] for a signed reading.
    pub fn imm_width(self) -> u32 {
        match self {
            Format::R => 0,
            Format::I | Format::S => 12,
            Format::B => 13,
            Format::U => 20,
            Format::J => 21,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Format::R => "R",
            Format::I => "I",
            Format::S => "S",
            Format::B => "B",
            Format::U => "U",
            Format::J => "J",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Opcode {
    pub major: Major,
    pub format: Format,
    /// word bits [6:0]
    pub bits: u32,
}

// RVG major opcode map, base ISA rows only.
pub const OPCODES: &[Opcode] = &[
    Opcode {
        major: Major::Load,
        format: Format::I,
        bits: 0b00_000_11,
    },
    Opcode {
        major: Major::MiscMem,
        format: Format::I,
        bits: 0b00_011_11,
    },
    Opcode {
        major: Major::OpImm,
        format: Format::I,
        bits: 0b00_100_11,
    },
    Opcode {
        major: Major::Auipc,
        format: Format::U,
        bits: 0b00_101_11,
    },
    Opcode {
        major: Major::OpImm32,
        format: Format::I,
        bits: 0b00_110_11,
    },
    Opcode {
        major: Major::Store,
        format: Format::S,
        bits: 0b01_000_11,
    },
    Opcode {
        major: Major::Op,
        format: Format::R,
        bits: 0b01_100_11,
    },
    Opcode {
        major: Major::Lui,
        format: Format::U,
        bits: 0b01_101_11,
    },
    Opcode {
        major: Major::Branch,
        format: Format::B,
        bits: 0b11_000_11,
    },
    Opcode {
        major: Major::Jalr,
        format: Format::I,
        bits: 0b11_001_11,
    },
    Opcode {
        major: Major::Jal,
        format: Format::J,
        bits: 0b11_011_11,
    },
    Opcode {
        major: Major::System,
        format: Format::I,
        bits: 0b11_100_11,
    },
];

/// Find the registry entry for a 7-bit opcode pattern.
pub fn lookup(bits: u32) -> Result<&'static Opcode, DecodeError> {
    lookup_in(OPCODES, bits)
}

fn lookup_in(table: &[Opcode], bits: u32) -> Result<&Opcode, DecodeError> {
    let mut hits = table.iter().filter(|o| o.bits == bits);
    let first = hits.next().ok_or(DecodeError::UnknownOpcode { bits })?;
    let extra = hits.count();
    if extra != 0 {
        return Err(DecodeError::AmbiguousOpcode {
            bits,
            matches: extra + 1,
        });
    }
    Ok(first)
}
