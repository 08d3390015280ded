use std::fmt;

use serde::Serialize;

use crate::bits::field;
use crate::decoder::{self, Decoder, Instruction};
use crate::error::DecodeError;
use crate::opcodes::{Format, Major};

/// RV32I base instruction names reachable from the resolvers below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mnemonic {
    Add,
    Sub,
    Sll,
    Slt,
    Sltu,
    Xor,
    Srl,
    Sra,
    Or,
    And,
    Jalr,
    Addi,
    Slli,
    Slti,
    Sltiu,
    Xori,
    Srli,
    Srai,
    Ori,
    Andi,
    Fence,
    FenceI,
    Ecall,
    Ebreak,
    Csrrw,
    Csrrs,
    Csrrc,
    Csrrwi,
    Csrrsi,
    Csrrci,
    Sb,
    Sh,
    Sw,
    Beq,
    Bne,
    Blt,
    Bge,
    Bltu,
    Bgeu,
    Auipc,
    Lui,
    Jal,
}

impl Mnemonic {
    pub fn name(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Add => "ADD",
            Sub => "SUB",
            Sll => "SLL",
            Slt => "SLT",
            Sltu => "SLTU",
            Xor => "XOR",
            Srl => "SRL",
            Sra => "SRA",
            Or => "OR",
            And => "AND",
            Jalr => "JALR",
            Addi => "ADDI",
            Slli => "SLLI",
            Slti => "SLTI",
            Sltiu => "SLTIU",
            Xori => "XORI",
            Srli => "SRLI",
            Srai => "SRAI",
            Ori => "ORI",
            Andi => "ANDI",
            Fence => "FENCE",
            FenceI => "FENCE_I",
            Ecall => "ECALL",
            Ebreak => "EBREAK",
            Csrrw => "CSRRW",
            Csrrs => "CSRRS",
            Csrrc => "CSRRC",
            Csrrwi => "CSRRWI",
            Csrrsi => "CSRRSI",
            Csrrci => "CSRRCI",
            Sb => "SB",
            Sh => "SH",
            Sw => "SW",
            Beq => "BEQ",
            Bne => "BNE",
            Blt => "BLT",
            Bge => "BGE",
            Bltu => "BLTU",
            Bgeu => "BGEU",
            Auipc => "AUIPC",
            Lui => "LUI",
            Jal => "JAL",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const fn rkey(func7: u32, func3: u32) -> u32 {
    (func7 << 3) | func3
}

// OP table keyed by (func7 << 3) | func3
const R_TABLE: &[(u32, Mnemonic)] = &[
    (rkey(0b0000000, 0b000), Mnemonic::Add),
    (rkey(0b0100000, 0b000), Mnemonic::Sub),
    (rkey(0b0000000, 0b001), Mnemonic::Sll),
    (rkey(0b0000000, 0b010), Mnemonic::Slt),
    (rkey(0b0000000, 0b011), Mnemonic::Sltu),
    (rkey(0b0000000, 0b100), Mnemonic::Xor),
    (rkey(0b0000000, 0b101), Mnemonic::Srl),
    (rkey(0b0100000, 0b101), Mnemonic::Sra),
    (rkey(0b0000000, 0b110), Mnemonic::Or),
    (rkey(0b0000000, 0b111), Mnemonic::And),
];

const BRANCH_TABLE: &[(u32, Mnemonic)] = &[
    (0b000, Mnemonic::Beq),
    (0b001, Mnemonic::Bne),
    (0b100, Mnemonic::Blt),
    (0b101, Mnemonic::Bge),
    (0b110, Mnemonic::Bltu),
    (0b111, Mnemonic::Bgeu),
];

fn unrecognized(i: &Instruction, table: &'static str, value: u32) -> DecodeError {
    DecodeError::UnrecognizedEncoding {
        table,
        value,
        word: i.word(),
    }
}

fn find(
    table: &[(u32, Mnemonic)],
    i: &Instruction,
    name: &'static str,
    key: u32,
) -> Result<Mnemonic, DecodeError> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, m)| m)
        .ok_or_else(|| unrecognized(i, name, key))
}

/// Resolve the mnemonic for a decoded word, dispatching on its format.
pub fn resolve(i: &Instruction) -> Result<Mnemonic, DecodeError> {
    match i.format() {
        Format::R => resolve_r(i),
        Format::I => resolve_i(i),
        Format::S => resolve_s(i),
        Format::B => resolve_b(i),
        Format::U => resolve_u(i),
        Format::J => resolve_j(i),
    }
}

fn resolve_r(i: &Instruction) -> Result<Mnemonic, DecodeError> {
    if i.major() != Major::Op {
        return Err(unrecognized(i, "R-type major", i.opcode().bits));
    }
    find(R_TABLE, i, "OP func7/func3", rkey(i.func7(), i.func3()))
}

fn resolve_i(i: &Instruction) -> Result<Mnemonic, DecodeError> {
    let f3 = i.func3();
    match i.major() {
        Major::Jalr => Ok(Mnemonic::Jalr),
        Major::OpImm => match f3 {
            0b000 => Ok(Mnemonic::Addi),
            0b001 => Ok(Mnemonic::Slli),
            0b010 => Ok(Mnemonic::Slti),
            0b011 => Ok(Mnemonic::Sltiu),
            0b100 => Ok(Mnemonic::Xori),
            0b101 => match field(i.word(), 31, 25) {
                0 => Ok(Mnemonic::Srli),
                0b0100000 => Ok(Mnemonic::Srai),
                other => Err(unrecognized(i, "SRLI/SRAI imm[11:5]", other)),
            },
            0b110 => Ok(Mnemonic::Ori),
            0b111 => Ok(Mnemonic::Andi),
            _ => Err(unrecognized(i, "OP_IMM func3", f3)),
        },
        Major::MiscMem => match f3 {
            0b000 => Ok(Mnemonic::Fence),
            0b001 => Ok(Mnemonic::FenceI),
            _ => Err(unrecognized(i, "MISC_MEM func3", f3)),
        },
        Major::System => match f3 {
            0b000 => match field(i.word(), 31, 20) {
                0 => Ok(Mnemonic::Ecall),
                1 => Ok(Mnemonic::Ebreak),
                other => Err(unrecognized(i, "ECALL/EBREAK imm", other)),
            },
            0b001 => Ok(Mnemonic::Csrrw),
            0b010 => Ok(Mnemonic::Csrrs),
            0b011 => Ok(Mnemonic::Csrrc),
            0b101 => Ok(Mnemonic::Csrrwi),
            0b110 => Ok(Mnemonic::Csrrsi),
            0b111 => Ok(Mnemonic::Csrrci),
            _ => Err(unrecognized(i, "SYSTEM func3", f3)),
        },
        // LOAD and OP_IMM_32 are registered but have no resolver rows.
        _ => Err(unrecognized(i, "I-type major", i.opcode().bits)),
    }
}

fn resolve_s(i: &Instruction) -> Result<Mnemonic, DecodeError> {
    match i.func3() {
        0b000 => Ok(Mnemonic::Sb),
        0b001 => Ok(Mnemonic::Sh),
        0b010 => Ok(Mnemonic::Sw),
        f3 => Err(unrecognized(i, "STORE func3", f3)),
    }
}

fn resolve_b(i: &Instruction) -> Result<Mnemonic, DecodeError> {
    if i.major() != Major::Branch {
        return Err(unrecognized(i, "B-type major", i.opcode().bits));
    }
    find(BRANCH_TABLE, i, "BRANCH func3", i.func3())
}

fn resolve_u(i: &Instruction) -> Result<Mnemonic, DecodeError> {
    match i.major() {
        Major::Auipc => Ok(Mnemonic::Auipc),
        Major::Lui => Ok(Mnemonic::Lui),
        _ => Err(unrecognized(i, "U-type major", i.opcode().bits)),
    }
}

fn resolve_j(i: &Instruction) -> Result<Mnemonic, DecodeError> {
    match i.major() {
        Major::Jal => Ok(Mnemonic::Jal),
        _ => Err(unrecognized(i, "J-type major", i.opcode().bits)),
    }
}

/// RV32I base decoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct Rv32iDecoder;

impl Rv32iDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for Rv32iDecoder {
    fn decode(&self, raw32: u32) -> Result<Instruction, DecodeError> {
        decoder::decode(raw32)
    }
}
