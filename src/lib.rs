pub mod bits;
pub mod decoder;
pub mod disasm;
pub mod error;
pub mod opcodes;

pub mod isa {
    pub mod rv32i; // RV32I base integer ISA
}

pub use bits::{extract, sign_extend};
pub use decoder::{decode, Decoder, Fields, Instruction};
pub use disasm::{render, DecodedView};
pub use error::DecodeError;
pub use isa::rv32i::{Mnemonic, Rv32iDecoder};
pub use opcodes::{lookup, Format, Major, Opcode, OPCODES};
