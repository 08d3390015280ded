use crate::opcodes::Format;

/// Everything that can go wrong while decoding a single instruction word.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid bit range [{upper}:{lower}]")]
    InvalidRange { upper: u32, lower: u32 },
    #[error("{format}-type instruction {word:#010x} has no {field} field")]
    MissingField {
        field: &'static str,
        format: Format,
        word: u32,
    },
    #[error("no opcode matches bits {bits:#09b}")]
    UnknownOpcode { bits: u32 },
    #[error("{matches} opcodes match bits {bits:#09b}")]
    AmbiguousOpcode { bits: u32, matches: usize },
    #[error("unrecognized {table} encoding {value:#x} in {word:#010x}")]
    UnrecognizedEncoding {
        table: &'static str,
        value: u32,
        word: u32,
    },
}
