// Errors raised while decoding or evaluating a transmission

use super::types::Operator;
use crate::bitwise::{CursorError, HexError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PacketError {
    #[error("Malformed hex input: {0}")]
    MalformedHex(#[from] HexError),

    #[error("Unexpected end of stream: requested {requested} bits, {available} available")]
    UnexpectedEndOfStream { requested: u32, available: usize },

    #[error("Invalid read width: {0} bits")]
    InvalidWidth(u32),

    #[error("Sub-packets consumed {actual} bits, header declared {declared}")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("Version {0} does not fit in 3 bits")]
    InvalidVersion(u8),

    #[error("Unimplemented packet type {0}")]
    UnimplementedPacketType(u8),

    #[error("Literal at bit {bit_offset} does not fit in 64 bits")]
    LiteralOverflow { bit_offset: usize },

    #[error("Arithmetic overflow evaluating {0}")]
    ArithmeticOverflow(Operator),

    #[error("Not enough operands for {0}")]
    MissingOperands(Operator),

    #[error("Packets nested deeper than {0} levels")]
    DepthLimitExceeded(usize),
}

impl From<CursorError> for PacketError {
    fn from(err: CursorError) -> Self {
        match err {
            CursorError::UnexpectedEndOfStream {
                requested,
                available,
            } => PacketError::UnexpectedEndOfStream {
                requested,
                available,
            },
            CursorError::InvalidWidth(width) => PacketError::InvalidWidth(width),
        }
    }
}

pub type Result<T> = std::result::Result<T, PacketError>;
