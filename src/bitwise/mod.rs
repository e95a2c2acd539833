// Bit-level input handling: hex text to bytes, bytes to bit fields

pub mod cursor;
pub mod hex;

pub use cursor::{BitCursor, CursorError, MAX_READ_WIDTH};
pub use hex::{parse_hex, HexError};
