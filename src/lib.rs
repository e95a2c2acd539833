// TRANSMISSION-RS: decoder and evaluator for bit-packed transmission packets
// Copyright 2024 - Licensed under GPLv3

pub mod bitwise;
pub mod cli;
pub mod formats;
pub mod packet;
pub mod transmission;

// Re-export commonly used types
pub use bitwise::{parse_hex, BitCursor, CursorError, HexError};
pub use formats::{example, load_hex_file, render_tree, InputError, EXAMPLES};
pub use packet::{
    decode, decode_with_config, evaluate, version_sum, DecoderConfig, Operator, Packet,
    PacketDecoder, PacketError,
};
pub use transmission::Transmission;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
