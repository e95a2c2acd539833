// Transmission packet decoding and evaluation

pub mod decoder;
pub mod error;
pub mod eval;
pub mod types;
pub mod versions;

pub use decoder::{decode, decode_with_config, DecoderConfig, PacketDecoder};
pub use error::{PacketError, Result};
pub use eval::evaluate;
pub use types::{Operator, Packet, LITERAL_OPCODE, MAX_VERSION};
pub use versions::version_sum;
