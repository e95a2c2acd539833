// A decoded transmission: hex text, the bytes it encodes, and the packet tree

use crate::bitwise::parse_hex;
use crate::packet::{DecoderConfig, Packet, PacketDecoder, Result};
use std::str::FromStr;

/// Result of decoding one hex-encoded transmission.
///
/// The tree is built once and only read afterwards; the version sum and the
/// evaluated value are computed independently from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Transmission {
    bytes: Vec<u8>,
    root: Packet,
    bits_used: usize,
}

impl Transmission {
    /// Decode hex text with the default configuration
    pub fn from_hex(text: &str) -> Result<Self> {
        Self::from_hex_with_config(text, DecoderConfig::default())
    }

    pub fn from_hex_with_config(text: &str, config: DecoderConfig) -> Result<Self> {
        let bytes = parse_hex(text)?;
        Self::from_bytes(bytes, config)
    }

    /// Decode an already unpacked byte buffer
    pub fn from_bytes(bytes: Vec<u8>, config: DecoderConfig) -> Result<Self> {
        let mut decoder = PacketDecoder::with_config(&bytes, config);
        let root = decoder.decode()?;
        let bits_used = decoder.bits_consumed();

        tracing::debug!(
            "Decoded transmission of {} bytes: {} packets, {} bits used",
            bytes.len(),
            root.packet_count(),
            bits_used
        );

        Ok(Self {
            bytes,
            root,
            bits_used,
        })
    }

    /// The outermost packet
    pub fn root(&self) -> &Packet {
        &self.root
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bits covered by the outermost packet
    pub fn bits_used(&self) -> usize {
        self.bits_used
    }

    /// Trailing bits after the outermost packet, left uninterpreted
    pub fn padding_bits(&self) -> usize {
        self.bytes.len() * 8 - self.bits_used
    }

    /// Sum of every packet's version field
    pub fn version_sum(&self) -> u64 {
        self.root.version_sum()
    }

    /// Value of the outermost packet
    pub fn evaluate(&self) -> Result<u64> {
        self.root.evaluate()
    }
}

impl FromStr for Transmission {
    type Err = crate::packet::PacketError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}
