// Recursive-descent decoder turning a bit stream into a packet tree

use super::error::{PacketError, Result};
use super::types::{Operator, Packet, LITERAL_OPCODE};
use crate::bitwise::BitCursor;
use serde::{Deserialize, Serialize};

const VERSION_BITS: u32 = 3;
const OPCODE_BITS: u32 = 3;
const LITERAL_GROUP_BITS: u32 = 5;
const LITERAL_CONTINUE: u64 = 0b1_0000;
const LITERAL_NIBBLE: u64 = 0b0_1111;
const LENGTH_TYPE_BITS: u32 = 1;
const CHILD_COUNT_BITS: u32 = 11;
const TOTAL_LENGTH_BITS: u32 = 15;

/// Decoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Deepest nesting level accepted; the outermost packet is level 0
    pub max_depth: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nesting limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// How an operator packet delimits its children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LengthType {
    /// Children span exactly this many bits
    TotalBits(usize),
    /// Exactly this many children follow
    Count(usize),
}

/// Decodes one outermost packet, and everything nested in it, from a cursor
pub struct PacketDecoder<'a> {
    cursor: BitCursor<'a>,
    config: DecoderConfig,
}

impl<'a> PacketDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_config(data, DecoderConfig::default())
    }

    pub fn with_config(data: &'a [u8], config: DecoderConfig) -> Self {
        Self {
            cursor: BitCursor::new(data),
            config,
        }
    }

    /// Bits consumed so far
    pub fn bits_consumed(&self) -> usize {
        self.cursor.bits_consumed()
    }

    /// Decode the outermost packet.
    ///
    /// The cursor is left just past the packet's last bit; whatever follows
    /// is padding and is not interpreted.
    pub fn decode(&mut self) -> Result<Packet> {
        let packet = self.decode_packet(0)?;
        tracing::debug!(
            "Decoded {} packets in {} bits, ignoring {} padding bits",
            packet.packet_count(),
            self.cursor.bits_consumed(),
            self.cursor.bits_remaining()
        );
        Ok(packet)
    }

    fn read(&mut self, width: u32) -> Result<u64> {
        Ok(self.cursor.read(width)?)
    }

    fn decode_packet(&mut self, depth: usize) -> Result<Packet> {
        if depth > self.config.max_depth {
            return Err(PacketError::DepthLimitExceeded(self.config.max_depth));
        }

        let start = self.cursor.bits_consumed();
        let version = self.read(VERSION_BITS)? as u8;
        let opcode = self.read(OPCODE_BITS)? as u8;
        tracing::trace!(
            "Packet at bit {}: version={} opcode={} depth={}",
            start,
            version,
            opcode,
            depth
        );

        if opcode == LITERAL_OPCODE {
            let value = self.decode_literal_value()?;
            return Ok(Packet::Literal { version, value });
        }

        let op = Operator::try_from(opcode)?;
        let children = match self.decode_length_type()? {
            LengthType::Count(count) => self.decode_children_by_count(count, depth)?,
            LengthType::TotalBits(total) => self.decode_children_by_length(total, depth)?,
        };

        Ok(Packet::Operator {
            version,
            op,
            children,
        })
    }

    /// Accumulate 4-bit groups until one arrives with its continuation bit clear
    fn decode_literal_value(&mut self) -> Result<u64> {
        let start = self.cursor.bits_consumed();
        let mut value: u64 = 0;

        loop {
            let group = self.read(LITERAL_GROUP_BITS)?;

            if value >> 60 != 0 {
                return Err(PacketError::LiteralOverflow { bit_offset: start });
            }
            value = (value << 4) | (group & LITERAL_NIBBLE);

            if group & LITERAL_CONTINUE == 0 {
                return Ok(value);
            }
        }
    }

    fn decode_length_type(&mut self) -> Result<LengthType> {
        if self.read(LENGTH_TYPE_BITS)? == 1 {
            Ok(LengthType::Count(self.read(CHILD_COUNT_BITS)? as usize))
        } else {
            Ok(LengthType::TotalBits(self.read(TOTAL_LENGTH_BITS)? as usize))
        }
    }

    fn decode_children_by_count(&mut self, count: usize, depth: usize) -> Result<Vec<Packet>> {
        tracing::debug!("Operator with {} sub-packets", count);

        let mut children = Vec::with_capacity(count);
        for _ in 0..count {
            children.push(self.decode_packet(depth + 1)?);
        }
        Ok(children)
    }

    fn decode_children_by_length(&mut self, total: usize, depth: usize) -> Result<Vec<Packet>> {
        tracing::debug!("Operator with {} bits of sub-packets", total);

        let start = self.cursor.bits_consumed();
        let mut children = Vec::new();
        while self.cursor.bits_consumed() - start < total {
            children.push(self.decode_packet(depth + 1)?);
        }

        let actual = self.cursor.bits_consumed() - start;
        if actual != total {
            return Err(PacketError::LengthMismatch {
                declared: total,
                actual,
            });
        }
        Ok(children)
    }
}

/// Decode the outermost packet of `data` with the default configuration
pub fn decode(data: &[u8]) -> Result<Packet> {
    PacketDecoder::new(data).decode()
}

/// Decode the outermost packet of `data`
pub fn decode_with_config(data: &[u8], config: DecoderConfig) -> Result<Packet> {
    PacketDecoder::with_config(data, config).decode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitwise::parse_hex;

    /// Pack a string of '0'/'1' characters into bytes, zero-padding the tail.
    /// Spaces are ignored so fields can be grouped.
    fn bits(pattern: &str) -> Vec<u8> {
        let digits: Vec<u8> = pattern
            .bytes()
            .filter(|b| *b != b' ')
            .map(|b| b - b'0')
            .collect();
        digits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |byte, (i, &bit)| byte | (bit << (7 - i)))
            })
            .collect()
    }

    fn decode_hex(hex: &str) -> Result<Packet> {
        decode(&parse_hex(hex)?)
    }

    #[test]
    fn test_literal() {
        let packet = decode_hex("D2FE28").unwrap();
        assert_eq!(packet, Packet::literal(6, 2021).unwrap());
    }

    #[test]
    fn test_literal_stops_at_first_final_group() {
        // version 2, literal, groups 1_0001 0_0010, then a stray group that must not be read
        let data = bits("010 100 10001 00010 11111");
        let mut decoder = PacketDecoder::new(&data);
        assert_eq!(decoder.decode().unwrap(), Packet::literal(2, 0x12).unwrap());
        assert_eq!(decoder.bits_consumed(), 16);
    }

    #[test]
    fn test_literal_full_width() {
        let mut pattern = String::from("000 100");
        for _ in 0..15 {
            pattern.push_str(" 11111");
        }
        pattern.push_str(" 01111");
        let packet = decode(&bits(&pattern)).unwrap();
        assert_eq!(packet, Packet::literal(0, u64::MAX).unwrap());
    }

    #[test]
    fn test_literal_overflow() {
        let mut pattern = String::from("000 100");
        for _ in 0..16 {
            pattern.push_str(" 10001");
        }
        pattern.push_str(" 00001");
        assert_eq!(
            decode(&bits(&pattern)),
            Err(PacketError::LiteralOverflow { bit_offset: 6 })
        );
    }

    #[test]
    fn test_literal_leading_zero_nibbles_fit() {
        let mut pattern = String::from("000 100");
        for _ in 0..16 {
            pattern.push_str(" 10000");
        }
        pattern.push_str(" 00111");
        assert_eq!(decode(&bits(&pattern)).unwrap(), Packet::literal(0, 7).unwrap());
    }

    #[test]
    fn test_operator_by_total_length() {
        let packet = decode_hex("38006F45291200").unwrap();
        assert_eq!(
            packet,
            Packet::Operator {
                version: 1,
                op: Operator::LessThan,
                children: vec![Packet::literal(6, 10).unwrap(), Packet::literal(2, 20).unwrap()],
            }
        );
    }

    #[test]
    fn test_total_length_lands_on_boundary() {
        let data = parse_hex("38006F45291200").unwrap();
        let mut decoder = PacketDecoder::new(&data);
        decoder.decode().unwrap();
        // 22 header bits followed by exactly the declared 27 bits of children
        assert_eq!(decoder.bits_consumed(), 22 + 27);
    }

    #[test]
    fn test_operator_by_count() {
        let packet = decode_hex("EE00D40C823060").unwrap();
        assert_eq!(
            packet,
            Packet::Operator {
                version: 7,
                op: Operator::Maximum,
                children: vec![
                    Packet::literal(2, 1).unwrap(),
                    Packet::literal(4, 2).unwrap(),
                    Packet::literal(1, 3).unwrap(),
                ],
            }
        );
    }

    #[test]
    fn test_count_produces_exact_children() {
        // Count of 2 followed by three literals: the third is left unread
        let data = bits("000 000 1 00000000010 000 100 00001 000 100 00010 000 100 00011");
        let mut decoder = PacketDecoder::new(&data);
        let packet = decoder.decode().unwrap();
        assert_eq!(packet.children().len(), 2);
        assert_eq!(decoder.bits_consumed(), 18 + 22);
    }

    #[test]
    fn test_nested_operators() {
        let packet = decode_hex("8A004A801A8002F478").unwrap();
        assert_eq!(packet.depth(), 3);
        assert_eq!(packet.packet_count(), 4);
        let versions: Vec<u8> = packet.iter().map(Packet::version).collect();
        assert_eq!(versions, vec![4, 1, 5, 6]);
    }

    #[test]
    fn test_length_overshoot() {
        // Declares 26 bits but the children take 11 + 16 = 27
        let data = bits("001 110 0 000000000011010 110 100 01010 010 100 10001 00100");
        assert_eq!(
            decode(&data),
            Err(PacketError::LengthMismatch {
                declared: 26,
                actual: 27
            })
        );
    }

    #[test]
    fn test_empty_operator() {
        let data = bits("011 000 0 000000000000000");
        assert_eq!(
            decode(&data).unwrap(),
            Packet::Operator {
                version: 3,
                op: Operator::Sum,
                children: vec![],
            }
        );
    }

    #[test]
    fn test_depth_limit() {
        // Four nested single-child operators around a literal
        let pattern = "000 000 1 00000000001 ".repeat(4) + "000 100 00001";
        let data = bits(&pattern);

        let config = DecoderConfig::new().with_max_depth(3);
        assert_eq!(
            decode_with_config(&data, config),
            Err(PacketError::DepthLimitExceeded(3))
        );

        let config = DecoderConfig::new().with_max_depth(4);
        assert_eq!(decode_with_config(&data, config).unwrap().depth(), 4);
    }

    #[test]
    fn test_truncated_stream() {
        assert_eq!(
            decode(&[]),
            Err(PacketError::UnexpectedEndOfStream {
                requested: 3,
                available: 0
            })
        );

        // D2FE28 without its last byte stops inside the third literal group
        assert_eq!(
            decode_hex("D2FE"),
            Err(PacketError::UnexpectedEndOfStream {
                requested: 5,
                available: 0
            })
        );
    }

    #[test]
    fn test_malformed_hex() {
        assert!(matches!(
            decode_hex("D2FE2"),
            Err(PacketError::MalformedHex(_))
        ));
    }

    #[test]
    fn test_default_config() {
        assert_eq!(DecoderConfig::default().max_depth, 256);
        let config: DecoderConfig = serde_json::from_str(r#"{"max_depth": 8}"#).unwrap();
        assert_eq!(config, DecoderConfig::new().with_max_depth(8));
    }
}
