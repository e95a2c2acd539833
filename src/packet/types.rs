// Packet tree types

use super::error::{PacketError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opcode carried by literal value packets
pub const LITERAL_OPCODE: u8 = 4;

/// Largest version a 3-bit version field can carry
pub const MAX_VERSION: u8 = 7;

/// The seven operator opcodes. Opcode 4 is reserved for literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Operator {
    Sum = 0,
    Product = 1,
    Minimum = 2,
    Maximum = 3,
    GreaterThan = 5,
    LessThan = 6,
    EqualTo = 7,
}

impl Operator {
    pub fn opcode(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::Sum => "sum",
            Operator::Product => "product",
            Operator::Minimum => "minimum",
            Operator::Maximum => "maximum",
            Operator::GreaterThan => "greater_than",
            Operator::LessThan => "less_than",
            Operator::EqualTo => "equal_to",
        }
    }
}

impl TryFrom<u8> for Operator {
    type Error = PacketError;

    fn try_from(opcode: u8) -> Result<Self> {
        match opcode {
            0 => Ok(Operator::Sum),
            1 => Ok(Operator::Product),
            2 => Ok(Operator::Minimum),
            3 => Ok(Operator::Maximum),
            5 => Ok(Operator::GreaterThan),
            6 => Ok(Operator::LessThan),
            7 => Ok(Operator::EqualTo),
            other => Err(PacketError::UnimplementedPacketType(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One node of a decoded transmission.
///
/// Operators own their children outright; child order matters for the
/// comparison operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", try_from = "RawPacket")]
pub enum Packet {
    Literal {
        version: u8,
        value: u64,
    },
    Operator {
        version: u8,
        op: Operator,
        children: Vec<Packet>,
    },
}

/// Deserialized form of a packet before its version field is checked
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RawPacket {
    Literal {
        version: u8,
        value: u64,
    },
    Operator {
        version: u8,
        op: Operator,
        children: Vec<Packet>,
    },
}

impl TryFrom<RawPacket> for Packet {
    type Error = PacketError;

    fn try_from(raw: RawPacket) -> Result<Self> {
        match raw {
            RawPacket::Literal { version, value } => Packet::literal(version, value),
            RawPacket::Operator {
                version,
                op,
                children,
            } => Ok(Packet::Operator {
                version: check_version(version)?,
                op,
                children,
            }),
        }
    }
}

fn check_version(version: u8) -> Result<u8> {
    if version > MAX_VERSION {
        return Err(PacketError::InvalidVersion(version));
    }
    Ok(version)
}

impl Packet {
    pub fn literal(version: u8, value: u64) -> Result<Self> {
        Ok(Packet::Literal {
            version: check_version(version)?,
            value,
        })
    }

    /// Build an operator packet from a raw opcode
    pub fn operator(version: u8, opcode: u8, children: Vec<Packet>) -> Result<Self> {
        Ok(Packet::Operator {
            version: check_version(version)?,
            op: Operator::try_from(opcode)?,
            children,
        })
    }

    pub fn version(&self) -> u8 {
        match self {
            Packet::Literal { version, .. } | Packet::Operator { version, .. } => *version,
        }
    }

    pub fn opcode(&self) -> u8 {
        match self {
            Packet::Literal { .. } => LITERAL_OPCODE,
            Packet::Operator { op, .. } => op.opcode(),
        }
    }

    /// Child packets in stream order (empty for literals)
    pub fn children(&self) -> &[Packet] {
        match self {
            Packet::Literal { .. } => &[],
            Packet::Operator { children, .. } => children,
        }
    }

    /// Walk the tree in pre-order, visiting every packet once
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Number of packets in the tree, this one included
    pub fn packet_count(&self) -> usize {
        self.iter().count()
    }

    /// Nesting depth; a lone literal has depth 0
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Pre-order iterator over a packet tree
pub struct Iter<'a> {
    stack: Vec<&'a Packet>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Packet;

    fn next(&mut self) -> Option<Self::Item> {
        let packet = self.stack.pop()?;
        self.stack.extend(packet.children().iter().rev());
        Some(packet)
    }
}

impl<'a> IntoIterator for &'a Packet {
    type Item = &'a Packet;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
