// Version field accumulation

use super::types::Packet;

/// Sum the version field of every packet in the tree
pub fn version_sum(packet: &Packet) -> u64 {
    packet.iter().map(|p| p.version() as u64).sum()
}

impl Packet {
    pub fn version_sum(&self) -> u64 {
        version_sum(self)
    }
}
