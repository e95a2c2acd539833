// Transmission input: hex files on disk and built-in examples

use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown example {requested} (have 1-{available})")]
    UnknownExample { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, InputError>;

/// A known transmission with the results it decodes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub hex: &'static str,
    pub version_sum: u64,
    pub value: u64,
}

impl Example {
    const fn new(hex: &'static str, version_sum: u64, value: u64) -> Self {
        Self {
            hex,
            version_sum,
            value,
        }
    }
}

/// Built-in example transmissions, selected by 1-based index
pub const EXAMPLES: &[Example] = &[
    Example::new("8A004A801A8002F478", 16, 15),
    Example::new("620080001611562C8802118E34", 12, 46),
    Example::new("C0015000016115A2E0802F182340", 23, 46),
    Example::new("A0016C880162017C3686B18A3D4780", 31, 54),
    Example::new("D2FE28", 6, 2021),
    Example::new("38006F45291200", 9, 1),
    Example::new("EE00D40C823060", 14, 3),
    Example::new("C200B40A82", 14, 3),
    Example::new("04005AC33890", 8, 54),
    Example::new("880086C3E88112", 15, 7),
    Example::new("CE00C43D881120", 11, 9),
    Example::new("D8005AC2A8F0", 13, 1),
    Example::new("F600BC2D8F", 19, 0),
    Example::new("9C005AC2F8F0", 16, 0),
    Example::new("9C0141080250320F1802104A08", 20, 1),
];

/// Look up a built-in example by 1-based index
pub fn example(number: usize) -> Result<&'static Example> {
    number
        .checked_sub(1)
        .and_then(|index| EXAMPLES.get(index))
        .ok_or(InputError::UnknownExample {
            requested: number,
            available: EXAMPLES.len(),
        })
}

/// Read the hex text of a transmission file
pub fn load_hex_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    tracing::debug!("Read {} characters from {}", text.len(), path.display());
    Ok(text)
}
