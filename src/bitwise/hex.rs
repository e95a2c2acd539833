// Hex text decoding for transmission input
// Each pair of hex digits encodes one byte, no separators

use nom::{
    character::complete::satisfy,
    error::{Error, ErrorKind},
    IResult,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("Odd number of hex digits: {0}")]
    OddLength(usize),

    #[error("Invalid hex digit {found:?} at offset {offset}")]
    InvalidDigit { offset: usize, found: char },
}

pub type Result<T> = std::result::Result<T, HexError>;

/// Parse one hex digit into its nibble value
fn parse_hex_digit(input: &str) -> IResult<&str, u8> {
    let (rest, c) = satisfy(|c: char| c.is_ascii_hexdigit())(input)?;
    let nibble = c
        .to_digit(16)
        .ok_or_else(|| nom::Err::Error(Error::new(input, ErrorKind::HexDigit)))?;
    Ok((rest, nibble as u8))
}

/// Parse a single byte from two hex digits
fn parse_hex_byte(input: &str) -> IResult<&str, u8> {
    let (input, high) = parse_hex_digit(input)?;
    let (input, low) = parse_hex_digit(input)?;
    Ok((input, (high << 4) | low))
}

/// Decode hex text into bytes.
///
/// Digits are case-insensitive. Trailing whitespace (including the final
/// newline of an input file) is ignored; anything else that is not a hex
/// digit is rejected.
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let digits = text.trim_end();

    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength(digits.len()));
    }

    let mut bytes = Vec::with_capacity(digits.len() / 2);
    let mut input = digits;

    while !input.is_empty() {
        match parse_hex_byte(input) {
            Ok((rest, byte)) => {
                bytes.push(byte);
                input = rest;
            }
            Err(nom::Err::Error(err)) | Err(nom::Err::Failure(err)) => {
                return Err(invalid_digit(digits, err.input));
            }
            Err(nom::Err::Incomplete(_)) => return Err(HexError::OddLength(digits.len())),
        }
    }

    Ok(bytes)
}

/// Describe the character a failed parse stopped at
fn invalid_digit(digits: &str, rest: &str) -> HexError {
    match rest.chars().next() {
        Some(found) => HexError::InvalidDigit {
            offset: digits.len() - rest.len(),
            found,
        },
        // Ran out of input halfway through a byte
        None => HexError::OddLength(digits.len()),
    }
}
