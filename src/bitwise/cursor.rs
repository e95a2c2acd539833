// Bit-granular cursor over a byte buffer
// Bits are read most-significant first within each byte, in buffer order

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    #[error("Unexpected end of stream: requested {requested} bits, {available} available")]
    UnexpectedEndOfStream { requested: u32, available: usize },

    #[error("Invalid read width: {0} bits (must be 1-64)")]
    InvalidWidth(u32),
}

pub type Result<T> = std::result::Result<T, CursorError>;

/// Widest single read supported by [`BitCursor::read`]
pub const MAX_READ_WIDTH: u32 = 64;

/// Reads unsigned integers of arbitrary bit width from a byte buffer.
///
/// Bytes are loaded one at a time into a small accumulator; a read may drain
/// the accumulator and pull in further bytes within the same call. The read
/// position only ever moves forward.
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    data: &'a [u8],
    /// Index of the next byte to load
    offset: usize,
    /// Most recently loaded byte
    pending: u8,
    /// Number of unread low-order bits left in `pending` (0-8)
    pending_bits: u32,
    /// Total bits handed out since construction
    consumed: usize,
}

impl<'a> BitCursor<'a> {
    /// Create a cursor positioned at the first bit of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            pending: 0,
            pending_bits: 0,
            consumed: 0,
        }
    }

    /// Read the next `width` bits as an unsigned integer.
    ///
    /// The earliest bit read lands in the most significant position of the
    /// result. A read that cannot be satisfied in full fails without
    /// consuming anything.
    pub fn read(&mut self, width: u32) -> Result<u64> {
        if width == 0 || width > MAX_READ_WIDTH {
            return Err(CursorError::InvalidWidth(width));
        }

        let available = self.bits_remaining();
        if width as usize > available {
            return Err(CursorError::UnexpectedEndOfStream {
                requested: width,
                available,
            });
        }

        let mut result: u64 = 0;
        let mut needed = width;

        while needed > 0 {
            if self.pending_bits == 0 {
                self.pending = self.data.get(self.offset).copied().ok_or(
                    CursorError::UnexpectedEndOfStream {
                        requested: needed,
                        available: 0,
                    },
                )?;
                self.offset += 1;
                self.pending_bits = 8;
            }

            let take = needed.min(self.pending_bits);
            let shift = self.pending_bits - take;
            let mask = ((1u16 << take) - 1) as u8;
            let chunk = (self.pending >> shift) & mask;

            result = (result << take) | chunk as u64;
            self.pending_bits -= take;
            self.consumed += take as usize;
            needed -= take;
        }

        Ok(result)
    }

    /// Total number of bits read since construction
    pub fn bits_consumed(&self) -> usize {
        self.consumed
    }

    /// Number of bits that can still be read
    pub fn bits_remaining(&self) -> usize {
        (self.data.len() - self.offset) * 8 + self.pending_bits as usize
    }
}
