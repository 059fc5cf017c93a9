//! Byte-oriented gap buffer backing the document.
//!
//! The backing store is laid out as
//!
//! ```text
//!  [ prefix | gap (unused) | suffix ]
//!    0..gap_start  gap_start..gap_end  gap_end..capacity
//! ```
//!
//! All public positions are logical positions (the text with the gap removed).
//! Capacity never shrinks, and every growth at least doubles it.

use super::error::{ModelError, Result};
use std::ops::Range;

/// Capacity given to a fresh buffer when the caller has no preference.
pub const DEFAULT_CAPACITY: usize = 4096;

#[derive(Debug, Clone)]
pub struct GapBuffer {
    /// Backing store. `buf.len()` is the allocated capacity.
    buf: Vec<u8>,
    /// First unused byte; also the length of the filled prefix.
    gap_start: usize,
    /// First byte of the filled suffix.
    gap_end: usize,
}

impl GapBuffer {
    /// Create an empty buffer with the given capacity, all of it gap.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let capacity = capacity.max(1);
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| ModelError::OutOfMemory {
                requested: capacity,
            })?;
        buf.resize(capacity, 0);
        Ok(Self {
            buf,
            gap_start: 0,
            gap_end: capacity,
        })
    }

    pub fn new() -> Result<Self> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Build a buffer holding `content`, starting from `initial_capacity` and
    /// doubling until the content fits with a non-empty gap left over.
    pub fn from_bytes(content: &[u8], initial_capacity: usize) -> Result<Self> {
        let mut capacity = initial_capacity.max(1);
        while capacity <= content.len() {
            capacity = capacity
                .checked_mul(2)
                .ok_or(ModelError::OutOfMemory {
                    requested: usize::MAX,
                })?;
        }
        let mut buffer = Self::with_capacity(capacity)?;
        for &byte in content {
            buffer.append(byte)?;
        }
        Ok(buffer)
    }

    /// Logical length of the document.
    pub fn len(&self) -> usize {
        self.buf.len() - self.gap_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total allocated capacity (prefix + gap + suffix).
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Byte at logical position `pos`, or `None` past the end.
    pub fn byte_at(&self, pos: usize) -> Option<u8> {
        if pos >= self.len() {
            return None;
        }
        Some(self.buf[self.physical(pos)])
    }

    fn physical(&self, pos: usize) -> usize {
        if pos < self.gap_start {
            pos
        } else {
            pos + self.gap_len()
        }
    }

    /// Iterate over every logical byte.
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.buf[..self.gap_start]
            .iter()
            .chain(self.buf[self.gap_end..].iter())
            .copied()
    }

    /// Iterate over the logical bytes in `range`, clamped to the document.
    pub fn range(&self, range: Range<usize>) -> impl Iterator<Item = u8> + '_ {
        let len = self.len();
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);
        self.bytes().skip(start).take(end - start)
    }

    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(&self.buf[..self.gap_start]);
        out.extend_from_slice(&self.buf[self.gap_end..]);
        out
    }

    /// Slide the gap so that it starts at logical position `pos`.
    fn move_gap_to(&mut self, pos: usize) {
        let pos = pos.min(self.len());
        if pos < self.gap_start {
            let shift = self.gap_start - pos;
            self.buf
                .copy_within(pos..self.gap_start, self.gap_end - shift);
            self.gap_start = pos;
            self.gap_end -= shift;
        } else if pos > self.gap_start {
            let shift = pos - self.gap_start;
            self.buf
                .copy_within(self.gap_end..self.gap_end + shift, self.gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
        }
    }

    /// Double the allocated capacity. The added bytes all join the gap and the
    /// suffix moves to the new end of storage.
    ///
    /// The reservation happens before anything is touched, so on failure the
    /// buffer is exactly as it was.
    pub fn grow(&mut self) -> Result<()> {
        let old_capacity = self.buf.len();
        let new_capacity = old_capacity
            .checked_mul(2)
            .ok_or(ModelError::OutOfMemory {
                requested: usize::MAX,
            })?;
        self.buf
            .try_reserve_exact(new_capacity - old_capacity)
            .map_err(|_| ModelError::OutOfMemory {
                requested: new_capacity,
            })?;
        self.buf.resize(new_capacity, 0);

        let suffix_len = old_capacity - self.gap_end;
        let new_gap_end = new_capacity - suffix_len;
        self.buf.copy_within(self.gap_end..old_capacity, new_gap_end);
        self.gap_end = new_gap_end;

        tracing::debug!(
            "grew gap buffer from {} to {} bytes",
            old_capacity,
            new_capacity
        );
        Ok(())
    }

    /// Insert `byte` at logical position `pos` (clamped to the end).
    pub fn insert_at(&mut self, pos: usize, byte: u8) -> Result<()> {
        if self.gap_len() == 0 {
            self.grow()?;
        }
        self.move_gap_to(pos);
        self.buf[self.gap_start] = byte;
        self.gap_start += 1;
        Ok(())
    }

    /// Append `byte` at the end of the document.
    pub fn append(&mut self, byte: u8) -> Result<()> {
        self.insert_at(self.len(), byte)
    }

    /// Remove the single byte at `pos`. Out-of-range positions are ignored.
    pub fn remove(&mut self, pos: usize) {
        if pos >= self.len() {
            return;
        }
        self.move_gap_to(pos);
        self.gap_end += 1;
    }

    /// Remove the inclusive range `[start, end]`.
    ///
    /// `end - start + 1` bytes go, except when `end` is the document end
    /// (`len()`): there is no byte there, so only `end - start` bytes are
    /// removed. Returns the number of bytes removed.
    pub fn delete_range(&mut self, start: usize, end: usize) -> usize {
        let len = self.len();
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        let start = start.min(len);
        let stop = if end >= len { len } else { end + 1 };
        let count = stop - start;
        if count == 0 {
            return 0;
        }
        self.move_gap_to(start);
        self.gap_end += count;
        count
    }

    /// Index of the first byte equal to `needle` at or after `from`.
    pub fn find_from(&self, from: usize, needle: u8) -> Option<usize> {
        self.range(from..self.len())
            .position(|b| b == needle)
            .map(|offset| from + offset)
    }
}
