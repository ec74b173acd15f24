use crate::error::{Result, TscbError};
use crate::ext::io_ext::{ReadExt, SeekExt};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};

/// Computes the absolute target of a self-relative offset.
///
/// A self-relative offset is added to the absolute position of the field that stores it,
/// not to the position after the field.
pub fn resolve(field_pos: u64, offset: i32) -> i64 {
    signed(field_pos).saturating_add(i64::from(offset))
}

fn signed(pos: u64) -> i64 {
    i64::try_from(pos).unwrap_or(i64::MAX)
}

/// A seekable, position-tracked big-endian reader over a TSCB input.
///
/// `ByteCursor` owns its source for the duration of a decode. Every read is checked
/// against the length measured at construction, so short input is reported as
/// [`TscbError::TruncatedInput`] and a bad seek as [`TscbError::OutOfRange`] instead of
/// surfacing as a generic I/O error.
#[derive(Debug)]
pub struct ByteCursor<R> {
    inner: R,
    pos: u64,
    len: u64,
}

impl<R: Read + Seek> ByteCursor<R> {
    /// Wraps `inner`, measuring its length and rewinding it to the start.
    pub fn new(mut inner: R) -> Result<Self> {
        let len = inner.measure_len()?;
        inner.seek(SeekFrom::Start(0))?;
        Ok(Self { inner, pos: 0, len })
    }

    /// Current absolute byte offset.
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Total length of the input in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes left between the current position and the end of input.
    pub fn remaining(&self) -> u64 {
        self.len.saturating_sub(self.pos)
    }

    /// Fails with [`TscbError::TruncatedInput`] unless `needed` bytes remain.
    pub fn ensure(&self, needed: u64) -> Result<()> {
        let available = self.remaining();
        if needed > available {
            return Err(TscbError::TruncatedInput {
                offset: self.pos,
                needed,
                available,
            });
        }
        Ok(())
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.ensure(4)?;
        let value = self.inner.read_i32::<BigEndian>()?;
        self.pos += 4;
        Ok(value)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.ensure(4)?;
        let value = self.inner.read_u32::<BigEndian>()?;
        self.pos += 4;
        Ok(value)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        self.ensure(4)?;
        let value = self.inner.read_f32::<BigEndian>()?;
        self.pos += 4;
        Ok(value)
    }

    /// Reads `N` consecutive big-endian `f32` values.
    pub fn read_f32_array<const N: usize>(&mut self) -> Result<[f32; N]> {
        self.ensure(4 * N as u64)?;
        let mut values = [0f32; N];
        self.inner.read_f32_into::<BigEndian>(&mut values)?;
        self.pos += 4 * N as u64;
        Ok(values)
    }

    /// Reads `N` consecutive big-endian `i32` values.
    pub fn read_i32_array<const N: usize>(&mut self) -> Result<[i32; N]> {
        self.ensure(4 * N as u64)?;
        let mut values = [0i32; N];
        self.inner.read_i32_into::<BigEndian>(&mut values)?;
        self.pos += 4 * N as u64;
        Ok(values)
    }

    /// Reads `count` big-endian `i32` values.
    ///
    /// The whole array is bounds-checked before anything is allocated, so a corrupt
    /// count cannot trigger a huge allocation.
    pub fn read_i32_vec(&mut self, count: u32) -> Result<Vec<i32>> {
        let needed = 4 * u64::from(count);
        self.ensure(needed)?;
        let mut values = vec![0i32; count as usize];
        self.inner.read_i32_into::<BigEndian>(&mut values)?;
        self.pos += needed;
        Ok(values)
    }

    /// Reads `N` raw bytes, e.g. a four character code.
    pub fn read_chars<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.ensure(N as u64)?;
        let mut chars = [0u8; N];
        self.inner.read_exact(&mut chars)?;
        self.pos += N as u64;
        Ok(chars)
    }

    /// Reads a big-endian `i32` at the current position without advancing.
    pub fn peek_i32(&mut self) -> Result<i32> {
        self.ensure(4)?;
        Ok(self.inner.peek_i32_be()?)
    }

    /// Moves to `target`, which must lie within `[0, len]`.
    pub fn seek_absolute(&mut self, target: i64) -> Result<()> {
        let pos = u64::try_from(target)
            .ok()
            .filter(|pos| *pos <= self.len)
            .ok_or(TscbError::OutOfRange {
                target,
                length: self.len,
            })?;
        self.inner.seek(SeekFrom::Start(pos))?;
        self.pos = pos;
        Ok(())
    }

    pub fn seek_relative(&mut self, delta: i64) -> Result<()> {
        self.seek_absolute(signed(self.pos).saturating_add(delta))
    }

    /// Reads text up to a `0x00` terminator, leaving the cursor just past it.
    ///
    /// The terminator is not part of the result. Invalid UTF-8 is replaced lossily.
    pub fn read_null_terminated_string(&mut self) -> Result<String> {
        let start = self.pos;
        match self.inner.read_until_nul()? {
            Some(bytes) => {
                self.pos += bytes.len() as u64 + 1;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            None => {
                self.pos = self.len;
                Err(TscbError::UnterminatedString { offset: start })
            }
        }
    }

    /// Dereferences the self-relative offset stored at the current position.
    ///
    /// The offset is peeked, `read` runs with the cursor at the resolved target, and the
    /// cursor is then left just past the offset field, ready for the next table entry.
    pub fn follow_self_relative<T>(
        &mut self,
        read: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let field_pos = self.position();
        let offset = self.peek_i32()?;
        self.seek_absolute(resolve(field_pos, offset))?;
        let value = read(self)?;
        self.seek_absolute(resolve(field_pos, 4))?;
        Ok(value)
    }
}
