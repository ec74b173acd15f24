use byteorder::{BigEndian, ReadBytesExt};
use std::io;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;

pub trait ReadExt: Read + Seek {
    fn peek_i32_be(&mut self) -> io::Result<i32>;

    fn read_until_nul(&mut self) -> io::Result<Option<Vec<u8>>>;
}

impl<T> ReadExt for T
where
    T: Read + Seek,
{
    /// Peeks a big-endian `i32` from the reader without advancing its position.
    fn peek_i32_be(&mut self) -> io::Result<i32> {
        let pos = self.stream_position()?;
        let value = self.read_i32::<BigEndian>();
        self.seek(SeekFrom::Start(pos))?;
        value
    }

    /// Reads bytes up to and including a `0x00` terminator, returning them without it.
    ///
    /// Returns `None` when the stream ends before a terminator is found.
    fn read_until_nul(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut bytes = Vec::new();
        loop {
            match self.read_u8() {
                Ok(0) => return Ok(Some(bytes)),
                Ok(b) => bytes.push(b),
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
                Err(e) => return Err(e),
            }
        }
    }
}

/// Utility methods for working with seekable streams.
pub trait SeekExt: Seek {
    /// Returns the total length of the stream, leaving the position unchanged.
    fn measure_len(&mut self) -> io::Result<u64>;
}

impl<T> SeekExt for T
where
    T: Seek,
{
    fn measure_len(&mut self) -> io::Result<u64> {
        let pos = self.stream_position()?;
        let len = self.seek(SeekFrom::End(0))?;
        if pos != len {
            self.seek(SeekFrom::Start(pos))?;
        }
        Ok(len)
    }
}
