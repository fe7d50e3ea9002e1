//! Primitive wire codec
//!
//! Fixed-width integers are little-endian unless the function name says
//! otherwise. Variable-length integers are unsigned LEB128: seven payload
//! bits per byte, least-significant group first, high bit set on every
//! byte except the last.

use crate::{CodecError, CodecResult};
use std::io::{Read, Write};

/// Maximum number of bytes a 64-bit varint can occupy
pub const MAX_VARINT_LEN: usize = 10;

/// Single-byte view over a reader that only offers bulk transfer.
///
/// The varint decoder pulls one byte at a time through this adapter, so
/// any `Read` works without requiring buffering or peeking.
pub struct ByteReader<'a, R: Read> {
    inner: &'a mut R,
}

impl<'a, R: Read> ByteReader<'a, R> {
    /// Wrap a reader
    pub fn new(inner: &'a mut R) -> Self {
        Self { inner }
    }

    /// Read exactly one byte
    pub fn read_byte(&mut self) -> CodecResult<u8> {
        let [byte] = read_array::<_, 1>(&mut *self.inner)?;
        Ok(byte)
    }
}

/// Read exactly `N` bytes, accumulating partial reads.
pub fn read_array<R: Read, const N: usize>(r: &mut R) -> CodecResult<[u8; N]> {
    let mut buf = [0u8; N];
    r.read_exact(&mut buf).map_err(|e| CodecError::from_read(e, N))?;
    Ok(buf)
}

/// Read a single byte
pub fn read_u8<R: Read>(r: &mut R) -> CodecResult<u8> {
    ByteReader::new(r).read_byte()
}

/// Alias of [`read_u8`] for call sites reading raw bytes
pub fn read_byte<R: Read>(r: &mut R) -> CodecResult<u8> {
    read_u8(r)
}

/// Little-endian 16-bit read
pub fn read_u16<R: Read>(r: &mut R) -> CodecResult<u16> {
    Ok(u16::from_le_bytes(read_array(r)?))
}

/// Big-endian 16-bit read
pub fn read_u16_be<R: Read>(r: &mut R) -> CodecResult<u16> {
    Ok(u16::from_be_bytes(read_array(r)?))
}

/// Little-endian 32-bit read
pub fn read_u32<R: Read>(r: &mut R) -> CodecResult<u32> {
    Ok(u32::from_le_bytes(read_array(r)?))
}

/// Little-endian 64-bit read
pub fn read_u64<R: Read>(r: &mut R) -> CodecResult<u64> {
    Ok(u64::from_le_bytes(read_array(r)?))
}

/// Read an unsigned LEB128 varint.
///
/// Values that do not fit in 64 bits fail with [`CodecError::VarintOverflow`].
/// Non-minimal encodings (e.g. `0x80 0x00`) are accepted.
pub fn read_varint<R: Read>(r: &mut R) -> CodecResult<u64> {
    let mut bytes = ByteReader::new(r);
    let mut value = 0u64;

    for i in 0..MAX_VARINT_LEN {
        let byte = bytes.read_byte()?;
        // The tenth byte may only carry the single remaining bit
        if i == MAX_VARINT_LEN - 1 && byte > 1 {
            return Err(CodecError::VarintOverflow);
        }
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }

    Err(CodecError::VarintOverflow)
}

/// Read exactly `len` raw bytes.
///
/// The buffer grows with the data actually read, so a hostile length
/// prefix cannot force a large allocation up front.
pub fn read_bytes<R: Read>(r: &mut R, len: usize) -> CodecResult<Vec<u8>> {
    let mut buf = Vec::new();
    r.by_ref()
        .take(len as u64)
        .read_to_end(&mut buf)
        .map_err(|e| CodecError::from_read(e, len))?;
    if buf.len() != len {
        return Err(CodecError::Truncated { needed: len });
    }
    Ok(buf)
}

/// Read `len` bytes and validate them as UTF-8
pub fn read_string<R: Read>(r: &mut R, len: usize) -> CodecResult<String> {
    let bytes = read_bytes(r, len)?;
    String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)
}

/// Read a varint length prefix followed by that many bytes
pub fn read_var_bytes<R: Read>(r: &mut R) -> CodecResult<Vec<u8>> {
    let len = read_varint(r)?;
    let len = usize::try_from(len).map_err(|_| CodecError::VarintOverflow)?;
    read_bytes(r, len)
}

/// Write a single byte
pub fn write_u8<W: Write>(w: &mut W, value: u8) -> CodecResult<()> {
    w.write_all(&[value])?;
    Ok(())
}

/// Little-endian 16-bit write
pub fn write_u16<W: Write>(w: &mut W, value: u16) -> CodecResult<()> {
    w.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Big-endian 16-bit write
pub fn write_u16_be<W: Write>(w: &mut W, value: u16) -> CodecResult<()> {
    w.write_all(&value.to_be_bytes())?;
    Ok(())
}

/// Little-endian 32-bit write
pub fn write_u32<W: Write>(w: &mut W, value: u32) -> CodecResult<()> {
    w.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Little-endian 64-bit write
pub fn write_u64<W: Write>(w: &mut W, value: u64) -> CodecResult<()> {
    w.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Write raw bytes verbatim, without a length prefix
pub fn write_bytes<W: Write>(w: &mut W, bytes: &[u8]) -> CodecResult<()> {
    w.write_all(bytes)?;
    Ok(())
}

/// Write an unsigned LEB128 varint
pub fn write_varint<W: Write>(w: &mut W, mut value: u64) -> CodecResult<()> {
    let mut buf = [0u8; MAX_VARINT_LEN];
    let mut n = 0;
    while value >= 0x80 {
        buf[n] = (value as u8) | 0x80;
        value >>= 7;
        n += 1;
    }
    buf[n] = value as u8;
    w.write_all(&buf[..=n])?;
    Ok(())
}

/// Write a varint length prefix followed by the bytes
pub fn write_var_bytes<W: Write>(w: &mut W, bytes: &[u8]) -> CodecResult<()> {
    write_varint(w, bytes.len() as u64)?;
    write_bytes(w, bytes)
}

/// Number of bytes [`write_varint`] emits for `value`
pub fn varint_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.max(1).div_ceil(7)
}
