//! Free functions for encoding and decoding single values.
//!
//! Every function here works on one `u64` at a time. Signed values go through
//! [`zigzag`](crate::zigzag()) first; see the [`zigzag`](crate::zigzag) module.

use std::io;
use std::io::ErrorKind::UnexpectedEof;

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};

use crate::error::{Error, Result};
use crate::MAX_LEN;

/// Number of bytes following the first one in the shortest encoding of `v`. Always in `[0, 8]`.
#[inline]
fn tag(v: u64) -> u32 {
    // Zero has 64 leading zeros; clamping keeps the subtraction in range.
    let zeros = v.leading_zeros().clamp(1, 63);
    (63 - zeros) / 7
}

/// Returns the number of bytes needed to encode `v`. The result is always in `[1, 9]`.
#[inline]
pub fn encoded_len(v: u64) -> usize {
    tag(v) as usize + 1
}

/// Returns the total length of an encoded value, given its first byte. The result is always in
/// `[1, 9]`.
#[inline]
pub fn decoded_len(first: u8) -> usize {
    first.trailing_zeros() as usize + 1
}

/// Writes the encoding of `v` into `buf`, returning the number of bytes used. Bytes past the
/// returned length are scratch space and hold no meaning.
#[inline]
pub fn encode(buf: &mut [u8; MAX_LEN], v: u64) -> usize {
    let n = tag(v);
    if n >= 8 {
        buf[0] = 0;
        LittleEndian::write_u64(&mut buf[1..], v);
    } else {
        // n < 8 means v < 2^56, so the tag bit and the value fit in one word.
        LittleEndian::write_u64(&mut buf[..8], ((v << 1) | 1) << n);
    }
    n as usize + 1
}

/// Appends the encoding of `v` to the end of `buf`.
#[inline]
pub fn append(buf: &mut Vec<u8>, v: u64) {
    let mut enc = [0u8; MAX_LEN];
    let len = encode(&mut enc, v);
    buf.extend_from_slice(&enc[..len]);
}

/// Writes the encoding of `v` to a byte sink, returning the number of bytes written.
pub fn write<W: io::Write + ?Sized>(w: &mut W, v: u64) -> Result<usize> {
    let mut enc = [0u8; MAX_LEN];
    let len = encode(&mut enc, v);
    w.write_all(&enc[..len])?;
    Ok(len)
}

/// Decodes a value from the start of `buf`. Bytes past the encoded value are ignored; use
/// [`decoded_len`] on the first byte to find out how many were used.
///
/// Decoding fails if `buf` is shorter than the length declared by its first byte, or if the value
/// is not in its shortest possible encoding.
pub fn decode(buf: &[u8]) -> Result<u64> {
    let first = match buf.first() {
        Some(b) => *b,
        None => {
            return Err(Error::UnexpectedEndOfInput {
                expected: 1,
                actual: 0,
            })
        }
    };
    let len = decoded_len(first);
    if buf.len() < len {
        return Err(Error::UnexpectedEndOfInput {
            expected: len,
            actual: buf.len(),
        });
    }

    let n = first.trailing_zeros();
    let v = if n >= 8 {
        // Maximal form: no tag bits to strip, the value follows verbatim.
        LittleEndian::read_u64(&buf[1..MAX_LEN])
    } else {
        let mut word = [0u8; 8];
        word[..len].copy_from_slice(&buf[..len]);
        LittleEndian::read_u64(&word) >> (n + 1)
    };

    if n != 0 && v < (1u64 << (7 * n)) {
        return Err(Error::NonCanonicalEncoding { len });
    }
    Ok(v)
}

/// Reads exactly one encoded value from a byte source.
///
/// If the source is empty before the first byte, this returns [`Error::EndOfInput`]. Running out
/// partway through a value is [`Error::UnexpectedEndOfInput`] instead.
pub fn read<R: io::Read + ?Sized>(r: &mut R) -> Result<u64> {
    let first = r.read_u8().map_err(|e| {
        if e.kind() == UnexpectedEof {
            Error::EndOfInput
        } else {
            Error::Io(e)
        }
    })?;
    let len = decoded_len(first);

    let mut buf = [0u8; MAX_LEN];
    buf[0] = first;
    for (i, b) in buf[1..len].iter_mut().enumerate() {
        *b = r.read_u8().map_err(|e| {
            if e.kind() == UnexpectedEof {
                Error::UnexpectedEndOfInput {
                    expected: len,
                    actual: i + 1,
                }
            } else {
                Error::Io(e)
            }
        })?;
    }
    decode(&buf[..len])
}
