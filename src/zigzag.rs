//! Mapping between signed and unsigned integers.
//!
//! Zigzag interleaves negative and positive values (`0, -1, 1, -2, 2, ...` becomes
//! `0, 1, 2, 3, 4, ...`) so values of small magnitude stay short once encoded. The mapping is not
//! part of the wire format: an encoded signed value is just the encoding of its zigzag form.

use std::io;

use crate::codec;
use crate::error::Result;
use crate::MAX_LEN;

/// Maps a signed integer to an unsigned one.
#[inline]
pub fn zigzag(v: i64) -> u64 {
    ((v << 1) ^ (v >> 63)) as u64
}

/// Inverts [`zigzag`].
#[inline]
pub fn unzigzag(v: u64) -> i64 {
    ((v >> 1) as i64) ^ ((v as i64) << 63 >> 63)
}

/// Encodes a signed integer into `buf`, returning the number of bytes used.
#[inline]
pub fn encode_i64(buf: &mut [u8; MAX_LEN], v: i64) -> usize {
    codec::encode(buf, zigzag(v))
}

/// Appends the encoding of a signed integer to `buf`.
#[inline]
pub fn append_i64(buf: &mut Vec<u8>, v: i64) {
    codec::append(buf, zigzag(v))
}

/// Decodes a signed integer from the start of `buf`.
pub fn decode_i64(buf: &[u8]) -> Result<i64> {
    codec::decode(buf).map(unzigzag)
}

/// Reads one signed integer from a byte source.
pub fn read_i64<R: io::Read + ?Sized>(r: &mut R) -> Result<i64> {
    codec::read(r).map(unzigzag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn test_case(s: i64, u: u64) {
        assert_eq!(u, zigzag(s), "zigzag({}) should be {}", s, u);
        assert_eq!(s, unzigzag(u), "unzigzag({}) should be {}", u, s);
    }

    #[test]
    fn small_values() {
        test_case(0, 0);
        test_case(-1, 1);
        test_case(1, 2);
        test_case(-2, 3);
        test_case(2, 4);
    }

    #[test]
    fn range_edges() {
        test_case(i8::MAX as i64, 254);
        test_case(i8::MIN as i64, 255);
        test_case(i32::MAX as i64, 4_294_967_294);
        test_case(i32::MIN as i64, 4_294_967_295);
        test_case(i64::MAX, u64::MAX - 1);
        test_case(i64::MIN, u64::MAX);
    }

    #[test]
    fn bijection_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let s: i64 = rng.gen();
            assert_eq!(unzigzag(zigzag(s)), s);
            let u: u64 = rng.gen();
            assert_eq!(zigzag(unzigzag(u)), u);
        }
    }

    #[test]
    fn signed_roundtrip() {
        for v in [0, -1, 1, -64, 63, -65, 64, i64::MIN, i64::MAX] {
            let mut buf = [0u8; MAX_LEN];
            let len = encode_i64(&mut buf, v);
            assert_eq!(decode_i64(&buf[..len]).unwrap(), v);

            let mut appended = Vec::new();
            append_i64(&mut appended, v);
            assert_eq!(appended, &buf[..len]);
            assert_eq!(read_i64(&mut &appended[..]).unwrap(), v);
        }
    }

    #[test]
    fn small_magnitude_is_short() {
        let mut buf = [0u8; MAX_LEN];
        assert_eq!(encode_i64(&mut buf, -64), 1);
        assert_eq!(encode_i64(&mut buf, 63), 1);
        assert_eq!(encode_i64(&mut buf, -65), 2);
        assert_eq!(encode_i64(&mut buf, i64::MIN), MAX_LEN);
    }
}
