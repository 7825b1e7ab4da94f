use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io;

use serde::{
    de::{Deserialize, Deserializer, Error, Unexpected, Visitor},
    ser::{Serialize, Serializer},
};
use serde_bytes::Bytes;

use crate::codec;
use crate::error;
use crate::zigzag::{unzigzag, zigzag};
use crate::MAX_LEN;

/// An integer held in its canonical encoded form.
///
/// Equality, ordering, and hashing all follow the numeric value. When serialized, a `VarInt` is a
/// plain `u64` for human-readable formats and its encoded bytes otherwise.
#[derive(Copy, Clone)]
pub struct VarInt {
    n: [u8; MAX_LEN],
    len: u8,
    value: u64,
}

impl VarInt {
    /// Encode an unsigned integer.
    pub fn from_u64(value: u64) -> VarInt {
        let mut n = [0u8; MAX_LEN];
        let len = codec::encode(&mut n, value);
        VarInt {
            n,
            len: len as u8,
            value,
        }
    }

    /// Create from a signed integer, using the zigzag mapping.
    pub fn from_i64(value: i64) -> VarInt {
        VarInt::from_u64(zigzag(value))
    }

    /// The decoded value.
    pub fn to_u64(self) -> u64 {
        self.value
    }

    /// Interpret the value as a zigzag-mapped signed integer.
    pub fn to_i64(self) -> i64 {
        unzigzag(self.value)
    }

    /// Length of the encoding, in bytes.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// The canonical encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.n[..self.len()]
    }

    /// Append the encoded bytes to `buf`.
    pub fn encode_vec(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.as_bytes());
    }

    /// Read one value from a byte source. See [`codec::read`] for how running out of bytes is
    /// reported.
    pub fn read<R: io::Read + ?Sized>(r: &mut R) -> error::Result<VarInt> {
        codec::read(r).map(VarInt::from_u64)
    }
}

impl TryFrom<&[u8]> for VarInt {
    type Error = error::Error;

    /// Parse a slice holding exactly one encoded value, with nothing after it.
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let v = codec::decode(value)?;
        let enc = VarInt::from_u64(v);
        if enc.len() != value.len() {
            return Err(error::Error::TrailingBytes {
                len: enc.len(),
                actual: value.len(),
            });
        }
        Ok(enc)
    }
}

impl From<VarInt> for u64 {
    fn from(v: VarInt) -> Self {
        v.value
    }
}

macro_rules! impl_from_unsigned {
    ($t: ty) => {
        impl From<$t> for VarInt {
            fn from(n: $t) -> Self {
                VarInt::from_u64(n as u64)
            }
        }
    };
}

impl_from_unsigned!(u8);
impl_from_unsigned!(u16);
impl_from_unsigned!(u32);
impl_from_unsigned!(u64);
impl_from_unsigned!(usize);

impl Default for VarInt {
    fn default() -> Self {
        VarInt::from_u64(0)
    }
}

impl PartialEq for VarInt {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for VarInt {}

impl Hash for VarInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl Ord for VarInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for VarInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for VarInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("VarInt")
            .field("value", &self.value)
            .field("bytes", &self.as_bytes())
            .finish()
    }
}

impl fmt::Display for VarInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl Serialize for VarInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_u64(self.value)
        } else {
            serializer.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for VarInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VarIntVisitor;

        impl<'de> Visitor<'de> for VarIntVisitor {
            type Value = VarInt;

            fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(fmt, "an unsigned integer or its canonical varint encoding")
            }

            fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(VarInt::from_u64(v))
            }

            fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map(VarInt::from_u64)
                    .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
            }

            fn visit_bytes<E: Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                VarInt::try_from(v).map_err(E::custom)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_u64(VarIntVisitor)
        } else {
            let bytes: &Bytes = Deserialize::deserialize(deserializer)?;
            VarInt::try_from(bytes.as_ref()).map_err(D::Error::custom)
        }
    }
}
