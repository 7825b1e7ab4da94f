//! fog-vint is a compact, canonical variable length encoding for 64-bit integers. It is meant as a
//! building block inside larger formats, such as length prefixes on records, where small values
//! should be small on the wire and a reader should know the full length after one byte.
//!
//! # Format
//!
//! A value takes between 1 and 9 bytes. The number of trailing zero bits in the first byte is the
//! number of bytes that follow it:
//!
//! - `xxxxxxx1`: 1 byte, 7 bits of value
//! - `xxxxxx10`: 2 bytes, 14 bits of value
//! - ...
//! - `10000000`: 8 bytes, 56 bits of value
//! - `00000000`: 9 bytes, the full 64-bit value in the remaining 8 bytes
//!
//! For the 1 to 8 byte forms, the value sits directly above the tag bits, and the whole encoding
//! is read as a little-endian integer. The 9 byte form has no tag bits to strip; its trailing 8
//! bytes are the value in little-endian order.
//!
//! Every value has exactly one valid encoding: the shortest one. Decoders reject anything longer
//! than it needs to be.
//!
//! ```
//! let mut buf = Vec::new();
//! fog_vint::append(&mut buf, 0x0f0f);
//! assert_eq!(buf, [0x3e, 0x3c]);
//! assert_eq!(fog_vint::decode(&buf).unwrap(), 0x0f0f);
//! ```
//!
//! Signed integers are mapped onto unsigned ones with [`zigzag()`] before encoding, so values of
//! small magnitude stay short:
//!
//! ```
//! let mut buf = [0u8; fog_vint::MAX_LEN];
//! let len = fog_vint::encode(&mut buf, fog_vint::zigzag(-2));
//! assert_eq!(&buf[..len], &[0x07]);
//! ```

mod codec;
mod error;
mod parser;
mod varint;
pub mod zigzag;

pub use self::codec::{append, decode, decoded_len, encode, encoded_len, read, write};
pub use self::error::{Error, Result};
pub use self::parser::Parser;
pub use self::varint::VarInt;
pub use self::zigzag::{unzigzag, zigzag};

/// The maximum number of bytes in a single encoded integer.
pub const MAX_LEN: usize = 9;
