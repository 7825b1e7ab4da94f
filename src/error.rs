use std::fmt;
use std::io;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum Error {
    /// Occurs when a byte source is already exhausted before the first byte of a value is read.
    /// Callers scanning a sequence of values can treat this as "no more values".
    EndOfInput,
    /// Occurs when the first byte declares a longer encoding than the bytes available. This is
    /// always corrupt or truncated data, never a clean end of stream.
    UnexpectedEndOfInput { expected: usize, actual: usize },
    /// Occurs when a value was encoded with more bytes than the shortest encoding needs.
    NonCanonicalEncoding { len: usize },
    /// Occurs when a slice expected to hold exactly one value has bytes left over.
    TrailingBytes { len: usize, actual: usize },
    /// Failure within the underlying byte source, other than running out of bytes.
    Io(io::Error),
}

impl Error {
    /// Returns true if this is a clean end of input, seen before any byte of a value was read.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Error::EndOfInput)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::EndOfInput => f.write_str("End of input"),
            Error::UnexpectedEndOfInput { expected, actual } => write!(
                f,
                "Unexpected end of input: encoding needs {} bytes, but only {} are available",
                expected, actual
            ),
            Error::NonCanonicalEncoding { len } => write!(
                f,
                "Encoded integer contains leading zeros: {} bytes is not the shortest encoding",
                len
            ),
            Error::TrailingBytes { len, actual } => write!(
                f,
                "Encoding uses {} bytes, but {} were provided",
                len, actual
            ),
            Error::Io(ref err) => write!(f, "Byte source failed: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Io(ref err) => Some(err),
            _ => None,
        }
    }
}

impl std::convert::From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
