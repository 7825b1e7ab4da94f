use crate::codec::{decode, decoded_len};
use crate::error::Result;

/// Iterates over a back-to-back sequence of encoded integers in a byte slice.
///
/// Iteration ends cleanly once the slice is used up. A truncated or non-canonical value yields a
/// single error, after which the parser returns `None`.
#[derive(Clone, Debug)]
pub struct Parser<'a> {
    data: &'a [u8],
    errored: bool,
}

impl<'a> Parser<'a> {
    pub fn new(data: &'a [u8]) -> Parser<'a> {
        Self {
            data,
            errored: false,
        }
    }

    /// The bytes not yet parsed. After an error, this starts at the value that failed.
    pub fn remaining(&self) -> &'a [u8] {
        self.data
    }

    /// Length of the next value, if there is one, as declared by its first byte.
    pub fn peek_len(&self) -> Option<usize> {
        self.data.first().map(|b| decoded_len(*b))
    }
}

impl<'a> std::iter::Iterator for Parser<'a> {
    type Item = Result<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.errored {
            return None;
        }
        let len = self.peek_len()?;
        let result = decode(self.data);
        match result {
            Ok(_) => self.data = &self.data[len..],
            Err(_) => self.errored = true,
        }
        Some(result)
    }
}

impl<'a> std::iter::FusedIterator for Parser<'a> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::codec::append;
    use crate::error::Error;

    #[test]
    fn sequence() {
        let values = [0, 1, 127, 128, 0x0f0f, 1 << 56, u64::MAX, 7];
        let mut buf = Vec::new();
        for v in values.iter() {
            append(&mut buf, *v);
        }
        let parsed: Vec<u64> = Parser::new(&buf).collect::<Result<_>>().unwrap();
        assert_eq!(parsed, values);
    }

    #[test]
    fn empty() {
        let mut parser = Parser::new(&[]);
        assert!(parser.next().is_none());
        assert_eq!(parser.peek_len(), None);
    }

    #[test]
    fn truncated_tail() {
        let mut buf = Vec::new();
        append(&mut buf, 3);
        append(&mut buf, 0x0f0f_f0f0);
        buf.pop();
        let mut parser = Parser::new(&buf);
        assert_eq!(parser.next().unwrap().unwrap(), 3);
        match parser.next() {
            Some(Err(Error::UnexpectedEndOfInput { expected, actual })) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("Expected a truncation error, got {:?}", other),
        }
        assert_eq!(parser.remaining().len(), 3, "Failed value should be left in place");
        assert!(parser.next().is_none(), "Parser should stop after an error");
    }

    #[test]
    fn leading_zeros() {
        let data = [0x02, 0x00, 0x01];
        let mut parser = Parser::new(&data);
        assert!(matches!(
            parser.next(),
            Some(Err(Error::NonCanonicalEncoding { len: 2 }))
        ));
        assert!(parser.next().is_none());
    }
}
