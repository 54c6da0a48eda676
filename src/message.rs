//! Message representations accepted by the transform operations.

use alloc::string::String;
use alloc::vec::Vec;

use num_bigint::BigUint;

/// A message, ciphertext or signature in one of the supported shapes.
///
/// Every operation mirrors the representation of its input, with one
/// exception: [`Message::Text`] inputs produce [`Message::Bytes`] outputs.
/// Text is coerced to its UTF-8 encoding on the way in and never re-coerced
/// to text on the way out.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    /// A raw unsigned integer. The caller asserts it is already smaller than
    /// the modulus; no padding is applied around the transform.
    Integer(BigUint),
    /// An opaque byte sequence of any length.
    Bytes(Vec<u8>),
    /// UTF-8 text, treated as its byte encoding.
    Text(String),
}

impl Message {
    /// Replaces the text variant with its UTF-8 bytes, leaving the other
    /// variants untouched.
    pub(crate) fn coerce_text(self) -> Message {
        match self {
            Message::Text(text) => Message::Bytes(text.into_bytes()),
            other => other,
        }
    }
}

impl From<BigUint> for Message {
    fn from(value: BigUint) -> Message {
        Message::Integer(value)
    }
}

impl From<Vec<u8>> for Message {
    fn from(bytes: Vec<u8>) -> Message {
        Message::Bytes(bytes)
    }
}

impl From<&[u8]> for Message {
    fn from(bytes: &[u8]) -> Message {
        Message::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Message {
    fn from(bytes: &[u8; N]) -> Message {
        Message::Bytes(bytes.to_vec())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Message {
        Message::Text(text)
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Message {
        Message::Text(String::from(text))
    }
}
