//! Error types.

use core::fmt;

/// Alias for [`core::result::Result`] with the crate [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// The half of an RSA key an operation requires.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyPart {
    /// The public exponent `e`.
    Public,
    /// The private exponent `d`.
    Private,
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPart::Public => f.write_str("public"),
            KeyPart::Private => f.write_str("private"),
        }
    }
}

/// Error types
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No exponent coprime to the totient was found below it; the supplied
    /// primes are unusable for key generation.
    #[error("no usable public exponent for the supplied primes")]
    NoCoprimeExponent,

    /// The operation requires a key half that the key does not carry.
    #[error("key is missing its {0} exponent")]
    MissingKeyPart(KeyPart),

    /// A message or ciphertext integer is not smaller than the modulus.
    #[error("value is not smaller than the modulus")]
    ModulusOverflow,

    /// The trailing block padding is malformed.
    #[error("invalid padding")]
    InvalidPadding,
}
