//! RSA keys and the four message transform operations.

use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::One;
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, Zeroizing};

use crate::algorithms::generate::{
    compute_key_components, sample_distinct_prime, sample_prime,
};
use crate::algorithms::pad::{pad, unpad, BLOCK_SIZE};
use crate::algorithms::rsa::rsa_transform;
use crate::encoding::{uint_from_be_bytes, uint_to_be_pad, uint_to_zeroizing_be_pad};
use crate::errors::{Error, KeyPart, Result};
use crate::message::Message;

/// Modulus-prime bit length used when callers have no particular size in mind.
pub const DEFAULT_KEY_BITS: usize = 1024;

/// The exponent halves an RSA key carries.
///
/// A key always holds at least one half. [`RsaKey::public_view`] produces
/// the [`KeyParts::Public`] variant, which structurally cannot decrypt or
/// sign.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeyParts {
    /// Public exponent only: the key can encrypt and verify.
    Public {
        /// Public exponent.
        e: BigUint,
    },
    /// Private exponent only: the key can decrypt and sign.
    Private {
        /// Private exponent.
        d: BigUint,
    },
    /// Both exponents: a full key pair.
    Pair {
        /// Public exponent.
        e: BigUint,
        /// Private exponent.
        d: BigUint,
    },
}

impl Zeroize for KeyParts {
    fn zeroize(&mut self) {
        match self {
            KeyParts::Public { .. } => {}
            KeyParts::Private { d } | KeyParts::Pair { d, .. } => d.zeroize(),
        }
    }
}

/// An RSA key: modulus, declared bit length, and one or both exponents.
///
/// Keys are immutable values. They are built by [`RsaKey::generate`] or
/// [`RsaKey::generate_from_primes`], or assembled from raw components with
/// [`RsaKey::from_components`]; [`RsaKey::public_view`] derives an
/// independent, distributable copy without the private exponent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RsaKey {
    /// Declared modulus bit length. Informational; not validated against `n`.
    bits: usize,
    /// Modulus, the product of two primes.
    n: BigUint,
    /// The exponent half or halves.
    parts: KeyParts,
}

impl Drop for RsaKey {
    fn drop(&mut self) {
        self.parts.zeroize();
    }
}

impl RsaKey {
    /// Assembles a key from raw components. Nothing is validated.
    pub fn from_components(bits: usize, n: BigUint, parts: KeyParts) -> RsaKey {
        RsaKey { bits, n, parts }
    }

    /// Generates a full key pair from two distinct primes.
    ///
    /// `p` and `q` are trusted to be prime and distinct; only the exponent
    /// search can fail, with [`Error::NoCoprimeExponent`], when no public
    /// exponent coprime to the totient exists at or above the starting
    /// candidate (`exponent_hint`, or 65537/3 when absent).
    pub fn generate_from_primes(
        bits: usize,
        p: &BigUint,
        q: &BigUint,
        exponent_hint: Option<BigUint>,
    ) -> Result<RsaKey> {
        let components = compute_key_components(p, q, exponent_hint)?;

        Ok(RsaKey {
            bits,
            n: components.n,
            parts: KeyParts::Pair {
                e: components.e,
                d: components.d,
            },
        })
    }

    /// Generates a full key pair with primes sampled from `rng`.
    ///
    /// Both primes are drawn from `[max(3, 2^(bits-1)), 2^bits)`, the second
    /// guaranteed distinct from the first, so the modulus has roughly
    /// `2 * bits` bits. [`DEFAULT_KEY_BITS`] is a reasonable choice of
    /// `bits` when in doubt.
    pub fn generate<R: CryptoRngCore + ?Sized>(
        rng: &mut R,
        bits: usize,
    ) -> Result<RsaKey> {
        let three = BigUint::from(3u64);
        let mut low = BigUint::one() << bits.saturating_sub(1);
        if low < three {
            low = three;
        }
        let high = BigUint::one() << bits;

        let p = sample_prime(rng, &low, &high);
        let q = sample_distinct_prime(rng, &low, &high, &p);

        RsaKey::generate_from_primes(bits, &p, &q, None)
    }

    /// Returns an independent copy of this key with the private exponent
    /// stripped, suitable for distribution.
    ///
    /// Fails with [`Error::MissingKeyPart`] for a private-only key, which
    /// has no public half to distribute.
    pub fn public_view(&self) -> Result<RsaKey> {
        let e = self.require_e()?;

        Ok(RsaKey {
            bits: self.bits,
            n: self.n.clone(),
            parts: KeyParts::Public { e: e.clone() },
        })
    }

    /// Returns the declared bit length of the modulus.
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Returns the modulus of the key.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Returns the public exponent, if the key carries one.
    pub fn e(&self) -> Option<&BigUint> {
        match &self.parts {
            KeyParts::Public { e } | KeyParts::Pair { e, .. } => Some(e),
            KeyParts::Private { .. } => None,
        }
    }

    /// Returns the private exponent, if the key carries one.
    pub fn d(&self) -> Option<&BigUint> {
        match &self.parts {
            KeyParts::Private { d } | KeyParts::Pair { d, .. } => Some(d),
            KeyParts::Public { .. } => None,
        }
    }

    /// Returns the modulus size in bytes. Byte-form ciphertexts and
    /// signatures produced by this key have exactly this length.
    pub fn size(&self) -> usize {
        (self.n.bits() + 7) / 8
    }

    fn require_e(&self) -> Result<&BigUint> {
        self.e().ok_or(Error::MissingKeyPart(KeyPart::Public))
    }

    fn require_d(&self) -> Result<&BigUint> {
        self.d().ok_or(Error::MissingKeyPart(KeyPart::Private))
    }

    /// ⚠️ Raw RSA encryption of `m` with the public exponent. No padding is
    /// performed; `m` must be smaller than the modulus.
    pub fn raw_encrypt(&self, m: &BigUint) -> Result<BigUint> {
        rsa_transform(m, self.require_e()?, &self.n)
    }

    /// ⚠️ Raw RSA decryption of `c` with the private exponent. No padding
    /// is removed; `c` must be smaller than the modulus.
    pub fn raw_decrypt(&self, c: &BigUint) -> Result<BigUint> {
        rsa_transform(c, self.require_d()?, &self.n)
    }

    /// Encrypts a message with the public exponent.
    ///
    /// Integer messages pass straight through the raw transform. Byte and
    /// text messages are block-padded first; their ciphertext comes back as
    /// [`Message::Bytes`] of [`RsaKey::size`] length.
    pub fn encrypt(&self, msg: impl Into<Message>) -> Result<Message> {
        let e = self.require_e()?;

        match msg.into() {
            Message::Integer(m) => {
                rsa_transform(&m, e, &self.n).map(Message::Integer)
            }
            Message::Bytes(bytes) => {
                self.seal_bytes(&bytes, e).map(Message::Bytes)
            }
            Message::Text(text) => {
                self.seal_bytes(text.as_bytes(), e).map(Message::Bytes)
            }
        }
    }

    /// Decrypts a ciphertext with the private exponent, inverting
    /// [`RsaKey::encrypt`].
    ///
    /// Byte-form plaintext whose leading zero bytes fill one or more whole
    /// blocks cannot be reconstructed exactly; the lost blocks stay absent
    /// from the output.
    pub fn decrypt(&self, cipher: impl Into<Message>) -> Result<Message> {
        let d = self.require_d()?;

        match cipher.into() {
            Message::Integer(c) => {
                rsa_transform(&c, d, &self.n).map(Message::Integer)
            }
            Message::Bytes(bytes) => {
                self.open_bytes(&bytes, d).map(Message::Bytes)
            }
            Message::Text(text) => {
                self.open_bytes(text.as_bytes(), d).map(Message::Bytes)
            }
        }
    }

    /// Signs a message with the private exponent.
    ///
    /// Same pipeline as [`RsaKey::encrypt`], exponentiating with `d`: the
    /// standard trapdoor-reversal construction of textbook RSA signing.
    /// The message itself is transformed; no hashing takes place.
    pub fn sign(&self, msg: impl Into<Message>) -> Result<Message> {
        let d = self.require_d()?;

        match msg.into() {
            Message::Integer(m) => {
                rsa_transform(&m, d, &self.n).map(Message::Integer)
            }
            Message::Bytes(bytes) => {
                self.seal_bytes(&bytes, d).map(Message::Bytes)
            }
            Message::Text(text) => {
                self.seal_bytes(text.as_bytes(), d).map(Message::Bytes)
            }
        }
    }

    /// Recovers the message embedded in a signature with the public
    /// exponent, inverting [`RsaKey::sign`].
    pub fn verify(&self, sig: impl Into<Message>) -> Result<Message> {
        let e = self.require_e()?;

        match sig.into() {
            Message::Integer(s) => {
                rsa_transform(&s, e, &self.n).map(Message::Integer)
            }
            Message::Bytes(bytes) => {
                self.open_bytes(&bytes, e).map(Message::Bytes)
            }
            Message::Text(text) => {
                self.open_bytes(text.as_bytes(), e).map(Message::Bytes)
            }
        }
    }

    /// Checks that `sig` is a signature of `msg` under this key.
    ///
    /// Recovers the signed message with [`RsaKey::verify`], coerces a text
    /// `msg` to its bytes, and compares. Errors from recovery propagate.
    pub fn verify_matches(
        &self,
        msg: impl Into<Message>,
        sig: impl Into<Message>,
    ) -> Result<bool> {
        let recovered = self.verify(sig)?;
        Ok(msg.into().coerce_text() == recovered)
    }

    /// Forward pipeline for byte messages: pad, convert to an integer,
    /// exponentiate, re-expand to the modulus width.
    fn seal_bytes(&self, data: &[u8], exponent: &BigUint) -> Result<Vec<u8>> {
        let padded = Zeroizing::new(pad(data));
        let m = Zeroizing::new(uint_from_be_bytes(&padded));
        let c = rsa_transform(&m, exponent, &self.n)?;
        uint_to_be_pad(c, self.size())
    }

    /// Reverse pipeline for byte messages: convert to an integer,
    /// exponentiate, re-expand to a whole number of blocks, unpad.
    fn open_bytes(&self, data: &[u8], exponent: &BigUint) -> Result<Vec<u8>> {
        let c = uint_from_be_bytes(data);
        let m = rsa_transform(&c, exponent, &self.n)?;

        // The padded plaintext was a whole number of blocks; any leading
        // zero bytes were lost in the integer round-trip, so re-expand to
        // the next block boundary before unpadding.
        let width = next_block_multiple(uint_width(&m));
        let block_wide = Zeroizing::new(uint_to_zeroizing_be_pad(m, width)?);

        unpad(&block_wide)
    }
}

/// Length of the minimal big-endian encoding of `value`, in bytes.
fn uint_width(value: &BigUint) -> usize {
    core::cmp::max(1, (value.bits() + 7) / 8)
}

fn next_block_multiple(len: usize) -> usize {
    len.div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}
