#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Usage
//!
//! ## Encryption and decryption
//!
//! ```
//! use textbook_rsa::{Message, RsaKey};
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! // Primes of 256 bits each; pick a larger size for anything serious.
//! let key = RsaKey::generate(&mut rng, 256).expect("failed to generate a key");
//! let public_key = key.public_view().expect("generated keys have a public half");
//!
//! let cipher = public_key.encrypt("attack at dawn").expect("failed to encrypt");
//! let plain = key.decrypt(cipher).expect("failed to decrypt");
//!
//! // Text inputs come back as their UTF-8 bytes.
//! assert_eq!(plain, Message::Bytes(b"attack at dawn".to_vec()));
//! ```
//!
//! ## Signing and verification
//!
//! ```
//! use textbook_rsa::RsaKey;
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! let key = RsaKey::generate(&mut rng, 256).expect("failed to generate a key");
//! let public_key = key.public_view().expect("generated keys have a public half");
//!
//! let signature = key.sign("attack at dawn").expect("failed to sign");
//! assert!(public_key
//!     .verify_matches("attack at dawn", signature)
//!     .expect("failed to verify"));
//! ```
//!
//! ## Caller-supplied primes
//!
//! ```
//! use textbook_rsa::{BigUint, RsaKey};
//!
//! let key = RsaKey::generate_from_primes(
//!     12,
//!     &BigUint::from(61u64),
//!     &BigUint::from(53u64),
//!     Some(BigUint::from(17u64)),
//! )
//! .expect("17 is coprime to the totient");
//!
//! let cipher = key.raw_encrypt(&BigUint::from(65u64)).unwrap();
//! assert_eq!(cipher, BigUint::from(2790u64));
//! assert_eq!(key.raw_decrypt(&cipher).unwrap(), BigUint::from(65u64));
//! ```

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigUint;
pub use rand_core;

mod algorithms;
mod encoding;
pub mod errors;
mod key;
mod message;

pub use crate::{
    algorithms::pad::{pad, unpad, BLOCK_SIZE},
    errors::{Error, KeyPart, Result},
    key::{KeyParts, RsaKey, DEFAULT_KEY_BITS},
    message::Message,
};
