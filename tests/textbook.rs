//! End-to-end vectors for the block-padded textbook transform.

use hex_literal::hex;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use textbook_rsa::{pad, unpad, BigUint, Error, KeyPart, KeyParts, Message, RsaKey};

fn seeded_key(seed: u8, bits: usize) -> RsaKey {
    let mut rng = ChaCha8Rng::from_seed([seed; 32]);
    RsaKey::generate(&mut rng, bits).unwrap()
}

#[test]
fn wikipedia_example_key() {
    let key = RsaKey::generate_from_primes(
        12,
        &BigUint::from(61u64),
        &BigUint::from(53u64),
        Some(BigUint::from(17u64)),
    )
    .unwrap();

    assert_eq!(key.n(), &BigUint::from(3233u64));
    assert_eq!(key.e(), Some(&BigUint::from(17u64)));
    assert_eq!(key.d(), Some(&BigUint::from(2753u64)));

    let cipher = key.raw_encrypt(&BigUint::from(65u64)).unwrap();
    assert_eq!(cipher, BigUint::from(2790u64));
    assert_eq!(key.raw_decrypt(&cipher).unwrap(), BigUint::from(65u64));
}

#[test]
fn padding_scenarios() {
    assert_eq!(pad(&[1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5, 3, 3, 3]);
    assert_eq!(unpad(&[1, 2, 3, 4, 5, 3, 3, 3]).unwrap(), vec![1, 2, 3, 4, 5]);
    assert_eq!(unpad(&[0]), Err(Error::InvalidPadding));
}

#[test]
fn binary_message_round_trip() {
    let key = seeded_key(42, 128);
    let msg = hex!("00deadbeef00c0ffee").to_vec();

    let cipher = key.encrypt(msg.clone()).unwrap();
    assert_eq!(key.decrypt(cipher).unwrap(), Message::Bytes(msg));
}

#[test]
fn public_only_key_cannot_decrypt_or_sign() {
    let full = seeded_key(42, 128);
    let public = RsaKey::from_components(
        full.bits(),
        full.n().clone(),
        KeyParts::Public {
            e: full.e().unwrap().clone(),
        },
    );

    let cipher = public.encrypt(b"over the wire").unwrap();
    assert_eq!(
        public.decrypt(cipher.clone()).unwrap_err(),
        Error::MissingKeyPart(KeyPart::Private)
    );
    assert_eq!(
        public.sign(b"over the wire").unwrap_err(),
        Error::MissingKeyPart(KeyPart::Private)
    );

    // The matching full key still opens it.
    assert_eq!(
        full.decrypt(cipher).unwrap(),
        Message::Bytes(b"over the wire".to_vec())
    );
}

#[test]
fn signature_from_other_key_does_not_match() {
    let key = seeded_key(42, 128);
    let other = seeded_key(7, 128);

    let sig = other.sign(b"attack at dawn").unwrap();
    assert!(!key.verify_matches(b"attack at dawn", sig).unwrap_or(false));
}

#[test]
fn generation_is_deterministic_under_a_fixed_seed() {
    let a = seeded_key(42, 96);
    let b = seeded_key(42, 96);
    assert_eq!(a, b);
}
