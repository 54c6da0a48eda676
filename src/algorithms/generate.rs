//! Key component generation: exponent search and prime sampling.

use num_bigint::prime::probably_prime;
use num_bigint::{BigUint, IntoBigUint, ModInverse, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand_core::CryptoRngCore;

use crate::errors::{Error, Result};

/// Miller-Rabin rounds applied to each sampled prime candidate.
const PRIME_TEST_ROUNDS: usize = 20;

/// The customary starting point for the public exponent search.
const EXP: u64 = 65_537;

/// Raw key material produced by generation, before it is wrapped in a key.
#[derive(Debug)]
pub(crate) struct RsaKeyComponents {
    pub(crate) n: BigUint,
    pub(crate) e: BigUint,
    pub(crate) d: BigUint,
}

/// Derives `n`, `e` and `d` from two distinct primes.
///
/// The exponent search starts from `exponent_hint` when given, otherwise
/// from 65537 (falling back to 3 when the totient is smaller than that),
/// and steps by two until a candidate coprime to the totient is found. The
/// search fails once the candidate reaches the totient, which signals that
/// the supplied primes are unusable.
///
/// Primality of `p` and `q` is the caller's responsibility; it is not
/// re-checked here.
pub(crate) fn compute_key_components(
    p: &BigUint,
    q: &BigUint,
    exponent_hint: Option<BigUint>,
) -> Result<RsaKeyComponents> {
    let n = p * q;
    let totient = (p - BigUint::one()) * (q - BigUint::one());

    let mut e = match exponent_hint {
        Some(hint) => hint,
        None => {
            let fermat4 = BigUint::from(EXP);
            if fermat4 < totient {
                fermat4
            } else {
                BigUint::from(3u64)
            }
        }
    };

    let two = BigUint::from(2u64);
    loop {
        if e >= totient {
            return Err(Error::NoCoprimeExponent);
        }
        if e.gcd(&totient).is_one() {
            break;
        }
        e += &two;
    }

    let d = e
        .clone()
        .mod_inverse(&totient)
        .and_then(IntoBigUint::into_biguint)
        .ok_or(Error::NoCoprimeExponent)?;

    Ok(RsaKeyComponents { n, e, d })
}

/// Samples a probable prime from `[low, high)` with the given source.
///
/// Candidates are drawn uniformly from the range, forced odd and
/// Miller-Rabin tested. Termination depends on the range actually
/// containing primes; the caller supplies sensible bounds.
pub(crate) fn sample_prime<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    low: &BigUint,
    high: &BigUint,
) -> BigUint {
    loop {
        // Forcing the low bit can push an even candidate to `high` itself,
        // in which case it is out of range and redrawn.
        let candidate = rng.gen_biguint_range(low, high) | BigUint::one();
        if &candidate >= high {
            continue;
        }
        if probably_prime(&candidate, PRIME_TEST_ROUNDS) {
            return candidate;
        }
    }
}

/// As [`sample_prime`], but guaranteed different from `excluded`.
pub(crate) fn sample_distinct_prime<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    low: &BigUint,
    high: &BigUint,
    excluded: &BigUint,
) -> BigUint {
    loop {
        let candidate = sample_prime(rng, low, high);
        if &candidate != excluded {
            return candidate;
        }
    }
}
