//! Raw RSA transform: modular exponentiation bounded by the modulus.

use num_bigint::BigUint;

use crate::errors::{Error, Result};

/// ⚠️ Raw RSA transform of `value` under `(exponent, modulus)`.
///
/// Computes `value^exponent mod modulus` with no padding. Encryption and
/// verification pass the public exponent, decryption and signing the
/// private one. The value must already be reduced below the modulus.
#[inline]
pub(crate) fn rsa_transform(
    value: &BigUint,
    exponent: &BigUint,
    modulus: &BigUint,
) -> Result<BigUint> {
    if value >= modulus {
        return Err(Error::ModulusOverflow);
    }

    Ok(value.modpow(exponent, modulus))
}
