//! Conversions between unsigned big integers and big-endian byte sequences.

use alloc::vec;
use alloc::vec::Vec;

use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::errors::{Error, Result};

/// Interprets `bytes` as a big-endian unsigned integer.
///
/// Leading zero bytes carry no numeric information and are lost; callers
/// that need a fixed width restore it with [`uint_to_be_pad`].
#[inline]
pub(crate) fn uint_from_be_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Returns a new vector of the given length, with 0s left padded.
///
/// An input longer than `padded_len` means the value was at least as large
/// as the modulus bounding it, hence the overflow error.
#[inline]
pub(crate) fn left_pad(input: &[u8], padded_len: usize) -> Result<Vec<u8>> {
    if input.len() > padded_len {
        return Err(Error::ModulusOverflow);
    }

    let mut out = vec![0u8; padded_len];
    out[padded_len - input.len()..].copy_from_slice(input);
    Ok(out)
}

/// Converts input to the new vector of the given length, using BE and with 0s left padded.
#[inline]
pub(crate) fn uint_to_be_pad(input: BigUint, padded_len: usize) -> Result<Vec<u8>> {
    left_pad(&input.to_bytes_be(), padded_len)
}

/// Converts input to the new vector of the given length, using BE and with 0s left padded.
#[inline]
pub(crate) fn uint_to_zeroizing_be_pad(input: BigUint, padded_len: usize) -> Result<Vec<u8>> {
    let m = Zeroizing::new(input);
    let m = Zeroizing::new(m.to_bytes_be());
    left_pad(&m, padded_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_pad() {
        const INPUT_LEN: usize = 3;
        let input = vec![0u8; INPUT_LEN];

        // input len < padded len
        let padded = left_pad(&input, INPUT_LEN + 1).unwrap();
        assert_eq!(padded.len(), INPUT_LEN + 1);

        // input len == padded len
        let padded = left_pad(&input, INPUT_LEN).unwrap();
        assert_eq!(padded.len(), INPUT_LEN);

        // input len > padded len
        let padded = left_pad(&input, INPUT_LEN - 1);
        assert_eq!(padded, Err(Error::ModulusOverflow));
    }

    #[test]
    fn uint_round_trip_is_minimal_width() {
        let bytes = [0u8, 0, 1, 2, 3];
        let int = uint_from_be_bytes(&bytes);
        // The two leading zeros are lost on the way back.
        assert_eq!(int.to_bytes_be(), vec![1, 2, 3]);
        // A fixed-width expansion restores them.
        assert_eq!(uint_to_be_pad(int, 5).unwrap(), bytes.to_vec());
    }

    #[test]
    fn zero_encodes_as_single_byte() {
        let int = uint_from_be_bytes(&[0, 0, 0]);
        assert_eq!(int.to_bytes_be(), vec![0]);
    }
}
