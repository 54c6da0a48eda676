//! The fixed block-padding transform applied to byte messages.

use alloc::vec::Vec;

use crate::errors::{Error, Result};

/// Width of the padding block in bytes.
pub const BLOCK_SIZE: usize = 8;

/// Appends block padding to `input`.
///
/// The pad length is `BLOCK_SIZE - len % BLOCK_SIZE`, always in
/// `[1, BLOCK_SIZE]`: input whose length is already a block multiple
/// receives a full block of padding. Each appended byte equals the pad
/// length, so the output length is a strict multiple of [`BLOCK_SIZE`] and
/// unpadding is unambiguous.
pub fn pad(input: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - input.len() % BLOCK_SIZE;
    let mut out = Vec::with_capacity(input.len() + pad_len);
    out.extend_from_slice(input);
    out.extend(core::iter::repeat(pad_len as u8).take(pad_len));
    out
}

/// Strips the padding appended by [`pad`].
///
/// Validation is strict: the declared pad length must be in
/// `[1, BLOCK_SIZE]`, must not exceed the input length, and every one of
/// the trailing pad bytes must equal it. Looser unpadders accept any
/// trailing bytes under a valid declared length; this one rejects them
/// with [`Error::InvalidPadding`].
pub fn unpad(input: &[u8]) -> Result<Vec<u8>> {
    let pad_len = match input.last() {
        Some(&last) => last as usize,
        None => return Err(Error::InvalidPadding),
    };

    if pad_len == 0 || pad_len > BLOCK_SIZE || pad_len > input.len() {
        return Err(Error::InvalidPadding);
    }

    let (rest, padding) = input.split_at(input.len() - pad_len);
    if padding.iter().any(|&byte| byte as usize != pad_len) {
        return Err(Error::InvalidPadding);
    }

    Ok(rest.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_partial_block() {
        assert_eq!(pad(&[1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5, 3, 3, 3]);
    }

    #[test]
    fn pad_empty_input() {
        assert_eq!(pad(&[]), vec![8; 8]);
    }

    #[test]
    fn pad_whole_block_appends_full_block() {
        let input = [7u8; 8];
        let padded = pad(&input);
        assert_eq!(padded.len(), 16);
        assert_eq!(&padded[8..], &[8u8; 8]);
    }

    #[test]
    fn unpad_inverts_pad() {
        for len in 0..=64 {
            let input: Vec<u8> = (0..len).map(|i| i as u8 + 1).collect();
            assert_eq!(unpad(&pad(&input)).unwrap(), input, "len {}", len);
        }
    }

    #[test]
    fn unpad_rejects_zero_pad_byte() {
        assert_eq!(unpad(&[0]), Err(Error::InvalidPadding));
    }

    #[test]
    fn unpad_rejects_oversized_pad_byte() {
        assert_eq!(unpad(&[1, 2, 3, 9]), Err(Error::InvalidPadding));
    }

    #[test]
    fn unpad_rejects_pad_longer_than_input() {
        assert_eq!(unpad(&[5, 7]), Err(Error::InvalidPadding));
    }

    #[test]
    fn unpad_rejects_empty_input() {
        assert_eq!(unpad(&[]), Err(Error::InvalidPadding));
    }

    #[test]
    fn unpad_rejects_inconsistent_pad_bytes() {
        // Declared pad length 3, but only the last byte matches.
        assert_eq!(
            unpad(&[1, 2, 3, 4, 5, 1, 2, 3]),
            Err(Error::InvalidPadding)
        );
    }
}
