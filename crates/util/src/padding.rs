//! Reversible tail padding for block ciphers.
//!
//! The scheme is ISO/IEC 7816-4: a single `0x80` marker byte followed by as
//! many zero bytes as it takes to reach a multiple of the block size. An input
//! that is already aligned gains a whole block, so padding can always be
//! removed again whatever the content of the data.

use tracing::debug;
use vaultbits_buffers::extend;

/// First byte of every padding run.
pub const MARKER: u8 = 0x80;

/// Error type for padding operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PaddingError {
    /// Block size of zero.
    #[error("block size must be at least 1")]
    InvalidBlockSize,
    /// Padded data must be a positive multiple of the block size.
    #[error("padded length {0} is not a positive multiple of the block size")]
    InvalidLength(usize),
    /// The last block does not end in a marker followed by zeros.
    #[error("invalid padding")]
    InvalidPadding,
}

/// Appends padding to `data` so its length becomes a multiple of `block_size`.
///
/// # Example
///
/// ```
/// use vaultbits_util::padding::pad;
///
/// assert_eq!(pad(&[1, 2, 3], 4).unwrap(), vec![1, 2, 3, 0x80]);
/// assert_eq!(pad(&[1, 2, 3, 4], 4).unwrap(), vec![1, 2, 3, 4, 0x80, 0, 0, 0]);
/// ```
pub fn pad(data: &[u8], block_size: usize) -> Result<Vec<u8>, PaddingError> {
    if block_size == 0 {
        debug!("padding block size is zero");
        return Err(PaddingError::InvalidBlockSize);
    }
    let pad_len = block_size - data.len() % block_size;
    let mut out = extend(data, pad_len, 0);
    out[data.len()] = MARKER;
    Ok(out)
}

/// Strips padding added by [`pad`], returning the original data.
///
/// Only the last block is searched for the marker.
///
/// # Example
///
/// ```
/// use vaultbits_util::padding::{pad, unpad};
///
/// let padded = pad(b"secret", 8).unwrap();
/// assert_eq!(unpad(&padded, 8).unwrap(), b"secret");
/// ```
pub fn unpad(data: &[u8], block_size: usize) -> Result<&[u8], PaddingError> {
    if block_size == 0 {
        debug!("padding block size is zero");
        return Err(PaddingError::InvalidBlockSize);
    }
    let length = data.len();
    if length == 0 || length % block_size != 0 {
        debug!(length, block_size, "padded data has bad length");
        return Err(PaddingError::InvalidLength(length));
    }

    let start = length - block_size;
    let tail = &data[start..];
    match tail.iter().rposition(|&b| b != 0) {
        Some(marker) if tail[marker] == MARKER => Ok(&data[..start + marker]),
        _ => {
            debug!(length, block_size, "padding marker not found");
            Err(PaddingError::InvalidPadding)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_pad_empty() {
        assert_eq!(pad(&[], 4).unwrap(), vec![0x80, 0, 0, 0]);
    }

    #[test]
    fn test_block_size_one() {
        assert_eq!(pad(&[7, 7], 1).unwrap(), vec![7, 7, 0x80]);
        assert_eq!(unpad(&[7, 7, 0x80], 1).unwrap(), &[7, 7]);
    }

    #[test]
    fn test_zero_block_size() {
        assert_eq!(pad(&[1], 0), Err(PaddingError::InvalidBlockSize));
        assert_eq!(unpad(&[1], 0), Err(PaddingError::InvalidBlockSize));
    }

    #[test]
    fn test_data_ending_in_marker_and_zeros() {
        let data = [0x80, 0x00, 0x00];
        let padded = pad(&data, 4).unwrap();
        assert_eq!(padded, vec![0x80, 0x00, 0x00, 0x80]);
        assert_eq!(unpad(&padded, 4).unwrap(), &data);
    }

    #[test]
    fn test_unpad_bad_length() {
        assert_eq!(unpad(&[], 4), Err(PaddingError::InvalidLength(0)));
        assert_eq!(unpad(&[0x80, 0, 0], 4), Err(PaddingError::InvalidLength(3)));
    }

    #[test]
    fn test_unpad_all_zero_block() {
        assert_eq!(unpad(&[0, 0, 0, 0], 4), Err(PaddingError::InvalidPadding));
    }

    #[test]
    fn test_unpad_wrong_marker() {
        assert_eq!(unpad(&[1, 2, 0x7f, 0], 4), Err(PaddingError::InvalidPadding));
    }

    #[test]
    fn test_marker_outside_last_block_is_rejected() {
        assert_eq!(
            unpad(&[0x80, 0, 0, 0, 0, 0, 0, 0], 4),
            Err(PaddingError::InvalidPadding)
        );
    }

    #[test]
    #[traced_test]
    fn test_rejection_is_logged() {
        let _ = unpad(&[1, 2, 3, 4], 4);
        assert!(logs_contain("padding marker not found"));
    }

    #[test]
    #[traced_test]
    fn test_zero_block_size_is_logged() {
        let _ = pad(&[1], 0);
        assert!(logs_contain("padding block size is zero"));
    }
}
