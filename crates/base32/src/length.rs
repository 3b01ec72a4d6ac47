//! Encoded and decoded length arithmetic.

use crate::constants::PAD_BYTE;
use crate::Base32Error;

/// Number of characters produced when encoding `byte_len` bytes.
///
/// Without padding this is `ceil(byte_len * 8 / 5)`; with padding it is rounded
/// up to the next multiple of 8.
///
/// # Example
///
/// ```
/// use vaultbits_base32::encoded_len;
///
/// assert_eq!(encoded_len(0, true), 0);
/// assert_eq!(encoded_len(1, false), 2);
/// assert_eq!(encoded_len(1, true), 8);
/// assert_eq!(encoded_len(6, true), 16);
/// ```
pub fn encoded_len(byte_len: usize, padding: bool) -> usize {
    let tail = byte_len % 5;
    let chars = (byte_len / 5) * 8 + (tail * 8).div_ceil(5);
    if padding {
        chars.div_ceil(8) * 8
    } else {
        chars
    }
}

/// Shape of a validated encoded string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layout {
    /// Characters before the trailing padding.
    pub data_len: usize,
    /// Bytes the data characters decode to.
    pub byte_len: usize,
}

/// Validates the length rules of an encoded string.
pub(crate) fn layout(encoded: &[u8]) -> Result<Layout, Base32Error> {
    let length = encoded.len();
    let data_len = encoded
        .iter()
        .rposition(|&c| c != PAD_BYTE)
        .map_or(0, |i| i + 1);

    if data_len == 0 {
        return Ok(Layout {
            data_len: 0,
            byte_len: 0,
        });
    }

    let padded = data_len != length;
    if matches!(data_len % 8, 1 | 3 | 6) || (padded && length % 8 != 0) {
        return Err(Base32Error::InvalidLength(length));
    }

    let byte_len = (data_len / 8) * 5 + (data_len % 8) * 5 / 8;
    Ok(Layout { data_len, byte_len })
}

/// Number of bytes `encoded` decodes to, after checking its length rules.
///
/// Characters are not inspected; an invalid symbol is only detected by a decode.
///
/// # Example
///
/// ```
/// use vaultbits_base32::{decoded_len, Base32Error};
///
/// assert_eq!(decoded_len("MZXW6YTBOI======").unwrap(), 6);
/// assert_eq!(decoded_len("").unwrap(), 0);
/// assert_eq!(decoded_len("MZX"), Err(Base32Error::InvalidLength(3)));
/// ```
pub fn decoded_len(encoded: &str) -> Result<usize, Base32Error> {
    layout(encoded.as_bytes()).map(|layout| layout.byte_len)
}
