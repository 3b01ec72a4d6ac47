//! Standard alphabet base32 encoding functions.

use crate::alphabet::Alphabet;
use crate::encode::encode;

/// Encodes a byte slice to a standard base32 string with `=` padding.
///
/// # Example
///
/// ```
/// use vaultbits_base32::to_base32;
///
/// assert_eq!(to_base32(b"foobar"), "MZXW6YTBOI======");
/// ```
pub fn to_base32(uint8: &[u8]) -> String {
    encode(uint8, &Alphabet::STANDARD, true)
}

/// Encodes a byte slice to a standard base32 string without padding.
///
/// # Example
///
/// ```
/// use vaultbits_base32::to_base32_unpadded;
///
/// assert_eq!(to_base32_unpadded(b"foobar"), "MZXW6YTBOI");
/// ```
pub fn to_base32_unpadded(uint8: &[u8]) -> String {
    encode(uint8, &Alphabet::STANDARD, false)
}
