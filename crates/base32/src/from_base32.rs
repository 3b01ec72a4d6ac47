//! Standard alphabet base32 decoding function.

use crate::alphabet::Alphabet;
use crate::decode::decode;
use crate::Base32Error;

/// Decodes a standard base32 string, padded or not, to bytes.
///
/// # Example
///
/// ```
/// use vaultbits_base32::from_base32;
///
/// assert_eq!(from_base32("MZXW6YTBOI======").unwrap(), b"foobar");
/// assert_eq!(from_base32("MZXW6YTBOI").unwrap(), b"foobar");
/// ```
pub fn from_base32(encoded: &str) -> Result<Vec<u8>, Base32Error> {
    decode(encoded, &Alphabet::STANDARD)
}
