//! Spell-safe alphabet base32 decoding function.

use crate::alphabet::Alphabet;
use crate::decode::decode;
use crate::Base32Error;

/// Decodes a spell-safe base32 string, padded or not, to bytes.
///
/// # Example
///
/// ```
/// use vaultbits_base32::from_base32_spell_safe;
///
/// assert_eq!(from_base32_spell_safe("Jj======").unwrap(), [0x66]);
/// ```
pub fn from_base32_spell_safe(encoded: &str) -> Result<Vec<u8>, Base32Error> {
    decode(encoded, &Alphabet::SPELL_SAFE)
}
