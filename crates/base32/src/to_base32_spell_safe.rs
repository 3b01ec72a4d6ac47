//! Spell-safe alphabet base32 encoding functions.

use crate::alphabet::Alphabet;
use crate::encode::encode;

/// Encodes a byte slice with the spell-safe alphabet and `=` padding.
///
/// # Example
///
/// ```
/// use vaultbits_base32::to_base32_spell_safe;
///
/// assert_eq!(to_base32_spell_safe(&[0x66]), "Jj======");
/// ```
pub fn to_base32_spell_safe(uint8: &[u8]) -> String {
    encode(uint8, &Alphabet::SPELL_SAFE, true)
}

/// Encodes a byte slice with the spell-safe alphabet, without padding.
pub fn to_base32_spell_safe_unpadded(uint8: &[u8]) -> String {
    encode(uint8, &Alphabet::SPELL_SAFE, false)
}
