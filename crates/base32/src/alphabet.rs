//! Base32 alphabets and their inverse lookup tables.

use crate::constants::{ALPHABET_BYTES, ALPHABET_SPELL_SAFE_BYTES, INVALID, TABLE_BASE};
use crate::Base32Error;

const STANDARD_TABLE_LEN: usize = (b'Z' - TABLE_BASE) as usize + 1;
const SPELL_SAFE_TABLE_LEN: usize = (b'x' - TABLE_BASE) as usize + 1;

/// Inverse table for the standard alphabet, indexed by `codepoint - TABLE_BASE`.
const STANDARD_VALUES: [u8; STANDARD_TABLE_LEN] = build_values(ALPHABET_BYTES);

/// Inverse table for the spell-safe alphabet, indexed by `codepoint - TABLE_BASE`.
const SPELL_SAFE_VALUES: [u8; SPELL_SAFE_TABLE_LEN] = build_values(ALPHABET_SPELL_SAFE_BYTES);

const fn build_values<const N: usize>(chars: &[u8; 32]) -> [u8; N] {
    let mut table = [INVALID; N];
    let mut i = 0;
    while i < 32 {
        table[(chars[i] - TABLE_BASE) as usize] = i as u8;
        i += 1;
    }
    table
}

/// A 32-symbol alphabet together with its character-to-value table.
///
/// Both directions live in one value so the encode and decode loops are
/// written once and parametrized over the alphabet.
///
/// # Example
///
/// ```
/// use vaultbits_base32::Alphabet;
///
/// let alphabet = Alphabet::STANDARD;
/// assert_eq!(alphabet.value_to_char(12), b'M');
/// assert_eq!(alphabet.char_to_value(b'M').unwrap(), 12);
/// assert!(alphabet.char_to_value(b'm').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    name: &'static str,
    chars: &'static [u8; 32],
    values: &'static [u8],
}

impl Alphabet {
    /// RFC 4648 alphabet, `A`-`Z` followed by `2`-`7`.
    pub const STANDARD: Alphabet = Alphabet {
        name: "standard",
        chars: ALPHABET_BYTES,
        values: &STANDARD_VALUES,
    };

    /// Spell-safe alphabet for values meant to be read aloud or typed by hand.
    pub const SPELL_SAFE: Alphabet = Alphabet {
        name: "spell_safe",
        chars: ALPHABET_SPELL_SAFE_BYTES,
        values: &SPELL_SAFE_VALUES,
    };

    /// Short human readable name, used in log events.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The 32 symbols, indexed by 5-bit value.
    pub fn chars(&self) -> &'static [u8; 32] {
        self.chars
    }

    /// Maps a 5-bit value to its symbol. Only the low five bits of `value` are used.
    #[inline]
    pub fn value_to_char(&self, value: u8) -> u8 {
        self.chars[(value & 0x1f) as usize]
    }

    /// Maps a symbol back to its 5-bit value.
    ///
    /// Bytes below the table base, past the end of the table, or landing on an
    /// unused slot are all reported as [`Base32Error::InvalidCharacter`].
    /// Lookup time depends on the input; base32 payloads are not treated as secret.
    #[inline]
    pub fn char_to_value(&self, c: u8) -> Result<u8, Base32Error> {
        let value = c
            .checked_sub(TABLE_BASE)
            .and_then(|offset| self.values.get(offset as usize).copied())
            .unwrap_or(INVALID);
        if value == INVALID {
            return Err(Base32Error::InvalidCharacter(c));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_invert_chars() {
        for alphabet in [Alphabet::STANDARD, Alphabet::SPELL_SAFE] {
            for (value, &c) in alphabet.chars().iter().enumerate() {
                assert_eq!(alphabet.char_to_value(c).unwrap() as usize, value);
                assert_eq!(alphabet.value_to_char(value as u8), c);
            }
        }
    }

    #[test]
    fn test_table_slot_counts() {
        let used = |values: &[u8]| values.iter().filter(|&&v| v != INVALID).count();
        assert_eq!(used(&STANDARD_VALUES), 32);
        assert_eq!(used(&SPELL_SAFE_VALUES), 32);
    }

    #[test]
    fn test_below_base_is_invalid() {
        // '0' and '1' sit just below the table base.
        for c in [b'0', b'1', b' ', 0u8] {
            assert_eq!(
                Alphabet::STANDARD.char_to_value(c),
                Err(Base32Error::InvalidCharacter(c))
            );
        }
    }

    #[test]
    fn test_above_table_is_invalid() {
        assert!(Alphabet::STANDARD.char_to_value(b'a').is_err());
        assert!(Alphabet::SPELL_SAFE.char_to_value(b'y').is_err());
        assert!(Alphabet::SPELL_SAFE.char_to_value(0xc3).is_err());
    }

    #[test]
    fn test_value_zero_is_not_the_sentinel() {
        assert_eq!(Alphabet::STANDARD.char_to_value(b'A').unwrap(), 0);
        assert_eq!(Alphabet::SPELL_SAFE.char_to_value(b'2').unwrap(), 0);
        // Unused slot between '7' and 'A'.
        assert!(Alphabet::STANDARD.char_to_value(b'8').is_err());
    }

    #[test]
    fn test_spell_safe_excludes_ambiguous() {
        for c in b"01OoIiLlAEUaeu" {
            assert!(!Alphabet::SPELL_SAFE.chars().contains(c));
        }
    }

    #[test]
    fn test_case_is_significant() {
        assert!(Alphabet::STANDARD.char_to_value(b'm').is_err());
        assert_eq!(Alphabet::SPELL_SAFE.char_to_value(b'J').unwrap(), 12);
        assert_eq!(Alphabet::SPELL_SAFE.char_to_value(b'j').unwrap(), 24);
    }

    #[test]
    fn test_names_match_config_spelling() {
        assert_eq!(Alphabet::STANDARD.name(), "standard");
        assert_eq!(Alphabet::SPELL_SAFE.name(), "spell_safe");
    }
}
