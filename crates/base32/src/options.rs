//! Serializable codec configuration.

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;

/// Selects one of the built-in alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphabetKind {
    /// RFC 4648 alphabet.
    #[default]
    Standard,
    /// Spell-safe alphabet.
    SpellSafe,
}

impl AlphabetKind {
    /// The alphabet this kind stands for.
    pub fn alphabet(self) -> Alphabet {
        match self {
            AlphabetKind::Standard => Alphabet::STANDARD,
            AlphabetKind::SpellSafe => Alphabet::SPELL_SAFE,
        }
    }
}

/// Options for base32 encoders and decoders.
///
/// Missing fields take their defaults, so an empty document yields the
/// standard alphabet with padding.
///
/// # Example
///
/// ```
/// use vaultbits_base32::{AlphabetKind, Base32Options};
///
/// let options: Base32Options = serde_json::from_str(r#"{"alphabet":"spell_safe"}"#).unwrap();
/// assert_eq!(options.alphabet, AlphabetKind::SpellSafe);
/// assert!(options.padding);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Base32Options {
    /// Alphabet used in both directions.
    pub alphabet: AlphabetKind,
    /// Whether encoders pad to a multiple of 8 characters. Decoders accept
    /// both forms regardless.
    pub padding: bool,
}

impl Default for Base32Options {
    fn default() -> Self {
        Self {
            alphabet: AlphabetKind::Standard,
            padding: true,
        }
    }
}
