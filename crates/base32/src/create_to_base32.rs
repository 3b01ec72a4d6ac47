//! Factory function for creating base32 encoders from options.

use crate::encode::encode;
use crate::options::Base32Options;

/// Creates a base32 encoder bound to the given options.
///
/// # Arguments
///
/// * `options` - Alphabet and padding choice. Defaults to standard base32 with padding.
///
/// # Returns
///
/// A function that encodes a byte slice to a `String`.
///
/// # Example
///
/// ```
/// use vaultbits_base32::{create_to_base32, AlphabetKind, Base32Options};
///
/// let encode = create_to_base32(Some(Base32Options {
///     alphabet: AlphabetKind::SpellSafe,
///     padding: false,
/// }));
/// assert_eq!(encode(&[0x66]), "Jj");
/// ```
pub fn create_to_base32(options: Option<Base32Options>) -> impl Fn(&[u8]) -> String {
    let options = options.unwrap_or_default();
    let alphabet = options.alphabet.alphabet();
    let padding = options.padding;

    move |uint8: &[u8]| encode(uint8, &alphabet, padding)
}
