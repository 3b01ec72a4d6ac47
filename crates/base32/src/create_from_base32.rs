//! Factory function for creating base32 decoders from options.

use crate::decode::decode;
use crate::options::Base32Options;
use crate::Base32Error;

/// Creates a base32 decoder bound to the alphabet in `options`.
///
/// The padding flag does not restrict decoding; padded and unpadded input are
/// both accepted.
///
/// # Example
///
/// ```
/// use vaultbits_base32::{create_from_base32, AlphabetKind, Base32Options};
///
/// let decode = create_from_base32(Some(Base32Options {
///     alphabet: AlphabetKind::SpellSafe,
///     ..Default::default()
/// }));
/// assert_eq!(decode("Jj======").unwrap(), [0x66]);
/// ```
pub fn create_from_base32(
    options: Option<Base32Options>,
) -> impl Fn(&str) -> Result<Vec<u8>, Base32Error> {
    let alphabet = options.unwrap_or_default().alphabet.alphabet();

    move |encoded: &str| decode(encoded, &alphabet)
}
