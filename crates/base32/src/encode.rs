//! Alphabet-generic base32 encoder.

use tracing::trace;
use vaultbits_buffers::{alloc, fill};
use zeroize::Zeroizing;

use crate::alphabet::Alphabet;
use crate::constants::PAD_BYTE;
use crate::length::encoded_len;
use crate::Base32Error;

/// Encodes `bytes` with the given alphabet, optionally padding with `=` to a
/// multiple of 8 characters.
///
/// The input is read as one most-significant-bit-first stream and cut into
/// 5-bit groups; the last group is zero-filled on its low bits. Empty input
/// always encodes to an empty string.
///
/// # Example
///
/// ```
/// use vaultbits_base32::{encode, Alphabet};
///
/// assert_eq!(encode(b"fo", &Alphabet::STANDARD, true), "MZXQ====");
/// assert_eq!(encode(b"fo", &Alphabet::STANDARD, false), "MZXQ");
/// assert_eq!(encode(b"f", &Alphabet::SPELL_SAFE, true), "Jj======");
/// ```
pub fn encode(bytes: &[u8], alphabet: &Alphabet, padding: bool) -> String {
    let length = bytes.len();
    if length == 0 {
        return String::new();
    }

    let data_len = encoded_len(length, false);
    let total_len = encoded_len(length, padding);
    let mut out = Zeroizing::new(alloc(total_len));

    // Unconsumed low bits of `bytes[index]`.
    let mut bits_left: u32 = 8;
    let mut index = 0;

    for slot in out[..data_len].iter_mut() {
        let group = if bits_left > 5 {
            bits_left -= 5;
            (u32::from(bytes[index]) >> bits_left) & 0x1f
        } else {
            let need = 5 - bits_left;
            let current = u32::from(bytes[index]) & ((1 << bits_left) - 1);
            index += 1;
            if index < length {
                bits_left = 8 - need;
                (current << need) | (u32::from(bytes[index]) >> bits_left)
            } else {
                current << need
            }
        };
        *slot = alphabet.value_to_char(group as u8);
    }

    fill(&mut out, data_len..total_len, PAD_BYTE);

    let mut encoded = String::with_capacity(total_len);
    encoded.extend(out.iter().map(|&c| char::from(c)));
    trace!(
        alphabet = alphabet.name(),
        bytes = length,
        chars = total_len,
        "encoded base32"
    );
    encoded
}

/// Like [`encode`], but reports an absent input as [`Base32Error::NullInput`]
/// instead of treating it as empty.
///
/// # Example
///
/// ```
/// use vaultbits_base32::{encode_opt, Alphabet, Base32Error};
///
/// assert_eq!(encode_opt(Some(&b""[..]), &Alphabet::STANDARD, true).unwrap(), "");
/// assert_eq!(
///     encode_opt(None, &Alphabet::STANDARD, true),
///     Err(Base32Error::NullInput)
/// );
/// ```
pub fn encode_opt(
    bytes: Option<&[u8]>,
    alphabet: &Alphabet,
    padding: bool,
) -> Result<String, Base32Error> {
    let bytes = bytes.ok_or(Base32Error::NullInput)?;
    Ok(encode(bytes, alphabet, padding))
}
