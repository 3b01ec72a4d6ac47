//! Alphabet-generic base32 decoder.

use tracing::{debug, trace};
use vaultbits_buffers::{alloc, clear};
use zeroize::Zeroizing;

use crate::alphabet::Alphabet;
use crate::length::layout;
use crate::Base32Error;

/// Decodes `encoded` with the given alphabet into a new buffer.
///
/// Trailing `=` padding is optional. Length rules are checked before any
/// character is looked up.
///
/// # Errors
///
/// - [`Base32Error::InvalidLength`] when the unpadded length leaves 1, 3 or 6
///   characters in the final group, or padding is present on a string whose
///   length is not a multiple of 8.
/// - [`Base32Error::InvalidCharacter`] on the first symbol outside the alphabet.
///
/// # Example
///
/// ```
/// use vaultbits_base32::{decode, Alphabet};
///
/// assert_eq!(decode("MZXW6YTBOI======", &Alphabet::STANDARD).unwrap(), b"foobar");
/// assert_eq!(decode("Jj", &Alphabet::SPELL_SAFE).unwrap(), b"f");
/// ```
pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, Base32Error> {
    let data = encoded.as_bytes();
    let layout = layout(data).inspect_err(|err| reject(alphabet, data.len(), err, None))?;

    let mut out = Zeroizing::new(alloc(layout.byte_len));
    accumulate(&data[..layout.data_len], alphabet, &mut out)
        .inspect_err(|(err, position)| reject(alphabet, data.len(), err, Some(*position)))
        .map_err(|(err, _)| err)?;

    trace!(
        alphabet = alphabet.name(),
        chars = data.len(),
        bytes = layout.byte_len,
        "decoded base32"
    );
    Ok(std::mem::take(&mut *out))
}

/// Decodes `encoded` into the front of `destination` and returns the number of
/// bytes written.
///
/// Only `destination[..n]` is written, where `n` is the returned count. If a
/// bad symbol is found part way through, the bytes already written are wiped
/// before the error is returned; the rest of `destination` is left alone.
///
/// # Errors
///
/// As [`decode`], plus [`Base32Error::DestinationTooSmall`] when `destination`
/// is shorter than the decoded length. Both length errors are raised before
/// anything is written.
///
/// # Example
///
/// ```
/// use vaultbits_base32::{decode_into, Alphabet};
///
/// let mut buf = [0xaa; 4];
/// let n = decode_into("MZXQ====", &Alphabet::STANDARD, &mut buf).unwrap();
/// assert_eq!(n, 2);
/// assert_eq!(buf, [b'f', b'o', 0xaa, 0xaa]);
/// ```
pub fn decode_into(
    encoded: &str,
    alphabet: &Alphabet,
    destination: &mut [u8],
) -> Result<usize, Base32Error> {
    let data = encoded.as_bytes();
    let layout = layout(data).inspect_err(|err| reject(alphabet, data.len(), err, None))?;

    if destination.len() < layout.byte_len {
        let err = Base32Error::DestinationTooSmall {
            required: layout.byte_len,
            available: destination.len(),
        };
        reject(alphabet, data.len(), &err, None);
        return Err(err);
    }

    let out = &mut destination[..layout.byte_len];
    if let Err((err, position)) = accumulate(&data[..layout.data_len], alphabet, out) {
        clear(out);
        reject(alphabet, data.len(), &err, Some(position));
        return Err(err);
    }

    trace!(
        alphabet = alphabet.name(),
        chars = data.len(),
        bytes = layout.byte_len,
        "decoded base32 into destination"
    );
    Ok(layout.byte_len)
}

/// Like [`decode`], but reports an absent input as [`Base32Error::NullInput`].
pub fn decode_opt(encoded: Option<&str>, alphabet: &Alphabet) -> Result<Vec<u8>, Base32Error> {
    let encoded = encoded.ok_or(Base32Error::NullInput)?;
    decode(encoded, alphabet)
}

/// Runs the 5-to-8 bit accumulation over unpadded `data`.
///
/// `out` must be exactly `floor(data.len() * 5 / 8)` bytes long. On failure the
/// error is paired with the offending character's position.
fn accumulate(data: &[u8], alphabet: &Alphabet, out: &mut [u8]) -> Result<(), (Base32Error, usize)> {
    let mut x = 0;
    let mut acc: u32 = 0;
    // Bits still missing from the byte being assembled in `acc`.
    let mut bits_needed: u32 = 8;

    for (position, &c) in data.iter().enumerate() {
        let value = u32::from(alphabet.char_to_value(c).map_err(|err| (err, position))?);
        if bits_needed > 5 {
            bits_needed -= 5;
            acc |= value << bits_needed;
        } else {
            let overflow = 5 - bits_needed;
            out[x] = (acc | (value >> overflow)) as u8;
            x += 1;
            bits_needed = 8 - overflow;
            acc = (value << bits_needed) & 0xff;
        }
    }

    // Leftover low bits are the encoder's zero fill and are not checked.
    if x < out.len() && bits_needed < 8 {
        out[x] = acc as u8;
    }
    Ok(())
}

fn reject(alphabet: &Alphabet, length: usize, err: &Base32Error, position: Option<usize>) {
    debug!(
        alphabet = alphabet.name(),
        length,
        position,
        error = %err,
        "rejected base32 input"
    );
}
