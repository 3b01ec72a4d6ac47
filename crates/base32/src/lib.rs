//! Base32 encoding and decoding for secret material.
//!
//! This crate provides a base32 codec with support for:
//! - The standard RFC 4648 alphabet
//! - A spell-safe alphabet without visually ambiguous symbols
//! - Optional `=` padding on output, tolerant decoding of either form
//! - Decoding into a caller supplied buffer
//!
//! Both alphabets run through the same bit-accumulation code; an [`Alphabet`]
//! value carries the lookup tables in both directions.
//!
//! # Example
//!
//! ```
//! use vaultbits_base32::{to_base32, from_base32};
//!
//! let data = b"hello world";
//! let encoded = to_base32(data);
//! let decoded = from_base32(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod alphabet;
mod constants;
mod create_from_base32;
mod create_to_base32;
mod decode;
mod encode;
mod from_base32;
mod from_base32_spell_safe;
mod length;
mod options;
mod to_base32;
mod to_base32_spell_safe;

pub use alphabet::Alphabet;
pub use constants::{
    ALPHABET, ALPHABET_BYTES, ALPHABET_SPELL_SAFE, ALPHABET_SPELL_SAFE_BYTES, PAD, PAD_BYTE,
};
pub use create_from_base32::create_from_base32;
pub use create_to_base32::create_to_base32;
pub use decode::{decode, decode_into, decode_opt};
pub use encode::{encode, encode_opt};
pub use from_base32::from_base32;
pub use from_base32_spell_safe::from_base32_spell_safe;
pub use length::{decoded_len, encoded_len};
pub use options::{AlphabetKind, Base32Options};
pub use to_base32::{to_base32, to_base32_unpadded};
pub use to_base32_spell_safe::{to_base32_spell_safe, to_base32_spell_safe_unpadded};

/// Error type for base32 operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base32Error {
    /// A required input was absent.
    #[error("base32 input is absent")]
    NullInput,
    /// The encoded length cannot represent a whole number of bytes, or padding
    /// is present on a string whose length is not a multiple of 8.
    #[error("invalid base32 string length {0}")]
    InvalidLength(usize),
    /// A byte outside the active alphabet.
    #[error("invalid base32 character {0:#04x}")]
    InvalidCharacter(u8),
    /// The caller supplied buffer cannot hold the decoded bytes.
    #[error("destination holds {available} bytes but {required} are needed")]
    DestinationTooSmall {
        /// Bytes the input decodes to.
        required: usize,
        /// Length of the destination buffer.
        available: usize,
    },
}
