//! vaultbits-util - Sibling primitives of the vaultbits codec
//!
//! - [`padding`]: reversible block-cipher tail padding
//! - [`varint`]: variable-length unsigned integer packer
//! - [`prng`]: deterministic SplitMix64 and xoroshiro128++ bit generators

pub mod padding;
pub mod prng;
pub mod varint;

// Re-exports for convenience
pub use padding::{pad, unpad, PaddingError};
pub use prng::{BitGenerator, PrngKind};
pub use varint::{decode_varint, encode_varint, read_varint, varint_len, write_varint, VarintError};
