//! Deterministic pseudo-random bit generators.
//!
//! Two algorithms are available: SplitMix64 and xoroshiro128++. Both are
//! reproducible from a `u64` seed on every platform, which makes them useful
//! for test vectors, shuffles and jitter. They are not cryptographically
//! secure and must never produce key material.
//!
//! # Example
//!
//! ```
//! use rand::Rng;
//! use vaultbits_util::prng::{BitGenerator, PrngKind};
//!
//! let mut a = BitGenerator::new(PrngKind::Xoroshiro, 42);
//! let mut b = BitGenerator::new(PrngKind::Xoroshiro, 42);
//! assert_eq!(a.gen::<u64>(), b.gen::<u64>());
//! assert!(a.gen_range(0..10) < 10);
//! ```

mod generator;

pub use generator::{splitmix, xoroshiro, BitGenerator};

use serde::{Deserialize, Serialize};

/// Selects a generator algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrngKind {
    /// SplitMix64: one 64-bit word of state.
    #[default]
    SplitMix,
    /// xoroshiro128++: 128 bits of state expanded from the seed with SplitMix64.
    Xoroshiro,
}
