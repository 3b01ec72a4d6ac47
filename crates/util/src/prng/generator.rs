use rand::{Error, RngCore, SeedableRng};
use rand_xoshiro::{SplitMix64, Xoroshiro128PlusPlus};

use super::PrngKind;

/// Creates a SplitMix64 generator whose state starts at `seed`.
pub fn splitmix(seed: u64) -> SplitMix64 {
    SplitMix64::from_seed(seed.to_le_bytes())
}

/// Creates a xoroshiro128++ generator.
///
/// The two state words are the first two SplitMix64 outputs for `seed`.
pub fn xoroshiro(seed: u64) -> Xoroshiro128PlusPlus {
    let mut expand = splitmix(seed);
    let mut state = [0u8; 16];
    state[..8].copy_from_slice(&expand.next_u64().to_le_bytes());
    state[8..].copy_from_slice(&expand.next_u64().to_le_bytes());
    Xoroshiro128PlusPlus::from_seed(state)
}

/// A seeded generator of either kind.
///
/// Implements [`RngCore`], so the whole `rand::Rng` API is available on it.
#[derive(Debug, Clone)]
pub enum BitGenerator {
    /// SplitMix64 generator.
    SplitMix(SplitMix64),
    /// xoroshiro128++ generator.
    Xoroshiro(Xoroshiro128PlusPlus),
}

impl BitGenerator {
    /// Creates a generator of the given kind from a seed.
    pub fn new(kind: PrngKind, seed: u64) -> Self {
        match kind {
            PrngKind::SplitMix => BitGenerator::SplitMix(splitmix(seed)),
            PrngKind::Xoroshiro => BitGenerator::Xoroshiro(xoroshiro(seed)),
        }
    }

    /// The algorithm behind this generator.
    pub fn kind(&self) -> PrngKind {
        match self {
            BitGenerator::SplitMix(_) => PrngKind::SplitMix,
            BitGenerator::Xoroshiro(_) => PrngKind::Xoroshiro,
        }
    }

    /// Returns the top `bits` bits of the next 64-bit output.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= bits <= 64`.
    pub fn next_bits(&mut self, bits: u32) -> u64 {
        assert!((1..=64).contains(&bits), "bits must be in 1..=64");
        self.next_u64() >> (64 - bits)
    }
}

impl RngCore for BitGenerator {
    fn next_u32(&mut self) -> u32 {
        match self {
            BitGenerator::SplitMix(rng) => rng.next_u32(),
            BitGenerator::Xoroshiro(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            BitGenerator::SplitMix(rng) => rng.next_u64(),
            BitGenerator::Xoroshiro(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            BitGenerator::SplitMix(rng) => rng.fill_bytes(dest),
            BitGenerator::Xoroshiro(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
