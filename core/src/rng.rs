//! Deterministic random number generation.
//!
//! RULE: Nothing in the pipeline may call any platform RNG.
//! All randomness flows through a SimRng seeded from the identity
//! string, so a fixed identity always replays the same statement.
//!
//! The seed derivation is pinned to an explicit FNV-1a hash rather
//! than the standard library's string hash. Default hashers are not
//! stable across releases; this one is fixed forever.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Stable 64-bit FNV-1a hash of the identity's UTF-8 bytes.
pub fn seed_from_identity(identity: &str) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in identity.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// The deterministic RNG for a single simulation run. One instance
/// is threaded through the whole run; a run never owns two.
pub struct SimRng {
    inner: Pcg64Mcg,
}

impl SimRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    pub fn for_identity(identity: &str) -> Self {
        Self::from_seed(seed_from_identity(identity))
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }
}
