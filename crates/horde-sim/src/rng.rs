//! Deterministic seed derivation for the stochastic phases.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// SplitMix64 finalizer, used to decorrelate derived seeds.
pub(crate) fn splitmix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Seed for one sub-step's movement pass.
pub(crate) fn substep_seed(seed: u64, substep: u64) -> u64 {
    splitmix64(seed ^ substep.wrapping_mul(0xD6E8_FEB8_6659_FD93))
}

/// Independent RNG stream for one grid row within a movement pass.
pub(crate) fn row_rng(seed: u64, row: i32) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(splitmix64(
        seed ^ (row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15),
    ))
}
