// SPDX-License-Identifier: MIT

use parsum::generate::generate_vectors;
use parsum::{BenchConfig, VectorSet};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Hand-built vector set with known sums; see [`tiny_vector_sums`].
pub fn tiny_vector_set() -> VectorSet {
    vec![vec![1, 2, 3], vec![-5, 5, 0], vec![1000, -1000]]
}

/// The sums of [`tiny_vector_set`], computed by hand.
pub fn tiny_vector_sums() -> Vec<i64> {
    vec![6, 0, 0]
}

/// Deterministic random vector set for a given seed, with elements in the
/// benchmark's default `[-1000, 1000]` range.
pub fn seeded_vector_set(
    seed: u64,
    num_vectors: usize,
    vector_size: usize,
) -> VectorSet {
    let config = BenchConfig {
        num_vectors,
        vector_size,
        ..BenchConfig::default()
    };
    generate_vectors(&mut StdRng::seed_from_u64(seed), &config)
}

/// Single-threaded reference sums, accumulated independently of the code
/// under test.
pub fn serial_sums(vectors: &VectorSet) -> Vec<i64> {
    vectors
        .iter()
        .map(|vector| vector.iter().map(|&value| value as i64).sum())
        .collect()
}
