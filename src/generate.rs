// SPDX-License-Identifier: MIT

use crate::config::BenchConfig;
use crate::VectorSet;
use rand::Rng;

/// Generates `config.num_vectors` vectors of `config.vector_size` elements,
/// each element drawn independently and uniformly from
/// `[config.min_val, config.max_val]`.
///
/// A fresh collection is returned on every call, so no data from an earlier
/// generation can leak into a new run. Pass a seeded
/// [`rand::rngs::StdRng`] for reproducible data.
pub fn generate_vectors<R: Rng + ?Sized>(
    rng: &mut R,
    config: &BenchConfig,
) -> VectorSet {
    (0..config.num_vectors)
        .map(|_| {
            (0..config.vector_size)
                .map(|_| rng.gen_range(config.min_val..=config.max_val))
                .collect()
        })
        .collect()
}
