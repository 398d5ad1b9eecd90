// SPDX-License-Identifier: MIT

use crate::worker::sum_vector;
use crate::VectorSet;
use rand::Rng;
use thiserror::Error;

/// Number of indices re-checked after each pass.
pub const SPOT_CHECK_SAMPLES: usize = 10;

/// A sampled result that did not match its independent recomputation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("sum mismatch for vector {index}: expected {expected}, found {actual}")]
pub struct Mismatch {
    pub index: usize,
    pub expected: i64,
    pub actual: i64,
}

/// Spot-checks `sums` against the vectors they were computed from.
///
/// Samples [`SPOT_CHECK_SAMPLES`] indices uniformly with replacement and
/// recomputes each sampled sum from scratch. Reference sums are never
/// cached between checks, keeping every validation independent of earlier
/// ones. The first discrepancy is returned as a [`Mismatch`].
///
/// This is a probabilistic check, not exhaustive verification: a corrupted
/// entry outside the sample goes unnoticed. With 10 samples out of 30000
/// vectors a single bad entry is missed by one check with near certainty,
/// which is accepted for a diagnostic benchmark.
pub fn spot_check<R: Rng + ?Sized>(
    rng: &mut R,
    vectors: &VectorSet,
    sums: &[i64],
) -> Result<(), Mismatch> {
    debug_assert_eq!(vectors.len(), sums.len());

    if vectors.is_empty() {
        return Ok(());
    }

    for _ in 0..SPOT_CHECK_SAMPLES {
        let index = rng.gen_range(0..vectors.len());
        let expected = sum_vector(&vectors[index]);
        let actual = sums[index];
        if expected != actual {
            return Err(Mismatch {
                index,
                expected,
                actual,
            });
        }
    }
    Ok(())
}
