// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors surfaced by the benchmark library.
///
/// Validation mismatches are not part of this taxonomy: a failed spot-check
/// is reported and the remaining trials proceed, while these errors abort
/// the run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Work cannot be partitioned across fewer than one thread.
    #[error("thread count must be at least 1, got {0}")]
    InvalidThreadCount(usize),

    /// Writing report output failed.
    #[error("report output failed: {0}")]
    Io(#[from] std::io::Error),
}
