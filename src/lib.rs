// SPDX-License-Identifier: MIT

//! Microbenchmark measuring how a parallel reduction (summing the elements
//! of many independent vectors) scales with thread count.
//!
//! Work is divided by [`partition`] into contiguous index ranges, one per
//! worker; the [`executor`] spawns a fresh set of OS threads for every
//! timed pass and joins them all before reporting. Partitions are disjoint,
//! so workers write their result slots without any locking; the only
//! synchronized resource is the progress log shared for diagnostics.

pub mod config;
pub mod error;
pub mod executor;
pub mod generate;
pub mod partition;
pub mod report;
pub mod validate;
pub mod worker;

pub use config::BenchConfig;
pub use error::BenchError;

/// Collection of input vectors. Immutable for the duration of a run, so all
/// workers may read it concurrently without synchronization.
pub type VectorSet = Vec<Vec<i32>>;

/// One 64-bit sum per input vector, indexed identically to [`VectorSet`].
pub type SumResults = Vec<i64>;
