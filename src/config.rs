// SPDX-License-Identifier: MIT

/// Parameters for one benchmark run.
///
/// `min_val` must not exceed `max_val`. The default configuration is the
/// fixed benchmark: 30000 vectors of 100 elements drawn from
/// `[-1000, 1000]`, measured with 1, 2 and 4 threads.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of vectors to generate and sum.
    pub num_vectors: usize,
    /// Number of elements in each vector.
    pub vector_size: usize,
    /// Lower bound (inclusive) of generated element values.
    pub min_val: i32,
    /// Upper bound (inclusive) of generated element values.
    pub max_val: i32,
    /// Thread counts to measure, in order.
    pub thread_counts: Vec<usize>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            num_vectors: 30_000,
            vector_size: 100,
            min_val: -1000,
            max_val: 1000,
            thread_counts: vec![1, 2, 4],
        }
    }
}
