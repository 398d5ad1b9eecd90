// SPDX-License-Identifier: MIT

use crate::error::BenchError;
use crate::partition::partition;
use crate::worker::{run_range, ProgressLog};
use crate::{SumResults, VectorSet};
use std::io::Write;
use std::thread;
use std::time::Instant;

/// Runs timed parallel sum passes over a fixed set of vectors.
///
/// The executor owns the results buffer and re-initializes it to zero at
/// the start of every pass, so repeated runs with different thread counts
/// never observe stale results from an earlier pass.
pub struct Executor<'a> {
    vectors: &'a VectorSet,
    sums: SumResults,
}

impl<'a> Executor<'a> {
    pub fn new(vectors: &'a VectorSet) -> Self {
        Executor {
            vectors,
            sums: Vec::new(),
        }
    }

    /// Executes one pass with `thread_count` workers and returns the
    /// elapsed wall-clock time in fractional milliseconds.
    ///
    /// One OS thread is spawned per partition, fresh for every pass, empty
    /// partitions included so worker ids stay dense in the progress log.
    /// The scope exit joins every worker before the clock stops, so no
    /// caller observes partial results. A panicking worker propagates out
    /// and aborts the pass.
    pub fn run<W: Write + Send>(
        &mut self,
        thread_count: usize,
        progress: &ProgressLog<W>,
    ) -> Result<f64, BenchError> {
        let partitions = partition(self.vectors.len(), thread_count)?;

        self.sums.clear();
        self.sums.resize(self.vectors.len(), 0);

        let start_time = Instant::now();

        thread::scope(|scope| {
            // Partitions are contiguous and ascending, so peeling each
            // worker's slice off the front keeps the writes disjoint.
            let mut remaining: &mut [i64] = &mut self.sums;
            for (index, range) in partitions.iter().enumerate() {
                let (out, rest) = remaining.split_at_mut(range.len());
                remaining = rest;

                let vectors = &self.vectors[range.clone()];
                let worker_id = index + 1;
                scope.spawn(move || {
                    run_range(worker_id, range, vectors, out, progress)
                });
            }
        });

        Ok(start_time.elapsed().as_secs_f64() * 1000.0)
    }

    /// Results of the most recent pass, indexed like the vector set.
    pub fn sums(&self) -> &[i64] {
        &self.sums
    }
}
