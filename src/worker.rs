// SPDX-License-Identifier: MIT

use std::io::{self, Write};
use std::ops::Range;
use std::sync::Mutex;

/// Sums a vector's elements into a 64-bit accumulator.
///
/// Widening each element before accumulation keeps the worst case
/// (`vector_size * max(|min_val|, |max_val|)`) far from overflow.
pub fn sum_vector(values: &[i32]) -> i64 {
    values.iter().map(|&value| value as i64).sum()
}

/// Mutex-guarded sink for per-worker completion lines.
///
/// The lock is held for a whole line, so messages from concurrent workers
/// never interleave character-by-character. Ordering across workers is not
/// guaranteed. This channel is diagnostic only; write failures are dropped.
pub struct ProgressLog<W: Write> {
    sink: Mutex<W>,
}

impl ProgressLog<io::Stdout> {
    /// Progress log writing to standard output.
    pub fn stdout() -> Self {
        ProgressLog::new(io::stdout())
    }
}

impl ProgressLog<io::Sink> {
    /// Progress log that discards everything, for benches and tests.
    pub fn sink() -> Self {
        ProgressLog::new(io::sink())
    }
}

impl<W: Write> ProgressLog<W> {
    pub fn new(sink: W) -> Self {
        ProgressLog {
            sink: Mutex::new(sink),
        }
    }

    /// Records that a worker finished its assigned range.
    pub fn record(&self, worker_id: usize, range: &Range<usize>) {
        let mut sink_guard = self
            .sink
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if range.is_empty() {
            let _ = writeln!(sink_guard, "worker {} had no vectors assigned", worker_id);
        } else {
            let _ = writeln!(
                sink_guard,
                "worker {} processed vectors {} - {}",
                worker_id,
                range.start,
                range.end - 1
            );
        }
    }

    /// Consumes the log and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.sink
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Computes the sum of every vector in the worker's partition into the
/// matching slot of `out`, then records completion.
///
/// `vectors` and `out` hold only this worker's partition; the caller
/// establishes exclusive access to `out`, so the results need no locking.
/// An empty partition writes nothing.
pub fn run_range<W: Write>(
    worker_id: usize,
    range: &Range<usize>,
    vectors: &[Vec<i32>],
    out: &mut [i64],
    progress: &ProgressLog<W>,
) {
    for (slot, vector) in out.iter_mut().zip(vectors) {
        *slot = sum_vector(vector);
    }
    progress.record(worker_id, range);
}
