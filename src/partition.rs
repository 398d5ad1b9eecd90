// SPDX-License-Identifier: MIT

use crate::error::BenchError;
use std::ops::Range;

/// An iterator splitting `[0, total_items)` into a fixed number of
/// contiguous index ranges whose sizes differ by at most one.
pub struct Partitions {
    /// Total number of items to be split.
    total_items: usize,
    /// Number of ranges to produce.
    chunk_count: usize,
    /// The current position in the range of items.
    current_position: usize,
    /// The index of the range being produced next.
    current_chunk: usize,
    /// Items every range receives before remainder distribution.
    base_size: usize,
    /// Remainder items, absorbed one each by the earliest ranges.
    extra_items: usize,
}

impl Partitions {
    /// Creates a splitter dividing `total_items` into `chunk_count` ranges.
    ///
    /// # Errors
    /// Returns [`BenchError::InvalidThreadCount`] if `chunk_count` is zero.
    pub fn new(
        total_items: usize,
        chunk_count: usize,
    ) -> Result<Self, BenchError> {
        if chunk_count == 0 {
            return Err(BenchError::InvalidThreadCount(chunk_count));
        }
        Ok(Partitions {
            total_items,
            chunk_count,
            current_position: 0,
            current_chunk: 0,
            base_size: total_items / chunk_count,
            extra_items: total_items % chunk_count,
        })
    }
}

impl Iterator for Partitions {
    type Item = Range<usize>;

    /// Produces the next index range.
    ///
    /// Exactly `chunk_count` ranges are produced; when there are more
    /// chunks than items the trailing ranges are empty (`start == end`)
    /// rather than omitted, so a partition always exists for every worker.
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_chunk == self.chunk_count {
            return None;
        }

        let start = self.current_position;

        // The first `extra_items` ranges take one remainder item each.
        let end = start
            + self.base_size
            + (self.current_chunk < self.extra_items) as usize;

        self.current_chunk += 1;
        self.current_position = end;

        Some(start..end)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.chunk_count - self.current_chunk;
        (remaining, Some(remaining))
    }
}

/// Splits `total_items` across `thread_count` workers as evenly as possible.
///
/// The returned ranges are ascending, contiguous and pairwise disjoint, and
/// their union is exactly `[0, total_items)`. The result is deterministic
/// for a given pair of inputs.
pub fn partition(
    total_items: usize,
    thread_count: usize,
) -> Result<Vec<Range<usize>>, BenchError> {
    Ok(Partitions::new(total_items, thread_count)?.collect())
}
