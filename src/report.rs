// SPDX-License-Identifier: MIT

use std::io::{self, Write};

/// Number of leading sums displayed as a sample of the results.
const DISPLAYED_SUMS: usize = 10;

/// Writes the thread count vs elapsed time table.
pub fn write_timing_table(
    out: &mut impl Write,
    timings: &[(usize, f64)],
) -> io::Result<()> {
    writeln!(out, "=== Results ===")?;
    writeln!(out, "{:>12}{:>15}", "threads", "time [ms]")?;
    for &(thread_count, elapsed_ms) in timings {
        writeln!(out, "{:>12}{:>15.2}", thread_count, elapsed_ms)?;
    }
    Ok(())
}

/// Writes the minimum, maximum and average of the final sums.
///
/// An empty results buffer is reported as such rather than averaged over
/// zero entries.
pub fn write_sum_stats(out: &mut impl Write, sums: &[i64]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Sum statistics ===")?;

    if sums.is_empty() {
        return writeln!(out, "  no vectors were summed");
    }

    let mut min_sum = sums[0];
    let mut max_sum = sums[0];
    let mut total: i64 = 0;
    for &sum in sums {
        min_sum = min_sum.min(sum);
        max_sum = max_sum.max(sum);
        total += sum;
    }
    let average = total as f64 / sums.len() as f64;

    writeln!(out, "  minimum sum - {}", min_sum)?;
    writeln!(out, "  maximum sum - {}", max_sum)?;
    writeln!(out, "  average sum - {:.2}", average)?;
    Ok(())
}

/// Writes the first [`DISPLAYED_SUMS`] computed sums, labelled by index.
pub fn write_sample_sums(out: &mut impl Write, sums: &[i64]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "First {} vector sums:", DISPLAYED_SUMS.min(sums.len()))?;
    for (index, sum) in sums.iter().take(DISPLAYED_SUMS).enumerate() {
        writeln!(out, "  vector {}: {}", index, sum)?;
    }
    Ok(())
}
