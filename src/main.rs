// SPDX-License-Identifier: MIT

use parsum::executor::Executor;
use parsum::generate::generate_vectors;
use parsum::report::{write_sample_sums, write_sum_stats, write_timing_table};
use parsum::validate::spot_check;
use parsum::worker::ProgressLog;
use parsum::{BenchConfig, BenchError};
use std::io::{self, Write};
use std::process;

fn main() {
    if let Err(err) = run(&BenchConfig::default()) {
        eprintln!("benchmark failed: {}", err);
        process::exit(1);
    }
}

fn run(config: &BenchConfig) -> Result<(), BenchError> {
    println!("=== Parallel vector sum scaling benchmark ===");
    println!(
        "parameters: {} vectors, {} elements each",
        config.num_vectors, config.vector_size
    );
    println!("value range: [{}, {}]", config.min_val, config.max_val);
    println!();

    println!("generating vectors...");
    let mut rng = rand::thread_rng();
    let vectors = generate_vectors(&mut rng, config);
    println!("all {} vectors generated", vectors.len());
    println!();

    let progress = ProgressLog::stdout();
    let mut executor = Executor::new(&vectors);
    let mut timings = Vec::with_capacity(config.thread_counts.len());

    for &thread_count in &config.thread_counts {
        println!(
            "~ pass with {} thread{} ~",
            thread_count,
            if thread_count == 1 { "" } else { "s" }
        );

        let elapsed_ms = executor.run(thread_count, &progress)?;
        timings.push((thread_count, elapsed_ms));

        // A failed spot-check is reported but the remaining thread-count
        // trials still proceed.
        match spot_check(&mut rng, &vectors, executor.sums()) {
            Ok(()) => println!("  ...results verified..."),
            Err(mismatch) => println!("  validation failed: {}", mismatch),
        }

        println!("  elapsed time - {:.2} ms", elapsed_ms);
        println!();
    }

    let mut out = io::stdout().lock();
    write_timing_table(&mut out, &timings)?;
    write_sum_stats(&mut out, executor.sums())?;
    write_sample_sums(&mut out, executor.sums())?;
    out.flush()?;
    Ok(())
}
