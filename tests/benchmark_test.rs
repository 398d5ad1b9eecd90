// SPDX-License-Identifier: MIT

use parsum::executor::Executor;
use parsum::validate::spot_check;
use parsum::worker::ProgressLog;
use parsum::VectorSet;
use rand::rngs::StdRng;
use rand::SeedableRng;
use test_utils::fixtures::{
    seeded_vector_set, serial_sums, tiny_vector_set, tiny_vector_sums,
};

#[test]
fn parallel_pass_matches_hand_computed_sums() {
    let vectors = tiny_vector_set();
    let progress = ProgressLog::sink();
    let mut executor = Executor::new(&vectors);

    executor.run(2, &progress).unwrap();

    assert_eq!(executor.sums(), tiny_vector_sums().as_slice());
}

#[test]
fn thread_count_does_not_change_results() {
    let vectors = seeded_vector_set(7, 301, 17);
    let reference = serial_sums(&vectors);
    let progress = ProgressLog::sink();
    let mut executor = Executor::new(&vectors);

    for thread_count in [1, 2, 4] {
        executor.run(thread_count, &progress).unwrap();
        assert_eq!(
            executor.sums(),
            reference.as_slice(),
            "results diverged with {} threads",
            thread_count
        );
    }
}

#[test]
fn rerun_with_same_thread_count_is_idempotent() {
    let vectors = seeded_vector_set(13, 64, 9);
    let progress = ProgressLog::sink();
    let mut executor = Executor::new(&vectors);

    executor.run(4, &progress).unwrap();
    let first_pass = executor.sums().to_vec();

    executor.run(4, &progress).unwrap();
    assert_eq!(executor.sums(), first_pass.as_slice());
}

#[test]
fn more_threads_than_vectors_still_sums_correctly() {
    let vectors = seeded_vector_set(11, 3, 5);
    let progress = ProgressLog::sink();
    let mut executor = Executor::new(&vectors);

    // 16 workers over 3 vectors leaves 13 partitions empty.
    executor.run(16, &progress).unwrap();

    assert_eq!(executor.sums(), serial_sums(&vectors).as_slice());
}

#[test]
fn empty_vector_set_produces_empty_results() {
    let vectors: VectorSet = Vec::new();
    let progress = ProgressLog::sink();
    let mut executor = Executor::new(&vectors);

    executor.run(4, &progress).unwrap();

    assert!(executor.sums().is_empty());
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(spot_check(&mut rng, &vectors, executor.sums()), Ok(()));
}

#[test]
fn every_worker_reports_exactly_one_completion_line() {
    let vectors = seeded_vector_set(3, 10, 4);
    let progress = ProgressLog::new(Vec::new());
    let mut executor = Executor::new(&vectors);

    executor.run(4, &progress).unwrap();

    let output = String::from_utf8(progress.into_inner()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|line| line.starts_with("worker ")));
}

#[test]
fn spot_check_accepts_a_full_parallel_pass() {
    let vectors = seeded_vector_set(21, 200, 25);
    let progress = ProgressLog::sink();
    let mut executor = Executor::new(&vectors);

    executor.run(4, &progress).unwrap();

    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(spot_check(&mut rng, &vectors, executor.sums()), Ok(()));
}

#[test]
fn corrupted_result_is_caught_by_repeated_spot_checks() {
    let vectors = seeded_vector_set(5, 40, 8);
    let mut sums = serial_sums(&vectors);
    sums[17] += 1;

    // One 10-sample check misses a single bad entry in 40 about 78% of the
    // time; a run of 100 independent checks misses it with probability
    // below 1e-10.
    let mut rng = StdRng::seed_from_u64(99);
    let caught =
        (0..100).any(|_| spot_check(&mut rng, &vectors, &sums).is_err());
    assert!(caught);
}

#[test]
fn caught_mismatch_names_the_corrupted_index() {
    let vectors = tiny_vector_set();
    let mut sums = tiny_vector_sums();
    sums[1] = 1;

    // Sampling with replacement from 3 indices; 20 checks of 10 draws each
    // hit index 1 with overwhelming probability.
    let mut rng = StdRng::seed_from_u64(2);
    let mismatch = (0..20)
        .find_map(|_| spot_check(&mut rng, &vectors, &sums).err())
        .expect("corrupted entry was never sampled");

    assert_eq!(mismatch.index, 1);
    assert_eq!(mismatch.expected, 0);
    assert_eq!(mismatch.actual, 1);
}
