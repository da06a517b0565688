//! Property tests for partitioning and multi-worker scanning.
//!
//! 1. Partitioning covers every index exactly once with exactly W chunks
//! 2. Overlap scans equal single-worker scans for any worker count, on
//!    integer prices and on cent prices where window sums are inexact

use crosslab_core::signal::CrossoverDetector;
use crosslab_runner::{partition, BoundaryPolicy, ParallelScanner};
use proptest::prelude::*;

fn arb_integer_prices(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((1..80_i32).prop_map(f64::from), 0..max_len)
}

/// Cent prices in a narrow band: lots of repeated values and SMA ties.
fn arb_cent_prices(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((1000..1100_i32).prop_map(|c| c as f64 / 100.0), 0..max_len)
}

fn assert_overlap_matches_single(
    closes: &[f64],
    short: usize,
    long: usize,
    workers: usize,
) -> Result<(), TestCaseError> {
    let single = ParallelScanner::new(CrossoverDetector::new(short, long), 1)
        .scan(closes)
        .unwrap();
    let multi = ParallelScanner::new(CrossoverDetector::new(short, long), workers)
        .with_boundary(BoundaryPolicy::Overlap)
        .scan(closes)
        .unwrap();

    prop_assert_eq!(multi.buys, single.buys);
    prop_assert_eq!(multi.sells, single.sells);
    Ok(())
}

proptest! {
    #[test]
    fn partition_covers_each_index_once(len in 0..5000_usize, workers in 1..16_usize) {
        let chunks = partition(len, workers);
        prop_assert_eq!(chunks.len(), workers);

        let mut next = 0;
        for (rank, chunk) in chunks.iter().enumerate() {
            prop_assert_eq!(chunk.rank, rank);
            prop_assert_eq!(chunk.start, next);
            prop_assert!(chunk.end >= chunk.start);
            next = chunk.end;
        }
        prop_assert_eq!(next, len);

        let last = chunks.last().unwrap();
        prop_assert_eq!(last.len(), len - (workers - 1) * (len / workers));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn overlap_scan_equals_single_worker(
        closes in arb_integer_prices(400),
        short in 1..6_usize,
        extra in 1..10_usize,
        workers in 2..9_usize,
    ) {
        assert_overlap_matches_single(&closes, short, short + extra, workers)?;
    }

    #[test]
    fn overlap_scan_equals_single_worker_on_cent_prices(
        closes in arb_cent_prices(2000),
        short in 1..6_usize,
        extra in 1..10_usize,
        workers in 2..9_usize,
    ) {
        assert_overlap_matches_single(&closes, short, short + extra, workers)?;
    }
}
