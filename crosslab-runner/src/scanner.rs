//! Parallel crossover scan over a partitioned price series.
//!
//! Both moving averages are computed once over the full series. The series is
//! then split into contiguous chunks (see [`partition`]) and each chunk's
//! positions are classified on its own worker of a private rayon pool, all
//! against the same shared averages. Workers hand back their own signal lists;
//! the join step concatenates them in chunk rank order, so Buy and Sell lists
//! come out index-sorted and identical from run to run regardless of
//! scheduling.
//!
//! Indices in the report are always positions in the full series.

use std::time::{Duration, Instant};

use crosslab_core::domain::{Signal, SignalDirection};
use crosslab_core::indicators::Indicator;
use crosslab_core::signal::{CrossoverDetector, MovingAverages};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::partition::{partition, Chunk};

/// Errors from the scan layer.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to build scan thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// How workers treat crossovers near the start of their chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Each worker classifies every position of the chunk it owns, looking
    /// back across the chunk start as needed. The result equals a
    /// single-worker scan.
    #[default]
    Overlap,
    /// Each worker behaves as if it saw only its own chunk. Crossovers within
    /// `long_period` positions of a chunk start are not reported.
    Isolated,
}

/// Aggregated result of one scan.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub buys: Vec<Signal>,
    pub sells: Vec<Signal>,
    /// Number of chunks the series was split into.
    pub chunks: usize,
    /// Wall-clock time of the parallel phase.
    pub elapsed: Duration,
}

impl ScanReport {
    pub fn signal_count(&self) -> usize {
        self.buys.len() + self.sells.len()
    }

    /// All signals, Buy list first then Sell list.
    pub fn signals(&self) -> impl Iterator<Item = &Signal> {
        self.buys.iter().chain(&self.sells)
    }
}

/// Fan-out/fan-in crossover scanner.
#[derive(Debug, Clone)]
pub struct ParallelScanner {
    detector: CrossoverDetector,
    workers: usize,
    boundary: BoundaryPolicy,
}

impl ParallelScanner {
    pub fn new(detector: CrossoverDetector, workers: usize) -> Self {
        assert!(workers >= 1, "workers must be >= 1");
        Self {
            detector,
            workers,
            boundary: BoundaryPolicy::default(),
        }
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    pub fn detector(&self) -> &CrossoverDetector {
        &self.detector
    }

    /// Scan `closes` on `workers` threads and merge the results.
    pub fn scan(&self, closes: &[f64]) -> Result<ScanReport, ScanError> {
        let start = Instant::now();
        let chunks = partition(closes.len(), self.workers);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("crosslab-scan-{i}"))
            .build()?;

        let short_sma = self.detector.short_sma();
        let long_sma = self.detector.long_sma();
        let per_chunk: Vec<Vec<Signal>> = pool.install(|| {
            let (short, long) =
                rayon::join(|| short_sma.compute(closes), || long_sma.compute(closes));
            let averages = MovingAverages { short, long };
            chunks
                .par_iter()
                .map(|chunk| self.scan_chunk(closes, &averages, chunk))
                .collect()
        });

        let mut buys = Vec::new();
        let mut sells = Vec::new();
        for signal in per_chunk.into_iter().flatten() {
            match signal.direction {
                SignalDirection::Buy => buys.push(signal),
                SignalDirection::Sell => sells.push(signal),
            }
        }

        let elapsed = start.elapsed();
        info!(
            closes = closes.len(),
            chunks = chunks.len(),
            buys = buys.len(),
            sells = sells.len(),
            ?elapsed,
            "scan complete"
        );

        Ok(ScanReport {
            buys,
            sells,
            chunks: chunks.len(),
            elapsed,
        })
    }

    /// Detect crossovers owned by one chunk.
    fn scan_chunk(
        &self,
        closes: &[f64],
        averages: &MovingAverages,
        chunk: &Chunk,
    ) -> Vec<Signal> {
        let first = match self.boundary {
            BoundaryPolicy::Overlap => chunk.start,
            BoundaryPolicy::Isolated => chunk.start + self.detector.warmup(),
        };

        let signals = self.detector.detect_in(closes, averages, first..chunk.end);

        debug!(
            rank = chunk.rank,
            start = chunk.start,
            end = chunk.end,
            signals = signals.len(),
            "chunk scanned"
        );
        signals
    }
}
