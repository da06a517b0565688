//! CrossLab Runner — chunked parallel crossover scanning.
//!
//! This crate builds on `crosslab-core` to provide:
//! - Scan configuration and validation
//! - Contiguous chunk partitioning
//! - Fan-out/fan-in scanning on a private rayon pool
//! - The plain-text signal report
//! - The load-then-scan pipeline used by the binary

pub mod config;
pub mod partition;
pub mod report;
pub mod runner;
pub mod scanner;

pub use config::{ConfigError, ScanConfig};
pub use partition::{partition, Chunk};
pub use report::{render_report, write_report};
pub use runner::{run_scan, RunError};
pub use scanner::{BoundaryPolicy, ParallelScanner, ScanError, ScanReport};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn scanner_is_send_sync() {
        assert_send::<ParallelScanner>();
        assert_sync::<ParallelScanner>();
    }

    #[test]
    fn scan_report_is_send_sync() {
        assert_send::<ScanReport>();
        assert_sync::<ScanReport>();
    }

    #[test]
    fn config_types_are_send_sync() {
        assert_send::<ScanConfig>();
        assert_sync::<ScanConfig>();
        assert_send::<Chunk>();
        assert_sync::<Chunk>();
    }

    #[test]
    fn errors_are_send_sync() {
        assert_send::<RunError>();
        assert_sync::<RunError>();
    }
}
