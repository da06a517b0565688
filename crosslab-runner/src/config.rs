//! Scan configuration.
//!
//! The binary always runs with [`ScanConfig::default`]; other values exist for
//! tests and library callers. Validation happens here so the core
//! constructors can treat bad periods as programmer errors.

use std::path::PathBuf;

use crosslab_core::signal::CrossoverDetector;
use thiserror::Error;

use crate::scanner::{BoundaryPolicy, ParallelScanner};

/// Input file read by the binary.
pub const DEFAULT_DATA_PATH: &str = "data.csv";
pub const DEFAULT_SHORT_PERIOD: usize = 5;
pub const DEFAULT_LONG_PERIOD: usize = 10;
pub const DEFAULT_WORKERS: usize = 4;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("short period must be >= 1")]
    ZeroShortPeriod,

    #[error("long period ({long}) must be greater than short period ({short})")]
    PeriodsNotIncreasing { short: usize, long: usize },

    #[error("worker count must be >= 1")]
    ZeroWorkers,
}

/// Everything needed to run one scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    pub data_path: PathBuf,
    pub short_period: usize,
    pub long_period: usize,
    pub workers: usize,
    pub boundary: BoundaryPolicy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            short_period: DEFAULT_SHORT_PERIOD,
            long_period: DEFAULT_LONG_PERIOD,
            workers: DEFAULT_WORKERS,
            boundary: BoundaryPolicy::Overlap,
        }
    }
}

impl ScanConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.short_period == 0 {
            return Err(ConfigError::ZeroShortPeriod);
        }
        if self.long_period <= self.short_period {
            return Err(ConfigError::PeriodsNotIncreasing {
                short: self.short_period,
                long: self.long_period,
            });
        }
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }

    /// Build the scanner this configuration describes.
    pub fn scanner(&self) -> Result<ParallelScanner, ConfigError> {
        self.validate()?;
        let detector = CrossoverDetector::new(self.short_period, self.long_period);
        Ok(ParallelScanner::new(detector, self.workers).with_boundary(self.boundary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.data_path, PathBuf::from("data.csv"));
        assert_eq!(config.short_period, 5);
        assert_eq!(config.long_period, 10);
        assert_eq!(config.workers, 4);
        assert_eq!(config.boundary, BoundaryPolicy::Overlap);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn scanner_reflects_config() {
        let config = ScanConfig {
            workers: 3,
            boundary: BoundaryPolicy::Isolated,
            ..ScanConfig::default()
        };
        let scanner = config.scanner().unwrap();
        assert_eq!(scanner.workers(), 3);
        assert_eq!(scanner.boundary(), BoundaryPolicy::Isolated);
        assert_eq!(scanner.detector().short_period(), 5);
        assert_eq!(scanner.detector().long_period(), 10);
    }

    #[test]
    fn rejects_zero_short_period() {
        let config = ScanConfig {
            short_period: 0,
            ..ScanConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroShortPeriod));
    }

    #[test]
    fn rejects_non_increasing_periods() {
        let config = ScanConfig {
            short_period: 10,
            long_period: 10,
            ..ScanConfig::default()
        };
        assert_eq!(
            config.scanner().unwrap_err(),
            ConfigError::PeriodsNotIncreasing { short: 10, long: 10 }
        );
    }

    #[test]
    fn rejects_zero_workers() {
        let config = ScanConfig {
            workers: 0,
            ..ScanConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWorkers));
    }
}
