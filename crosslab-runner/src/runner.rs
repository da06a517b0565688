//! Load-then-scan pipeline.

use crosslab_core::data::{load_series, LoadError};
use thiserror::Error;

use crate::config::{ConfigError, ScanConfig};
use crate::scanner::{ScanError, ScanReport};

/// Errors from a full run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),
}

/// Load the configured series and scan it.
///
/// The configuration is validated before the file is touched.
pub fn run_scan(config: &ScanConfig) -> Result<ScanReport, RunError> {
    let scanner = config.scanner()?;
    let series = load_series(&config.data_path)?;
    Ok(scanner.scan(series.closes())?)
}
