//! CSV loading for closing-price series.
//!
//! The file is expected to carry a header row followed by comma-separated
//! rows with the closing price at [`CLOSE_FIELD`]. Rows that are too short or
//! whose close does not parse as a number are dropped without error; only a
//! failure to open or read the stream aborts the load.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::PriceSeries;

/// Zero-based column holding the closing price.
pub const CLOSE_FIELD: usize = 4;

/// Errors from the loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("error opening file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error reading file: {0}")]
    Read(#[from] csv::Error),
}

/// Load a closing-price series from the CSV file at `path`.
pub fn load_series(path: impl AsRef<Path>) -> Result<PriceSeries, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let series = read_series(file)?;
    info!(path = %path.display(), closes = series.len(), "loaded price series");
    Ok(series)
}

/// Parse a closing-price series from any CSV byte stream.
pub fn read_series<R: Read>(reader: R) -> Result<PriceSeries, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut closes = Vec::new();
    let mut skipped = 0usize;

    // Byte records: only the close column has to be valid UTF-8.
    for record in rdr.byte_records() {
        let record = record?;
        match record.get(CLOSE_FIELD).and_then(parse_close) {
            Some(close) => closes.push(close),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(skipped, "dropped rows without a numeric close");
    }

    Ok(PriceSeries::new(closes))
}

fn parse_close(field: &[u8]) -> Option<f64> {
    std::str::from_utf8(field).ok()?.parse().ok()
}
