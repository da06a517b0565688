//! Plain-text report of a scan.
//!
//! ```text
//! Buy Signals:
//! Buy at index 57, Price: 101.20
//!
//! Sell Signals:
//! Sell at index 14, Price: 11.00
//! Execution time: 1.234ms
//! ```

use std::io::{self, Write};
use std::time::Duration;

use crate::scanner::ScanReport;

/// Write the Buy list, the Sell list, then the elapsed time.
pub fn write_report<W: Write>(
    mut out: W,
    report: &ScanReport,
    elapsed: Duration,
) -> io::Result<()> {
    writeln!(out, "Buy Signals:")?;
    for signal in &report.buys {
        writeln!(out, "{signal}")?;
    }

    writeln!(out)?;
    writeln!(out, "Sell Signals:")?;
    for signal in &report.sells {
        writeln!(out, "{signal}")?;
    }

    writeln!(out, "Execution time: {elapsed:?}")?;
    out.flush()
}

/// Render the report into a `String`.
pub fn render_report(report: &ScanReport, elapsed: Duration) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(&mut buf, report, elapsed);
    String::from_utf8_lossy(&buf).into_owned()
}
