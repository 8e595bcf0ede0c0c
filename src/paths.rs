//! Centralized path definitions for inspection-log
//!
//! This module is the single source of truth for where inspection records
//! are written.
//!
//! ## Storage Layout
//!
//! ```text
//! <output dir>/                           # `--output-dir`, default: current dir
//! ├── inspection_results_20260114.csv     # one file per calendar day
//! └── inspection_results_20260115.csv
//! ```
//!
//! The date stamp comes from the record's own moment, never from a second
//! clock reading.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// Default output directory (the working directory)
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// File name prefix for daily logs
const LOG_FILE_PREFIX: &str = "inspection_results_";

/// File extension for daily logs
const LOG_FILE_EXTENSION: &str = "csv";

/// Date stamp embedded in the file name (8 digits, no separators)
const DATE_STAMP_FORMAT: &str = "%Y%m%d";

/// Get the log file name for a calendar date.
///
/// e.g. `2026-01-15` -> `inspection_results_20260115.csv`
#[must_use]
pub fn log_file_name(date: NaiveDate) -> String {
    format!(
        "{LOG_FILE_PREFIX}{}.{LOG_FILE_EXTENSION}",
        date.format(DATE_STAMP_FORMAT)
    )
}

/// Get the log file path for a calendar date under `dir`.
#[must_use]
pub fn log_file(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(log_file_name(date))
}
