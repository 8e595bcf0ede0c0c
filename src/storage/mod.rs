//! Append-only storage for inspection records
//!
//! - `field`: CSV field and line encoding (the single quoting authority)
//! - `daily`: one CSV file per calendar day, header written exactly once

/// One CSV file per calendar day
pub mod daily;
/// CSV field encoding
pub mod field;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::InspectionRecord;

/// Errors that can occur while appending a record
#[derive(Debug, Error)]
pub enum StoreError {
    /// The log file could not be opened, locked, written or synced
    #[error("failed to append to {}", path.display())]
    Io {
        /// The log file being appended to
        path: PathBuf,
        /// Underlying platform error
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Wrap an I/O error with the path it happened on
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The log file the failed operation targeted
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } => path,
        }
    }
}

/// What a successful append did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendOutcome {
    /// The log file that was appended to
    pub path: PathBuf,
    /// The record line as written (without line terminator)
    pub line: String,
    /// Whether this append also wrote the header line
    pub header_written: bool,
}

/// Storage backend for inspection records
pub trait RecordStore: Send + Sync {
    /// Append one record.
    ///
    /// Either the whole line (plus the header, for an empty file) is
    /// appended, or an error is returned and the file is left as it was.
    fn append_record(&self, record: &InspectionRecord) -> Result<AppendOutcome, StoreError>;
}

pub use daily::DailyCsvStore;
pub use field::encode;
