//! Daily CSV storage
//!
//! Records are appended to `inspection_results_YYYYMMDD.csv` in the output
//! directory, keyed by each record's own moment. Files are created lazily
//! and only ever appended to.
//!
//! The header decision is made on the opened handle, never from a separate
//! existence check: the file is opened create-or-append, an exclusive
//! advisory lock is taken, and the end-of-file offset decides whether the
//! header goes first. Header and record are written with a single
//! `write_all` so concurrent writers never see a partial line.

use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::PathBuf;

use fs2::FileExt;
use log::{debug, warn};

use super::field::{header_line, record_line};
use super::{AppendOutcome, RecordStore, StoreError};
use crate::models::InspectionRecord;
use crate::paths;

/// Line terminator used for every line
const LINE_END: &str = "\n";

/// Record store writing one CSV file per calendar day
#[derive(Debug, Clone)]
pub struct DailyCsvStore {
    dir: PathBuf,
}

impl DailyCsvStore {
    /// Create a store rooted at `dir`.
    ///
    /// The directory is not created here; appending into a missing
    /// directory fails with [`StoreError::Io`].
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file a record would be appended to
    #[must_use]
    pub fn path_for(&self, record: &InspectionRecord) -> PathBuf {
        paths::log_file(&self.dir, record.moment.date())
    }
}

impl RecordStore for DailyCsvStore {
    fn append_record(&self, record: &InspectionRecord) -> Result<AppendOutcome, StoreError> {
        let path = self.path_for(record);
        let line = record_line(record);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| StoreError::io(&path, e))?;
        debug!("Opened {} for append", path.display());

        FileExt::lock_exclusive(&file).map_err(|e| StoreError::io(&path, e))?;
        let written = append_locked(&mut file, &line);
        if let Err(e) = FileExt::unlock(&file) {
            // Closing the handle below releases the lock anyway
            debug!("Unlock of {} failed: {e}", path.display());
        }
        let header_written = written.map_err(|e| StoreError::io(&path, e))?;

        if header_written {
            debug!("Wrote header to new log file {}", path.display());
        }
        Ok(AppendOutcome {
            path,
            line,
            header_written,
        })
    }
}

/// Append `line` (and the header, if the file is empty) to a locked file.
///
/// Returns whether the header was written. On failure the file is cut back
/// to the length it had before this call.
fn append_locked(file: &mut File, line: &str) -> std::io::Result<bool> {
    let len = file.seek(SeekFrom::End(0))?;
    let needs_header = len == 0;

    let mut buf = String::with_capacity(line.len() + 64);
    if needs_header {
        buf.push_str(&header_line());
        buf.push_str(LINE_END);
    }
    buf.push_str(line);
    buf.push_str(LINE_END);

    if let Err(e) = file.write_all(buf.as_bytes()).and_then(|()| file.sync_data()) {
        if let Err(rollback) = file.set_len(len) {
            warn!("Could not roll back partial write: {rollback}");
        }
        return Err(e);
    }
    Ok(needs_header)
}
