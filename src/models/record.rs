//! Inspection record
//!
//! A record is built once per inspection from already-normalised input and
//! handed to a [`RecordStore`](crate::storage::RecordStore). Its `moment` is
//! the only clock reading used for both the timestamp column and the log
//! file name, so a record can never land in a file for a different day.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use super::InspectionResult;

/// Timestamp column format (minute resolution, sortable)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Formats accepted when a moment is supplied on the command line
const MOMENT_INPUT_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// One inspection event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectionRecord {
    /// When the inspection was recorded (local wall-clock time)
    pub moment: NaiveDateTime,

    /// Name of the inspected equipment (never empty)
    pub equipment: String,

    /// Pass/fail outcome
    pub result: InspectionResult,

    /// Free-text comment (the sentinel `none` when nothing was entered)
    pub comment: String,
}

impl InspectionRecord {
    /// Create a record at an explicit moment
    #[must_use]
    pub fn new(
        moment: NaiveDateTime,
        equipment: impl Into<String>,
        result: InspectionResult,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            moment,
            equipment: equipment.into(),
            result,
            comment: comment.into(),
        }
    }

    /// Create a record stamped with the current local time
    #[must_use]
    pub fn now(
        equipment: impl Into<String>,
        result: InspectionResult,
        comment: impl Into<String>,
    ) -> Self {
        Self::new(capture_moment(), equipment, result, comment)
    }

    /// The timestamp column text, e.g. `2026-01-15 09:30`
    #[must_use]
    pub fn timestamp_text(&self) -> String {
        self.moment.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Sample the local clock. Call once per record.
#[must_use]
pub fn capture_moment() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a moment such as `2026-01-15 09:30`
pub fn parse_moment(s: &str) -> Result<NaiveDateTime, String> {
    let s = s.trim();
    MOMENT_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| format!("Invalid moment: {s}. Use: YYYY-MM-DD HH:MM"))
}
