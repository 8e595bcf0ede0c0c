//! Record a single inspection from command-line flags

use anyhow::Error;

use inspection_log::models::input::{normalize_comment, normalize_equipment};
use inspection_log::models::record::{capture_moment, parse_moment};
use inspection_log::models::{InspectionRecord, InspectionResult};
use inspection_log::output::OutputMode;

use super::{Settings, save};

/// Validate the flags and append one record.
///
/// Nothing touches the filesystem until every value has been accepted.
pub fn record(
    settings: &Settings,
    equipment: &str,
    result: &str,
    comment: &str,
    at: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let equipment = normalize_equipment(equipment).map_err(Error::msg)?;
    let result: InspectionResult = result.parse().map_err(Error::msg)?;
    let comment = normalize_comment(comment);
    let moment = match at {
        Some(at) => parse_moment(at).map_err(Error::msg)?,
        None => capture_moment(),
    };

    let store = settings.open_store()?;
    save(&store, InspectionRecord::new(moment, equipment, result, comment), mode)
}
