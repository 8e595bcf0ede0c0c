//! CSV field encoding
//!
//! A field containing the separator, a quote or a line break is wrapped in
//! quotes with embedded quotes doubled; anything else is written as is.
//! Encoding is not idempotent: an already-quoted value gets quoted again.

use std::borrow::Cow;

use crate::models::InspectionRecord;

/// Field separator
pub const SEPARATOR: char = ',';

/// Quote character
pub const QUOTE: char = '"';

/// Column names, in file order
pub const HEADER_FIELDS: [&str; 4] = ["datetime", "equipment", "result", "comment"];

/// Characters that force a field to be quoted
const SPECIAL_CHARS: [char; 4] = [SEPARATOR, QUOTE, '\n', '\r'];

/// Encode one value as a CSV field
#[must_use]
pub fn encode(value: &str) -> Cow<'_, str> {
    if value.contains(SPECIAL_CHARS) {
        let escaped = value.replace(QUOTE, "\"\"");
        Cow::Owned(format!("{QUOTE}{escaped}{QUOTE}"))
    } else {
        Cow::Borrowed(value)
    }
}

/// Encode and join fields into one line (no terminator, no trailing separator)
#[must_use]
pub fn encode_line(fields: &[&str]) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(SEPARATOR);
        }
        line.push_str(&encode(field));
    }
    line
}

/// The header line
#[must_use]
pub fn header_line() -> String {
    encode_line(&HEADER_FIELDS)
}

/// The CSV line for a record: `timestamp,equipment,result,comment`
#[must_use]
pub fn record_line(record: &InspectionRecord) -> String {
    let timestamp = record.timestamp_text();
    encode_line(&[
        timestamp.as_str(),
        record.equipment.as_str(),
        record.result.code(),
        record.comment.as_str(),
    ])
}
