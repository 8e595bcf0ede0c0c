//! Operator input normalisation
//!
//! The interactive shell and the `record` command both pass raw text through
//! these helpers before building an [`InspectionRecord`](super::InspectionRecord),
//! so the store only ever sees validated values.

/// Stored in place of an empty comment
pub const COMMENT_SENTINEL: &str = "none";

/// Trim an equipment name, rejecting blank input
pub fn normalize_equipment(raw: &str) -> Result<String, String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Equipment name must not be empty".to_string());
    }
    Ok(name.to_string())
}

/// Trim a comment, substituting [`COMMENT_SENTINEL`] when nothing is left
#[must_use]
pub fn normalize_comment(raw: &str) -> String {
    let comment = raw.trim();
    if comment.is_empty() {
        COMMENT_SENTINEL.to_string()
    } else {
        comment.to_string()
    }
}
