//! Data models for inspection-log
//!
//! Core abstractions:
//! - `InspectionRecord`: one inspection event, captured once and never mutated
//! - `InspectionResult`: the closed pass/fail outcome (`OK` / `NG`)
//! - `EquipmentCatalog`: the fixed list of suggested equipment names
//! - `input`: normalisation applied by the shell before a record is built

pub mod equipment;
pub mod input;
mod inspection_result;
pub mod record;

pub use equipment::EquipmentCatalog;
pub use inspection_result::InspectionResult;
pub use record::InspectionRecord;
