//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use std::path::PathBuf;

use inspection_log::models::{InspectionRecord, InspectionResult};
use inspection_log::output::{EquipmentListResult, OperationResult, OutputMode, RecordResult};
use inspection_log::storage::AppendOutcome;

use crate::common::moment;

fn sample_result() -> RecordResult {
    let record = InspectionRecord::new(
        moment(2026, 1, 15, 9, 30),
        "Pump A, North",
        InspectionResult::Fail,
        "say \"hi\"",
    );
    let outcome = AppendOutcome {
        path: PathBuf::from("out/inspection_results_20260115.csv"),
        line: "2026-01-15 09:30,\"Pump A, North\",NG,\"say \"\"hi\"\"\"".to_string(),
        header_written: true,
    };
    RecordResult::new(record, outcome)
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// RecordResult Tests
// =============================================================================

#[test]
fn record_result_from_outcome() {
    let result = sample_result();
    assert!(result.success);
    assert!(result.header_written);
    assert!(result.file.ends_with("inspection_results_20260115.csv"));
}

#[test]
fn record_result_serialization() {
    let json: serde_json::Value = serde_json::to_value(sample_result()).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["header_written"], true);
    assert_eq!(json["line"], "2026-01-15 09:30,\"Pump A, North\",NG,\"say \"\"hi\"\"\"");
    assert_eq!(json["record"]["equipment"], "Pump A, North");
    assert_eq!(json["record"]["result"], "NG");
    assert_eq!(json["record"]["comment"], "say \"hi\"");
    assert_eq!(json["record"]["moment"], "2026-01-15T09:30:00");
}

#[test]
fn record_result_render_does_not_panic() {
    let result = sample_result();
    result.render(OutputMode::Human);
    result.render(OutputMode::Json);
}

// =============================================================================
// EquipmentListResult Tests
// =============================================================================

#[test]
fn equipment_list_serialization() {
    let result = EquipmentListResult {
        equipment: vec!["Boiler".to_string(), "Press".to_string()],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"equipment":["Boiler","Press"]}"#);
}

#[test]
fn equipment_list_render_empty() {
    let result = EquipmentListResult { equipment: vec![] };
    result.render(OutputMode::Human);
    result.render(OutputMode::Json);
}

// =============================================================================
// OperationResult Tests
// =============================================================================

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Recorded 2 inspection(s).".to_string(),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("Recorded 2 inspection(s)."));
}
