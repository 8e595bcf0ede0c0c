//! Tests for data models and input normalization

use inspection_log::models::equipment::{DEFAULT_EQUIPMENT, MenuSelection, OTHER_LABEL};
use inspection_log::models::input::{COMMENT_SENTINEL, normalize_equipment};
use inspection_log::models::{EquipmentCatalog, InspectionRecord, InspectionResult};

use crate::common::moment;

// =============================================================================
// INSPECTION RESULT TESTS
// =============================================================================

#[test]
fn test_result_codes() {
    assert_eq!(InspectionResult::Pass.code(), "OK");
    assert_eq!(InspectionResult::Fail.code(), "NG");
    assert_eq!(InspectionResult::Fail.to_string(), "NG");
}

#[test]
fn test_result_serializes_as_code() {
    assert_eq!(serde_json::to_string(&InspectionResult::Pass).unwrap(), "\"OK\"");
    let parsed: InspectionResult = serde_json::from_str("\"NG\"").unwrap();
    assert_eq!(parsed, InspectionResult::Fail);
}

#[test]
fn test_result_display_round_trips_through_parse() {
    for result in [InspectionResult::Pass, InspectionResult::Fail] {
        assert_eq!(result.to_string().parse::<InspectionResult>().unwrap(), result);
    }
}

// =============================================================================
// RECORD TESTS
// =============================================================================

#[test]
fn test_record_timestamp_text() {
    let record = InspectionRecord::new(
        moment(2026, 1, 5, 7, 3),
        "Boiler",
        InspectionResult::Pass,
        COMMENT_SENTINEL,
    );
    assert_eq!(record.timestamp_text(), "2026-01-05 07:03");
}

#[test]
fn test_record_now_uses_single_moment() {
    let record = InspectionRecord::now("Boiler", InspectionResult::Pass, "none");
    let stamp = record.moment.format("%Y-%m-%d").to_string();
    assert!(record.timestamp_text().starts_with(&stamp));
}

// =============================================================================
// EQUIPMENT NAME TESTS
// =============================================================================

#[test]
fn test_normalize_equipment_trims() {
    assert_eq!(normalize_equipment("  Pump C ").unwrap(), "Pump C");
}

#[test]
fn test_normalize_equipment_rejects_blank() {
    assert!(normalize_equipment("").is_err());
    assert!(normalize_equipment(" \t ").unwrap_err().contains("must not be empty"));
}

// =============================================================================
// EQUIPMENT CATALOG TESTS
// =============================================================================

#[test]
fn test_catalog_default() {
    let catalog = EquipmentCatalog::default();
    assert_eq!(catalog.len(), DEFAULT_EQUIPMENT.len());
    assert_eq!(catalog.items()[0], "Pump A");
    assert!(!catalog.is_empty());
}

#[test]
fn test_catalog_from_names_trims_and_dedupes() {
    let catalog = EquipmentCatalog::new([" Mixer ", "Press", "", "Mixer"]);
    assert_eq!(catalog.items(), ["Mixer".to_string(), "Press".to_string()]);
}

#[test]
fn test_catalog_empty_input_falls_back_to_default() {
    let none: [&str; 0] = [];
    assert_eq!(EquipmentCatalog::new(none), EquipmentCatalog::default());
    assert_eq!(EquipmentCatalog::new(["  "]), EquipmentCatalog::default());
}

#[test]
fn test_catalog_menu_ends_with_other() {
    let catalog = EquipmentCatalog::new(["Mixer", "Press"]);
    assert_eq!(catalog.menu_labels(), vec!["Mixer", "Press", OTHER_LABEL]);
}

#[test]
fn test_catalog_select() {
    let catalog = EquipmentCatalog::new(["Mixer", "Press"]);
    assert_eq!(catalog.select(0), Some(MenuSelection::Listed("Mixer")));
    assert_eq!(catalog.select(1), Some(MenuSelection::Listed("Press")));
    assert_eq!(catalog.select(2), Some(MenuSelection::Other));
    assert_eq!(catalog.select(3), None);
}
