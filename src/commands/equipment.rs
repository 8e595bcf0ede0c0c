//! List the equipment catalog

use inspection_log::output::{EquipmentListResult, OutputMode};

use super::Settings;

/// Print the catalog in menu order
pub fn equipment(settings: &Settings, mode: OutputMode) {
    EquipmentListResult {
        equipment: settings.catalog.items().to_vec(),
    }
    .render(mode);
}
