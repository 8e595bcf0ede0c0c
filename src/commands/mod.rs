//! Command implementations

mod equipment;
mod inspect;
mod record;

pub use equipment::equipment;
pub use inspect::inspect;
pub use record::record;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use log::info;

use inspection_log::models::{EquipmentCatalog, InspectionRecord};
use inspection_log::output::{OutputMode, RecordResult};
use inspection_log::storage::{DailyCsvStore, RecordStore};

/// Runtime settings, built once from the command line
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the daily files
    pub output_dir: PathBuf,
    /// Equipment offered by the interactive menu
    pub catalog: EquipmentCatalog,
}

impl Settings {
    /// Build settings; an empty item list keeps the default catalog
    pub fn new(output_dir: PathBuf, equipment_items: &[String]) -> Self {
        Self {
            output_dir,
            catalog: EquipmentCatalog::new(equipment_items),
        }
    }

    /// Create the output directory if needed and open the store on it
    pub fn open_store(&self) -> anyhow::Result<DailyCsvStore> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory {}", self.output_dir.display())
        })?;
        Ok(DailyCsvStore::new(&self.output_dir))
    }
}

/// Append a record and report it
fn save(store: &dyn RecordStore, record: InspectionRecord, mode: OutputMode) -> anyhow::Result<()> {
    let outcome = store.append_record(&record)?;
    info!(
        "Recorded {} {} in {}",
        record.equipment,
        record.result,
        outcome.path.display()
    );
    RecordResult::new(record, outcome).render(mode);
    Ok(())
}
