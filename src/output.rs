//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::models::{InspectionRecord, InspectionResult};
use crate::storage::AppendOutcome;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of recording one inspection
#[derive(Debug, Serialize)]
pub struct RecordResult {
    /// Whether the record was appended
    pub success: bool,
    /// Log file the record was appended to
    pub file: String,
    /// The CSV line as written
    pub line: String,
    /// Whether the header line was written by this append
    pub header_written: bool,
    /// The record that was stored
    pub record: InspectionRecord,
}

/// Result of listing the equipment catalog
#[derive(Debug, Serialize)]
pub struct EquipmentListResult {
    /// Catalog entries in display order
    pub equipment: Vec<String>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl RecordResult {
    /// Build from a stored record and what the store reported
    #[must_use]
    pub fn new(record: InspectionRecord, outcome: AppendOutcome) -> Self {
        Self {
            success: true,
            file: outcome.path.display().to_string(),
            line: outcome.line,
            header_written: outcome.header_written,
            record,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("{} Inspection record saved.", "✓".green().bold());
        println!("  File: {}", self.file);
        println!(
            "  {} | {} | {} | {}",
            self.record.timestamp_text(),
            self.record.equipment,
            colorize_result(&self.record),
            self.record.comment
        );
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl EquipmentListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.equipment.is_empty() {
            println!("No equipment configured.");
            return;
        }

        println!("Equipment:\n");
        for (i, name) in self.equipment.iter().enumerate() {
            println!("  {:>2}. {name}", i + 1);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

fn colorize_result(record: &InspectionRecord) -> colored::ColoredString {
    match record.result {
        InspectionResult::Pass => record.result.code().green(),
        InspectionResult::Fail => record.result.code().red().bold(),
    }
}
