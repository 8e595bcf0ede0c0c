//! inspection-log - A CLI tool to record daily equipment inspections
//!
//! This library provides the append-only record writer behind the CLI:
//! CSV field encoding, date-keyed log files with a single header line, and
//! appends that stay correct when several processes write the same day's file.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod models;
pub mod output;
pub mod paths;
pub mod storage;
