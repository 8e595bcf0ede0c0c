//! Interactive inspection session
//!
//! Loops over: pick equipment, enter OK/NG, enter an optional comment, save.
//! Invalid input is re-prompted by the validators; a failed save is reported
//! and the operator may try again.

use std::io::IsTerminal;

use anyhow::{Context, bail};
use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use log::warn;

use inspection_log::models::equipment::MenuSelection;
use inspection_log::models::input::{normalize_comment, normalize_equipment};
use inspection_log::models::{EquipmentCatalog, InspectionRecord, InspectionResult};
use inspection_log::output::{OperationResult, OutputMode};

use super::{Settings, save};

/// Run the interactive session until the operator stops
pub fn inspect(settings: &Settings) -> anyhow::Result<()> {
    if !std::io::stdin().is_terminal() {
        bail!(
            "Interactive mode needs a terminal. Use `inspection-log record` to log without prompts."
        );
    }

    let store = settings.open_store()?;
    let theme = ColorfulTheme::default();

    print_banner();

    let mut saved = 0usize;
    loop {
        let equipment = select_equipment(&theme, &settings.catalog)?;
        let result = prompt_result(&theme)?;
        let comment = prompt_comment(&theme)?;

        // Single clock reading: names the file and stamps the line
        let record = InspectionRecord::now(equipment, result, comment);
        println!();
        match save(&store, record, OutputMode::Human) {
            Ok(()) => saved += 1,
            Err(e) => {
                warn!("Save failed: {e:#}");
                eprintln!("{} {e:#}", "Could not save the record:".red().bold());
            },
        }
        println!();

        let again = Confirm::with_theme(&theme)
            .with_prompt("Record another inspection?")
            .default(false)
            .interact()?;
        if !again {
            break;
        }
        println!();
    }

    OperationResult {
        success: true,
        message: format!("Recorded {saved} inspection(s). Exiting, good work."),
    }
    .render(OutputMode::Human);
    Ok(())
}

fn print_banner() {
    let rule = "=".repeat(40);
    println!("{}", rule.bold());
    println!("{}", "   Equipment Daily Inspection Log".bold());
    println!("{}", rule.bold());
    println!();
}

fn select_equipment(theme: &ColorfulTheme, catalog: &EquipmentCatalog) -> anyhow::Result<String> {
    let labels = catalog.menu_labels();
    let index = Select::with_theme(theme)
        .with_prompt("Select the equipment to inspect")
        .items(&labels)
        .default(0)
        .interact()?;

    match catalog.select(index).context("Equipment menu returned an unknown entry")? {
        MenuSelection::Listed(name) => Ok(name.to_string()),
        MenuSelection::Other => {
            let raw: String = Input::with_theme(theme)
                .with_prompt("Equipment name")
                .validate_with(|input: &String| normalize_equipment(input).map(|_| ()))
                .interact_text()?;
            normalize_equipment(&raw).map_err(anyhow::Error::msg)
        },
    }
}

fn prompt_result(theme: &ColorfulTheme) -> anyhow::Result<InspectionResult> {
    let raw: String = Input::with_theme(theme)
        .with_prompt("Inspection result (OK/NG)")
        .validate_with(|input: &String| input.parse::<InspectionResult>().map(|_| ()))
        .interact_text()?;
    raw.parse().map_err(anyhow::Error::msg)
}

fn prompt_comment(theme: &ColorfulTheme) -> anyhow::Result<String> {
    let raw: String = Input::with_theme(theme)
        .with_prompt("Comment (Enter to skip)")
        .allow_empty(true)
        .interact_text()?;
    Ok(normalize_comment(&raw))
}
