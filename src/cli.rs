//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{self, Settings};
use inspection_log::output::OutputMode;
use inspection_log::paths;

/// inspection-log - Daily equipment inspection records
#[derive(Parser, Debug)]
#[command(
    name = "inspection-log",
    version,
    about = "Daily equipment inspection records",
    long_about = "Record equipment inspections (OK/NG plus a comment).\n\n\
                  Each record is appended to inspection_results_YYYYMMDD.csv,\n\
                  one file per day, with a single header line per file."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the daily inspection files
    #[arg(short, long, global = true, default_value = paths::DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Equipment catalog entry (repeat to replace the default list)
    #[arg(long = "equipment-item", global = true, value_name = "NAME")]
    pub equipment_items: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record inspections interactively (default)
    Inspect,

    /// Record a single inspection without prompting
    Record {
        /// Equipment name
        #[arg(short, long)]
        equipment: String,

        /// Inspection result: OK or NG
        #[arg(short, long)]
        result: String,

        /// Optional comment (stored as "none" when empty)
        #[arg(short, long, default_value = "")]
        comment: String,

        /// Record at this moment instead of now ("YYYY-MM-DD HH:MM")
        #[arg(long, value_name = "MOMENT")]
        at: Option<String>,
    },

    /// List the equipment catalog
    Equipment,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let settings = Settings::new(cli.output_dir, &cli.equipment_items);

    match cli.command.unwrap_or(Command::Inspect) {
        Command::Inspect => commands::inspect(&settings),
        Command::Record {
            equipment,
            result,
            comment,
            at,
        } => commands::record(&settings, &equipment, &result, &comment, at.as_deref(), output_mode),
        Command::Equipment => {
            commands::equipment(&settings, output_mode);
            Ok(())
        },
    }
}
