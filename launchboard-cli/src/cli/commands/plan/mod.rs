//! Preview a launch schedule without touching any board

pub mod handler;

use clap::Args;
use std::path::PathBuf;

use crate::cli::output::OutputFormat;

pub use handler::handle_plan_command;

#[derive(Args, Debug, Clone)]
pub struct PlanCommands {
    /// Master product sheet (.csv or .xlsx)
    pub master: PathBuf,

    /// Department whose tasks to schedule
    #[arg(short, long)]
    pub department: Option<String>,

    /// Worksheet to read from an Excel master
    #[arg(long)]
    pub sheet: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
