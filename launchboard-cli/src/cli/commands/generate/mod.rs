//! Generate department CSVs from a master sheet

pub mod handler;

use clap::Args;
use std::path::PathBuf;

pub use handler::handle_generate_command;

#[derive(Args, Debug, Clone)]
pub struct GenerateCommands {
    /// Master product sheet (.csv or .xlsx)
    pub master: PathBuf,

    /// Only generate this department (default: all configured departments)
    #[arg(short, long)]
    pub department: Option<String>,

    /// Directory for the generated `<department>_board.csv` files
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Worksheet to read from an Excel master (default: first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Keep records without a launch date (their subitems get no due date)
    #[arg(long)]
    pub include_undated: bool,
}
