//! Copy master board items into a department board

pub mod handler;

use clap::Args;

pub use handler::handle_duplicate_command;

#[derive(Args, Debug, Clone)]
pub struct DuplicateCommands {
    /// Master board name or id
    #[arg(short, long, default_value = crate::sync::DEFAULT_SOURCE_BOARD)]
    pub source: String,

    /// Destination board name or id (default: the department's board)
    #[arg(short, long)]
    pub target: Option<String>,

    /// Department whose tasks become subitems
    #[arg(short, long)]
    pub department: Option<String>,

    /// Pause between records in milliseconds (overrides config)
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Print the operations without creating anything
    #[arg(long)]
    pub dry_run: bool,
}
