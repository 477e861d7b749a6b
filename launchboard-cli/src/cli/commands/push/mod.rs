//! Push a department CSV onto a Monday.com board

pub mod handler;

use clap::Args;
use std::path::PathBuf;

pub use handler::handle_push_command;

#[derive(Args, Debug, Clone)]
pub struct PushCommands {
    /// Department CSV produced by `generate`
    pub csv: PathBuf,

    /// Target board name or id (prompted for when omitted on a terminal)
    #[arg(short, long)]
    pub board: Option<String>,

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
