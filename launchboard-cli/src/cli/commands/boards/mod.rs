//! List boards visible to the API token

pub mod handler;

use clap::Args;

pub use handler::handle_boards_command;

#[derive(Args, Debug, Clone)]
pub struct BoardsCommands {
    /// Only show boards whose name contains this text (case-insensitive)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Print JSON instead of a listing
    #[arg(long)]
    pub json: bool,
}
