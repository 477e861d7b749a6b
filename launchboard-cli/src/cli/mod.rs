//! Command line interface

pub mod commands;
pub mod output;
pub mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AppConfig;
use commands::boards::{BoardsCommands, handle_boards_command};
use commands::duplicate::{DuplicateCommands, handle_duplicate_command};
use commands::generate::{GenerateCommands, handle_generate_command};
use commands::plan::{PlanCommands, handle_plan_command};
use commands::push::{PushCommands, handle_push_command};

/// Plan product launch tasks and push them to Monday.com boards
#[derive(Parser, Debug)]
#[command(name = "launchboard", version, about)]
pub struct Cli {
    /// Config file (TOML, or JSON by extension)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate department board CSVs from a master sheet
    Generate(GenerateCommands),
    /// Print the task schedule for a master sheet
    Plan(PlanCommands),
    /// Create items and subitems on a board from a department CSV
    Push(PushCommands),
    /// Copy master board items into a department board
    Duplicate(DuplicateCommands),
    /// List boards
    Boards(BoardsCommands),
}

/// Load configuration and dispatch to the command handler
pub async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate(args) => handle_generate_command(args, &config).await,
        Commands::Plan(args) => handle_plan_command(args, &config).await,
        Commands::Push(args) => handle_push_command(args, &config).await,
        Commands::Duplicate(args) => handle_duplicate_command(args, &config).await,
        Commands::Boards(args) => handle_boards_command(args, &config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_push() {
        let cli = Cli::try_parse_from([
            "launchboard",
            "push",
            "product_development_board.csv",
            "--board",
            "SS26 Prod Dev",
            "--dry-run",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Push(args) => {
                assert_eq!(args.board.as_deref(), Some("SS26 Prod Dev"));
                assert!(args.dry_run);
                assert_eq!(args.delay_ms, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_duplicate_defaults() {
        let cli = Cli::try_parse_from(["launchboard", "duplicate"]).unwrap();
        match cli.command {
            Commands::Duplicate(args) => {
                assert_eq!(args.source, "SS26 Master");
                assert!(args.target.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
