//! Boards command handler

use anyhow::{Context, Result};

use super::BoardsCommands;
use crate::api::{Board, BoardService, MondayClient};
use crate::cli::output::print_boards;
use crate::config::AppConfig;

pub async fn handle_boards_command(args: BoardsCommands, config: &AppConfig) -> Result<()> {
    let client = MondayClient::from_config(&config.api)?;
    let boards = client.list_boards().await.context("Failed to list boards")?;
    let boards = filter_boards(boards, args.filter.as_deref());

    if args.json {
        let json = serde_json::to_string_pretty(&boards).context("Failed to format JSON output")?;
        println!("{}", json);
    } else {
        print_boards(&boards);
    }

    Ok(())
}

fn filter_boards(boards: Vec<Board>, filter: Option<&str>) -> Vec<Board> {
    match filter {
        Some(needle) => {
            let needle = needle.to_lowercase();
            boards
                .into_iter()
                .filter(|b| b.name.to_lowercase().contains(&needle))
                .collect()
        }
        None => boards,
    }
}
