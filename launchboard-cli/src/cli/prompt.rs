//! Interactive board selection

use anyhow::{Context, Result, bail};
use dialoguer::Select;
use is_terminal::IsTerminal;

use crate::api::Board;

/// Ask the user to pick a board. Only offered on an interactive terminal.
pub fn select_board(boards: &[Board]) -> Result<Board> {
    if !std::io::stdin().is_terminal() {
        bail!("No board given. Pass --board <name or id>");
    }
    if boards.is_empty() {
        bail!("No boards available for this token");
    }

    let labels: Vec<String> = boards
        .iter()
        .map(|b| format!("{} ({})", b.name, b.id))
        .collect();

    let choice = Select::new()
        .with_prompt("Select a board")
        .items(&labels)
        .default(0)
        .interact_opt()
        .context("Board selection failed")?;

    match choice {
        Some(index) => Ok(boards[index].clone()),
        None => bail!("Board selection cancelled"),
    }
}
