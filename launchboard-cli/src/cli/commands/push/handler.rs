//! Push command handler

use anyhow::{Context, Result, bail};
use colored::*;
use std::fs::File;

use super::PushCommands;
use crate::api::{Board, BoardService, MondayClient, Throttle};
use crate::cli::output::{print_plan, print_summary};
use crate::cli::prompt::select_board;
use crate::config::AppConfig;
use crate::sheet::{main_item_records, read_rows};
use crate::sync::{execute, plan_push, resolve_board};

pub async fn handle_push_command(args: PushCommands, config: &AppConfig) -> Result<()> {
    if !args.csv.exists() {
        bail!("CSV file does not exist: {}", args.csv.display());
    }

    let file = File::open(&args.csv)
        .with_context(|| format!("Failed to open CSV: {}", args.csv.display()))?;
    let rows = read_rows(file).with_context(|| format!("Failed to read CSV: {}", args.csv.display()))?;
    let records = main_item_records(&rows);
    println!(
        "Loaded {} main items from {}",
        records.len().to_string().bright_green(),
        args.csv.display()
    );
    if records.is_empty() {
        println!("{}", "Nothing to push".yellow());
        return Ok(());
    }

    let (_, department) = config.department_or_default(args.department.as_deref())?;
    let client = MondayClient::from_config(&config.api)?;

    let board = pick_board(&client, args.board.as_deref()).await?;
    println!("Selected board: {} ({})", board.name.bold(), board.id);

    let plan = plan_push(
        &client,
        &board,
        &records,
        &department.sub_items,
        &config.subitem_columns,
        args.dry_run,
    )
    .await?;

    if args.dry_run {
        print_plan(&plan);
        return Ok(());
    }

    let throttle = Throttle::from_millis(args.delay_ms.unwrap_or(config.submission.delay_ms));
    let summary = execute(&client, &plan, throttle).await?;
    print_summary(&summary);

    Ok(())
}

/// Board named on the command line, or one picked interactively
async fn pick_board<S: BoardService + ?Sized>(service: &S, board: Option<&str>) -> Result<Board> {
    match board {
        Some(name_or_id) => resolve_board(service, name_or_id).await,
        None => {
            let boards = service.list_boards().await.context("Failed to list boards")?;
            select_board(&boards)
        }
    }
}
