//! Duplicate command handler

use anyhow::Result;
use colored::*;

use super::DuplicateCommands;
use crate::api::{MondayClient, Throttle};
use crate::cli::output::{print_plan, print_summary};
use crate::config::{AppConfig, Department};
use crate::sync::{DEFAULT_TARGET_BOARD, DuplicateRequest, execute, plan_duplicate};

pub async fn handle_duplicate_command(args: DuplicateCommands, config: &AppConfig) -> Result<()> {
    let (department_name, department) = config.department_or_default(args.department.as_deref())?;
    let request = DuplicateRequest {
        source: args.source,
        target: target_board(args.target, department),
    };

    println!(
        "Duplicating {} -> {} with {} tasks",
        request.source.bold(),
        request.target.bold(),
        department_name
    );

    let client = MondayClient::from_config(&config.api)?;
    let plan = plan_duplicate(&client, &request, &department.sub_items, &config.subitem_columns).await?;

    if args.dry_run {
        print_plan(&plan);
        return Ok(());
    }

    let delay_ms = args.delay_ms.unwrap_or(config.submission.duplicate_delay_ms);
    let summary = execute(&client, &plan, Throttle::from_millis(delay_ms)).await?;
    print_summary(&summary);

    Ok(())
}

/// Explicit target, else the department's board, else the product development board
fn target_board(target: Option<String>, department: &Department) -> String {
    target
        .or_else(|| department.board_name.clone())
        .unwrap_or_else(|| DEFAULT_TARGET_BOARD.to_string())
}
