//! Terminal output shared by the commands

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::*;

use crate::api::{Board, Operation};
use crate::planner::RecordSchedule;
use crate::sheet::{build_rows, write_rows};
use crate::sync::{RunSummary, SyncPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Department CSV interchange format
    Csv,
    /// Human-readable listing
    #[default]
    Table,
}

/// Render schedules in the requested format
pub fn format_schedules(schedules: &[RecordSchedule], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(schedules).context("Failed to format JSON output")
        }
        OutputFormat::Csv => {
            let mut buffer = Vec::new();
            write_rows(&mut buffer, &build_rows(schedules))?;
            String::from_utf8(buffer).context("CSV output was not valid UTF-8")
        }
        OutputFormat::Table => Ok(schedule_table(schedules)),
    }
}

fn schedule_table(schedules: &[RecordSchedule]) -> String {
    let mut out = String::new();

    for schedule in schedules {
        let record = &schedule.record;
        let launch = match record.launch_date {
            Some(date) => date.to_string().bright_green().to_string(),
            None => "no launch date".yellow().to_string(),
        };
        out.push_str(&format!(
            "{}  {}  {}\n",
            record.name.bold(),
            launch,
            format!("[{}]", schedule.group).dimmed()
        ));

        for task in &schedule.tasks {
            let due = match task.due_date {
                Some(date) => date.to_string().cyan().to_string(),
                None => "-".dimmed().to_string(),
            };
            out.push_str(&format!("    {:<24} {}  {}\n", task.task_name, due, task.status));
        }
    }

    out
}

/// Print a dry-run plan
pub fn print_plan(plan: &SyncPlan) {
    println!(
        "{} {} ({})",
        "Dry run for board".bright_blue().bold(),
        plan.board_name.bold(),
        plan.board_id
    );

    for op in plan.operations() {
        match &op {
            Operation::CreateGroup { title, .. } => {
                println!("  {} {}", "group".magenta(), title);
            }
            Operation::CreateItem { name, group, column_values, .. } => {
                let group = group.as_deref().unwrap_or("(top group)");
                println!("  {} {} {}", "item".green(), name.bold(), format!("-> {}", group).dimmed());
                for (column, value) in column_values {
                    println!("      {}: {}", column.dimmed(), value);
                }
            }
            Operation::CreateSubitem { name, column_values, .. } => {
                let values: Vec<String> = column_values
                    .iter()
                    .map(|(column, value)| format!("{}={}", column, value))
                    .collect();
                println!("    {} {} {}", "subitem".cyan(), name, values.join(", ").dimmed());
            }
        }
    }

    println!();
    println!(
        "{} items, {} subitems would be created",
        plan.items.len(),
        plan.subitem_count()
    );
}

pub fn print_summary(summary: &RunSummary) {
    println!();
    println!("{}", "Summary".bright_blue().bold());
    println!("  Items created:    {}", summary.items_created.to_string().bright_green());
    println!("  Subitems created: {}", summary.subitems_created.to_string().bright_green());

    if summary.has_failures() {
        println!("  Failed records:   {}", summary.failed.to_string().bright_red());
        for outcome in summary.failures() {
            println!(
                "    {} {}",
                outcome.name.red(),
                outcome.error.as_deref().unwrap_or_default().dimmed()
            );
        }
    }
}

pub fn print_boards(boards: &[Board]) {
    if boards.is_empty() {
        println!("{}", "No boards found".yellow());
        return;
    }

    for board in boards {
        let state = board.state.as_deref().unwrap_or("unknown");
        println!("  {:<12} {} {}", board.id.dimmed(), board.name.bold(), format!("({})", state).dimmed());
    }
}
