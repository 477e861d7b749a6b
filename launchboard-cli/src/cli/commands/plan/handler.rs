//! Plan command handler

use anyhow::{Context, Result, bail};
use colored::*;
use std::fs;

use super::PlanCommands;
use crate::cli::output::format_schedules;
use crate::config::AppConfig;
use crate::planner::{TaskStatus, plan_catalog};
use crate::sheet::read_master;

pub async fn handle_plan_command(args: PlanCommands, config: &AppConfig) -> Result<()> {
    if !args.master.exists() {
        bail!("Master sheet does not exist: {}", args.master.display());
    }

    let (department_name, department) = config.department_or_default(args.department.as_deref())?;
    let records = read_master(&args.master, &config.settings, args.sheet.as_deref())?;
    log::info!(
        "Planning {} records for {} ({} tasks each)",
        records.len(),
        department_name,
        department.sub_items.len()
    );

    let schedules = plan_catalog(&records, &department.sub_items, TaskStatus::NotStarted);
    let formatted = format_schedules(&schedules, args.format)?;

    match args.output {
        Some(path) => {
            fs::write(&path, &formatted)
                .with_context(|| format!("Failed to write output to: {}", path.display()))?;
            println!("Plan saved to: {}", path.display().to_string().bright_green());
        }
        None => print!("{}", formatted),
    }

    Ok(())
}
