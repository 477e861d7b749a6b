//! Generate command handler

use anyhow::{Context, Result, bail};
use colored::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use super::GenerateCommands;
use crate::config::{AppConfig, Department, department_slug};
use crate::planner::{LaunchRecord, TaskStatus, plan_catalog};
use crate::sheet::{build_rows, read_master, write_rows};

pub async fn handle_generate_command(args: GenerateCommands, config: &AppConfig) -> Result<()> {
    if !args.master.exists() {
        bail!("Master sheet does not exist: {}", args.master.display());
    }

    let records = read_master(&args.master, &config.settings, args.sheet.as_deref())?;
    println!(
        "Loaded {} records from {}",
        records.len().to_string().bright_green(),
        args.master.display()
    );

    let records = select_records(records, args.include_undated);

    let departments: Vec<(&str, &Department)> = match args.department.as_deref() {
        Some(name) => vec![config.department(name)?],
        None => config
            .departments
            .iter()
            .map(|(name, dept)| (name.as_str(), dept))
            .collect(),
    };

    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!("Failed to create output directory: {}", args.output_dir.display())
    })?;

    for (name, department) in departments {
        println!();
        println!("Generating {} board...", name.bold());

        if records.is_empty() {
            println!("{}", format!("No data generated for {}", name).yellow());
            continue;
        }

        let path = write_department_csv(&args.output_dir, name, department, &records)?;
        println!("Generated {}", path.display().to_string().bright_green());
    }

    Ok(())
}

/// Drop records without a launch date unless asked to keep them
fn select_records(records: Vec<LaunchRecord>, include_undated: bool) -> Vec<LaunchRecord> {
    if include_undated {
        return records;
    }

    let (dated, undated): (Vec<_>, Vec<_>) = records.into_iter().partition(LaunchRecord::has_launch_date);
    if !undated.is_empty() {
        log::info!("Skipping {} records without a launch date", undated.len());
    }
    dated
}

/// Write `<slug>_board.csv` and return its path
fn write_department_csv(
    output_dir: &Path,
    name: &str,
    department: &Department,
    records: &[LaunchRecord],
) -> Result<PathBuf> {
    let schedules = plan_catalog(records, &department.sub_items, TaskStatus::NotStarted);
    let rows = build_rows(&schedules);

    let path = output_dir.join(format!("{}_board.csv", department_slug(name)));
    let file = File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_rows(file, &rows).with_context(|| format!("Failed to write {}", path.display()))?;

    log::debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(path)
}
