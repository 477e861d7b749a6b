//! Department board CSV: the interchange format between generation and push
//!
//! Main item rows carry the product attributes; each is followed by its
//! subitem rows, whose `Item` is indented by two spaces.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use crate::planner::{LaunchRecord, RecordSchedule, format_optional_date, parse_launch_date};

pub const MAIN_ITEM: &str = "Main Item";
pub const SUB_ITEM: &str = "Sub Item";
pub const SUBITEM_INDENT: &str = "  ";

pub const HEADER: [&str; 10] = [
    "Item",
    "Style Name",
    "Color Name",
    "Priority",
    "Status",
    "Platform",
    "Launch Date",
    "Due Date",
    "Type",
    "Description",
];

/// One row of a department CSV
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetRow {
    #[serde(rename = "Item")]
    pub item: String,
    #[serde(rename = "Style Name")]
    pub style_name: String,
    #[serde(rename = "Color Name")]
    pub color_name: String,
    #[serde(rename = "Priority")]
    pub priority: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "Launch Date")]
    pub launch_date: String,
    #[serde(rename = "Due Date")]
    pub due_date: String,
    #[serde(rename = "Type")]
    pub row_type: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl SheetRow {
    pub fn is_subitem(&self) -> bool {
        self.item.starts_with(SUBITEM_INDENT) || self.row_type == SUB_ITEM
    }

    /// Main item rows; rows from other tools may leave `Type` empty
    pub fn is_main_item(&self) -> bool {
        !self.is_subitem()
            && !self.item.trim().is_empty()
            && (self.row_type.is_empty() || self.row_type == MAIN_ITEM)
    }

    /// Rebuild the launch record a main item row was generated from
    pub fn to_record(&self) -> LaunchRecord {
        LaunchRecord {
            name: self.item.trim().to_string(),
            launch_date: parse_launch_date(&self.launch_date),
            style_name: self.style_name.clone(),
            color_name: self.color_name.clone(),
            priority: self.priority.clone(),
            status: self.status.clone(),
            platform: self.platform.clone(),
            source_group: String::new(),
        }
    }
}

/// Flatten schedules into main item rows followed by their subitem rows
pub fn build_rows(schedules: &[RecordSchedule]) -> Vec<SheetRow> {
    let mut rows = Vec::new();

    for schedule in schedules {
        let record = &schedule.record;
        rows.push(SheetRow {
            item: record.name.clone(),
            style_name: record.style_name.clone(),
            color_name: record.color_name.clone(),
            priority: record.priority.clone(),
            status: record.status.clone(),
            platform: record.platform.clone(),
            launch_date: format_optional_date(record.launch_date),
            row_type: MAIN_ITEM.to_string(),
            ..Default::default()
        });

        for task in &schedule.tasks {
            rows.push(SheetRow {
                item: format!("{}{}", SUBITEM_INDENT, task.task_name),
                status: task.status.label().to_string(),
                due_date: task.due_date_text(),
                row_type: SUB_ITEM.to_string(),
                description: task.description.clone().unwrap_or_default(),
                ..Default::default()
            });
        }
    }

    rows
}

/// Write rows with the fixed header
pub fn write_rows<W: Write>(writer: W, rows: &[SheetRow]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(HEADER).context("Failed to write CSV header")?;
    for row in rows {
        csv_writer.serialize(row).context("Failed to write CSV row")?;
    }
    csv_writer.flush().context("Failed to flush CSV output")?;

    Ok(())
}

/// Read a department CSV. Short rows leave their trailing fields empty.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<SheetRow>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader.headers().context("Missing CSV header row")?.clone();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let mut record = record.context("Malformed department CSV row")?;
        // Serde deserialization expects one field per header
        while record.len() < headers.len() {
            record.push_field("");
        }
        let row: SheetRow = record
            .deserialize(Some(&headers))
            .context("Malformed department CSV row")?;
        rows.push(row);
    }
    Ok(rows)
}

/// Main item records from a department CSV, in file order
pub fn main_item_records(rows: &[SheetRow]) -> Vec<LaunchRecord> {
    rows.iter()
        .filter(|row| row.is_main_item())
        .map(SheetRow::to_record)
        .collect()
}
