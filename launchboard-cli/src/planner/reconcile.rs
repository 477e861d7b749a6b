//! Column reconciliation between boards
//!
//! Items copied from the master board keep their column values keyed by
//! column id. The platform column is the exception: the two boards gave it
//! different ids, so it is located by title on each side and re-keyed.

use chrono::NaiveDate;

use super::dates::{format_optional_date, parse_launch_date};
use super::schedule::LaunchRecord;
use crate::api::models::{Column, ColumnValue, ColumnValues, Item};

const PLATFORM_NEEDLE: &str = "platform";

/// First column whose title contains "platform" (case-insensitive)
pub fn find_platform_column(columns: &[Column]) -> Option<&Column> {
    columns
        .iter()
        .find(|c| c.title.to_lowercase().contains(PLATFORM_NEEDLE))
}

/// Build destination column values from a source item's cells.
///
/// Empty cells are dropped. The source platform value moves to the
/// destination platform column; if either side has no platform column the
/// value is left out.
pub fn reconcile_columns(
    source_values: &[ColumnValue],
    source_platform: Option<&Column>,
    dest_platform: Option<&Column>,
) -> ColumnValues {
    let mut values = ColumnValues::new();
    let mut platform_value = None;

    for cell in source_values {
        let text = cell.display_text();
        if text.is_empty() || cell.id.is_empty() {
            continue;
        }

        if source_platform.is_some_and(|p| p.id == cell.id) {
            platform_value = Some(text);
            continue;
        }

        values.insert(cell.id.clone(), text.to_string());
    }

    match (platform_value, dest_platform) {
        (Some(platform), Some(dest)) => {
            values.insert(dest.id.clone(), platform.to_string());
        }
        (Some(platform), None) => {
            log::debug!("Dropping platform value '{}': no platform column on target", platform);
        }
        (None, _) => {}
    }

    values
}

/// Locate a launch date among an item's cells.
///
/// Cells whose id mentions "launch" or "date" are tried in board order; the
/// first one that parses wins.
pub fn find_launch_date(source_values: &[ColumnValue]) -> Option<NaiveDate> {
    source_values
        .iter()
        .filter(|cell| {
            let id = cell.id.to_lowercase();
            id.contains("launch") || id.contains("date")
        })
        .find_map(|cell| parse_launch_date(cell.display_text()))
}

/// Map a record's attributes onto a board's columns by title.
///
/// Titles are compared case-insensitively. Attributes with no matching
/// column, or with empty values, are skipped.
pub fn resolve_attribute_columns(columns: &[Column], record: &LaunchRecord) -> ColumnValues {
    let launch_date = format_optional_date(record.launch_date);
    let attributes: [(&str, &str); 6] = [
        ("Style Name", &record.style_name),
        ("Color Name", &record.color_name),
        ("Priority", &record.priority),
        ("Status", &record.status),
        ("Platform", &record.platform),
        ("Launch Date", &launch_date),
    ];

    let mut values = ColumnValues::new();
    for (title, value) in attributes {
        if value.is_empty() {
            continue;
        }
        match columns.iter().find(|c| c.title.eq_ignore_ascii_case(title)) {
            Some(column) => {
                values.insert(column.id.clone(), value.to_string());
            }
            None => log::debug!("No '{}' column on target board, skipping", title),
        }
    }

    values
}

/// Turn a fetched master board item into a launch record
pub fn record_from_item(item: &Item, platform: Option<&Column>) -> LaunchRecord {
    LaunchRecord {
        name: item.name.clone(),
        launch_date: find_launch_date(&item.column_values),
        platform: platform
            .and_then(|p| item.column_text(&p.id))
            .unwrap_or_default()
            .to_string(),
        source_group: item.group_title().to_string(),
        ..Default::default()
    }
}
