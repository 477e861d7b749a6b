//! Read the master product sheet (CSV or Excel)

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, Xlsx, open_workbook};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::SheetSettings;
use crate::planner::{LaunchRecord, parse_launch_date};

/// One sheet row keyed by header
pub type RawRow = HashMap<String, String>;

/// Read launch records from a master sheet.
///
/// `.xlsx` files are read with calamine (first sheet unless `sheet` names
/// one); anything else is treated as CSV with a header row.
pub fn read_master<P: AsRef<Path>>(
    path: P,
    settings: &SheetSettings,
    sheet: Option<&str>,
) -> Result<Vec<LaunchRecord>> {
    let path = path.as_ref();
    let rows = if is_excel(path) {
        read_xlsx_rows(path, sheet)?
    } else {
        let file = File::open(path)
            .with_context(|| format!("Failed to open master sheet: {}", path.display()))?;
        read_csv_rows(file).with_context(|| format!("Failed to read CSV: {}", path.display()))?
    };

    log::info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(records_from_rows(&rows, settings))
}

fn is_excel(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"))
}

/// Read CSV rows keyed by header.
///
/// Short rows are accepted; their missing trailing cells read as absent.
pub fn read_csv_rows<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader.headers().context("Missing CSV header row")?.clone();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("Malformed CSV row")?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

/// Read worksheet rows keyed by the first row's headers
fn read_xlsx_rows(path: &Path, sheet: Option<&str>) -> Result<Vec<RawRow>> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => match workbook.sheet_names().first() {
            Some(first) => first.clone(),
            None => bail!("Workbook has no sheets: {}", path.display()),
        },
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = match rows_iter.next() {
        Some(header_row) => header_row.iter().map(cell_to_text).collect(),
        None => return Ok(Vec::new()),
    };

    let rows = rows_iter
        .map(|cells| {
            headers
                .iter()
                .zip(cells.iter())
                .filter(|(h, _)| !h.is_empty())
                .map(|(h, c)| (h.clone(), cell_to_text(c)))
                .collect()
        })
        .collect();

    Ok(rows)
}

/// Render a cell as the text a CSV export would have held.
///
/// Date cells become their serial number so they go through the same
/// launch date resolution as exported sheets.
fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => (dt.as_f64().trunc() as i64).to_string(),
        Data::DateTimeIso(s) => s.split('T').next().unwrap_or_default().to_string(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Turn raw rows into launch records, skipping rows without an item name
pub fn records_from_rows(rows: &[RawRow], settings: &SheetSettings) -> Vec<LaunchRecord> {
    let field = |row: &RawRow, column: &str| -> String {
        row.get(column).map(|v| v.trim().to_string()).unwrap_or_default()
    };

    let mut records = Vec::new();
    for row in rows {
        let name = field(row, &settings.item_name_column);
        if name.is_empty() {
            continue;
        }

        let raw_date = field(row, &settings.launch_date_column);
        let launch_date = parse_launch_date(&raw_date);
        if launch_date.is_none() && !raw_date.is_empty() {
            log::warn!("Could not parse launch date for '{}': {}", name, raw_date);
        }

        records.push(LaunchRecord {
            name,
            launch_date,
            style_name: field(row, &settings.style_name_column),
            color_name: field(row, &settings.color_name_column),
            priority: field(row, &settings.priority_column),
            status: field(row, &settings.status_column),
            platform: field(row, &settings.platform_column),
            source_group: settings
                .group_column
                .as_deref()
                .map(|column| field(row, column))
                .unwrap_or_default(),
        });
    }

    records
}
