//! Launch records, task templates and the per-record schedule

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::{calculate_due_date, format_optional_date};
use super::groups::classify_group;

/// One product entry from the master sheet or master board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub name: String,
    /// `None` when the sheet had no usable launch date
    pub launch_date: Option<NaiveDate>,
    pub style_name: String,
    pub color_name: String,
    pub priority: String,
    pub status: String,
    pub platform: String,
    /// Title of the section the record came from (board group or sheet column)
    pub source_group: String,
}

impl LaunchRecord {
    pub fn new(name: impl Into<String>, launch_date: Option<NaiveDate>) -> Self {
        Self {
            name: name.into(),
            launch_date,
            ..Default::default()
        }
    }

    /// Destination group on the product development board
    pub fn target_group(&self) -> &'static str {
        classify_group(&self.source_group)
    }

    pub fn has_launch_date(&self) -> bool {
        self.launch_date.is_some()
    }
}

/// A recurring subitem definition, configured per department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTemplate {
    pub task_name: String,
    pub lead_time_weeks: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TaskTemplate {
    pub fn new(task_name: impl Into<String>, lead_time_weeks: u32) -> Self {
        Self {
            task_name: task_name.into(),
            lead_time_weeks,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Initial status label given to generated subitems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Used for CSV generation and board pushes
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    /// Used when duplicating a master board (matches that board's status labels)
    #[serde(rename = "Working on it")]
    WorkingOnIt,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::WorkingOnIt => "Working on it",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A task derived from one record and one template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub task_name: String,
    /// Absent when the parent record has no launch date
    pub due_date: Option<NaiveDate>,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ScheduledTask {
    /// Due date as `YYYY-MM-DD`, empty when absent
    pub fn due_date_text(&self) -> String {
        format_optional_date(self.due_date)
    }
}

/// Expand a record into one task per template, keeping template order.
///
/// Always returns `templates.len()` tasks. Undated records get undated tasks.
pub fn expand_schedule(
    record: &LaunchRecord,
    templates: &[TaskTemplate],
    initial_status: TaskStatus,
) -> Vec<ScheduledTask> {
    templates
        .iter()
        .map(|template| ScheduledTask {
            task_name: template.task_name.clone(),
            due_date: calculate_due_date(record.launch_date, template.lead_time_weeks),
            status: initial_status,
            description: template.description.clone(),
        })
        .collect()
}

/// Schedule for a whole catalog, one entry per record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSchedule {
    pub record: LaunchRecord,
    pub group: &'static str,
    pub tasks: Vec<ScheduledTask>,
}

/// Expand every record in a catalog
pub fn plan_catalog(
    records: &[LaunchRecord],
    templates: &[TaskTemplate],
    initial_status: TaskStatus,
) -> Vec<RecordSchedule> {
    records
        .iter()
        .map(|record| RecordSchedule {
            record: record.clone(),
            group: record.target_group(),
            tasks: expand_schedule(record, templates, initial_status),
        })
        .collect()
}
