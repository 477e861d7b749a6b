//! Push department records onto a board
//!
//! Each main item row becomes a board item with its attributes mapped onto
//! the board's columns by title, followed by one subitem per department task.

use anyhow::{Context, Result, bail};

use crate::api::{Board, BoardService, Column, ColumnKind, ColumnValues, ItemPlan, SubitemPlan};
use crate::config::SubitemColumns;
use crate::planner::{
    LaunchRecord, ScheduledTask, TaskStatus, TaskTemplate, expand_schedule, format_date,
    resolve_attribute_columns,
};

use super::executor::SyncPlan;

/// Title of the board column holding subitem due dates
pub const DUE_DATE_COLUMN: &str = "Due Date";

/// Find a board by exact name, falling back to id
pub async fn resolve_board<S>(service: &S, name_or_id: &str) -> Result<Board>
where
    S: BoardService + ?Sized,
{
    if let Some(board) = service
        .find_board_by_name(name_or_id)
        .await
        .context("Failed to look up board by name")?
    {
        return Ok(board);
    }

    let boards = service.list_boards().await.context("Failed to list boards")?;
    if let Some(board) = boards.into_iter().find(|b| b.id == name_or_id) {
        return Ok(board);
    }

    bail!("Board '{}' not found", name_or_id)
}

/// Column id for subitem due dates.
///
/// A real run creates the "Due Date" column when the board lacks one. Dry
/// runs only look. Either way the configured fallback id is used if the
/// column cannot be resolved.
pub async fn resolve_due_date_column<S>(
    service: &S,
    board_id: &str,
    subitem_columns: &SubitemColumns,
    create: bool,
) -> String
where
    S: BoardService + ?Sized,
{
    let resolved = if create {
        service
            .get_or_create_column(board_id, DUE_DATE_COLUMN, ColumnKind::Date)
            .await
            .map(Some)
    } else {
        service.list_columns(board_id).await.map(|columns| {
            columns
                .into_iter()
                .find(|c| c.title == DUE_DATE_COLUMN)
                .map(|c| c.id)
        })
    };

    match resolved {
        Ok(Some(id)) => id,
        Ok(None) => subitem_columns.due_date.clone(),
        Err(e) => {
            log::warn!(
                "Could not set up '{}' column ({:#}), using '{}'",
                DUE_DATE_COLUMN,
                e,
                subitem_columns.due_date
            );
            subitem_columns.due_date.clone()
        }
    }
}

/// Column values for one generated subitem
pub fn subitem_values(
    task: &ScheduledTask,
    subitem_columns: &SubitemColumns,
    due_date_column: &str,
) -> ColumnValues {
    let mut values = ColumnValues::new();
    values.insert(subitem_columns.status.clone(), task.status.label().to_string());
    if let Some(due) = task.due_date {
        values.insert(due_date_column.to_string(), format_date(due));
    }
    if let Some(description) = task.description.as_deref().filter(|d| !d.is_empty()) {
        values.insert(subitem_columns.description.clone(), description.to_string());
    }
    values
}

pub fn subitem_plans(
    tasks: &[ScheduledTask],
    subitem_columns: &SubitemColumns,
    due_date_column: &str,
) -> Vec<SubitemPlan> {
    tasks
        .iter()
        .map(|task| SubitemPlan {
            name: task.task_name.clone(),
            column_values: subitem_values(task, subitem_columns, due_date_column),
        })
        .collect()
}

/// Plan items for a set of records on a board with the given columns
pub fn plan_records(
    records: &[LaunchRecord],
    templates: &[TaskTemplate],
    columns: &[Column],
    subitem_columns: &SubitemColumns,
    due_date_column: &str,
) -> Vec<ItemPlan> {
    records
        .iter()
        .map(|record| {
            if !record.has_launch_date() {
                log::warn!("'{}' has no launch date; subitems will have no due date", record.name);
            }
            let tasks = expand_schedule(record, templates, TaskStatus::NotStarted);
            ItemPlan {
                name: record.name.clone(),
                group: None,
                column_values: resolve_attribute_columns(columns, record),
                subitems: subitem_plans(&tasks, subitem_columns, due_date_column),
            }
        })
        .collect()
}

/// Build the full push plan for a board
pub async fn plan_push<S>(
    service: &S,
    board: &Board,
    records: &[LaunchRecord],
    templates: &[TaskTemplate],
    subitem_columns: &SubitemColumns,
    dry_run: bool,
) -> Result<SyncPlan>
where
    S: BoardService + ?Sized,
{
    let due_date_column =
        resolve_due_date_column(service, &board.id, subitem_columns, !dry_run).await;
    log::info!("Due dates go to column '{}'", due_date_column);

    let columns = service
        .list_columns(&board.id)
        .await
        .with_context(|| format!("Failed to fetch columns for board '{}'", board.name))?;

    let mut plan = SyncPlan::new(&board.id, &board.name);
    plan.items = plan_records(records, templates, &columns, subitem_columns, &due_date_column);
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Throttle;
    use crate::config::departments::product_development;
    use crate::sync::executor::execute;
    use crate::sync::testing::FakeBoards;
    use chrono::NaiveDate;

    fn record(name: &str, launch: Option<(i32, u32, u32)>) -> LaunchRecord {
        let mut record = LaunchRecord::new(
            name,
            launch.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        );
        record.style_name = "Trail Runner".to_string();
        record.priority = "High".to_string();
        record
    }

    #[tokio::test]
    async fn test_resolve_board_by_name_or_id() {
        let boards = FakeBoards::new();
        let id = boards.add_board("SS26 Prod Dev", &[]);

        assert_eq!(resolve_board(&boards, "SS26 Prod Dev").await.unwrap().id, id);
        assert_eq!(resolve_board(&boards, &id).await.unwrap().name, "SS26 Prod Dev");
        assert!(resolve_board(&boards, "SS26 Marketing").await.is_err());
    }

    #[tokio::test]
    async fn test_resolve_board_prefers_name_over_id() {
        let boards = FakeBoards::new();
        let first = boards.add_board("SS26 Master", &[]);
        let named_like_id = boards.add_board(&first, &[]);

        let board = resolve_board(&boards, &first).await.unwrap();
        assert_eq!(board.id, named_like_id);
        assert_eq!(boards.name_lookups(), vec![first.clone()]);

        let board = resolve_board(&boards, &named_like_id).await.unwrap();
        assert_eq!(board.name, first);
    }

    #[test]
    fn test_subitem_values() {
        let columns = SubitemColumns::default();
        let task = ScheduledTask {
            task_name: "Fabric Approved".to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 9, 8),
            status: TaskStatus::NotStarted,
            description: Some("Mill sign-off".to_string()),
        };
        let values = subitem_values(&task, &columns, "date0");
        assert_eq!(values.get("status").map(String::as_str), Some("Not Started"));
        assert_eq!(values.get("date0").map(String::as_str), Some("2025-09-08"));
        assert_eq!(values.get("text").map(String::as_str), Some("Mill sign-off"));

        let undated = ScheduledTask { due_date: None, description: None, ..task };
        let values = subitem_values(&undated, &columns, "date0");
        assert_eq!(values.len(), 1);
    }

    #[tokio::test]
    async fn test_push_creates_due_date_column_and_subitems() {
        let boards = FakeBoards::new();
        let board_id = boards.add_board("SS26 Prod Dev", &["Style Name", "Priority", "Launch Date"]);
        let board = resolve_board(&boards, "SS26 Prod Dev").await.unwrap();
        let dept = product_development();

        let records = vec![record("TR-01", Some((2025, 12, 1))), record("TR-02", None)];
        let plan = plan_push(&boards, &board, &records, &dept.sub_items, &SubitemColumns::default(), false)
            .await
            .unwrap();

        assert!(boards.column_titles(&board_id).contains(&DUE_DATE_COLUMN.to_string()));
        assert_eq!(plan.items.len(), 2);
        assert_eq!(plan.subitem_count(), 10);
        assert_eq!(
            plan.items[0].column_values.get("col_launch_date").map(String::as_str),
            Some("2025-12-01")
        );

        let summary = execute(&boards, &plan, Throttle::disabled()).await.unwrap();
        assert_eq!(summary.items_created, 2);
        assert_eq!(summary.subitems_created, 10);

        let items = boards.items(&board_id);
        let subitems = boards.subitems(&items[0].id);
        assert_eq!(subitems[0].name, "Fabric Approved");
        assert_eq!(subitems[0].column_text("col_due_date"), Some("2025-02-24"));
        assert_eq!(subitems[4].column_text("col_due_date"), Some("2025-09-08"));

        let undated = boards.subitems(&items[1].id);
        assert_eq!(undated.len(), 5);
        assert_eq!(undated[0].column_text("col_due_date"), None);
    }

    #[tokio::test]
    async fn test_dry_run_does_not_create_column() {
        let boards = FakeBoards::new();
        let board_id = boards.add_board("SS26 Prod Dev", &["Style Name"]);
        let board = resolve_board(&boards, &board_id).await.unwrap();
        let dept = product_development();

        let records = vec![record("TR-01", Some((2026, 6, 1)))];
        let plan = plan_push(&boards, &board, &records, &dept.sub_items, &SubitemColumns::default(), true)
            .await
            .unwrap();

        assert_eq!(boards.column_titles(&board_id), vec!["Style Name"]);
        let fabric = &plan.items[0].subitems[0];
        assert_eq!(fabric.column_values.get("date").map(String::as_str), Some("2025-08-25"));
        assert!(boards.items(&board_id).is_empty());
    }
}
