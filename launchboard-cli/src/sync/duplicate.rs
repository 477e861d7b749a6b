//! Copy the master board into a department board
//!
//! Items land in the destination group picked by [`classify_group`] from
//! their master board group. Column values carry over by id, except the
//! platform column which is matched by title on each board. Every copied item
//! gets the department's subitems with status "Working on it".

use anyhow::{Context, Result};

use crate::api::{BoardService, ItemPlan};
use crate::config::SubitemColumns;
use crate::planner::{
    TARGET_GROUPS, TaskStatus, TaskTemplate, classify_group, expand_schedule,
    find_platform_column, reconcile_columns, record_from_item,
};

use super::executor::SyncPlan;
use super::push::{resolve_board, subitem_plans};

pub const DEFAULT_SOURCE_BOARD: &str = "SS26 Master";
pub const DEFAULT_TARGET_BOARD: &str = "SS26 Prod Dev";

/// Which boards to read from and write to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRequest {
    pub source: String,
    pub target: String,
}

impl Default for DuplicateRequest {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE_BOARD.to_string(),
            target: DEFAULT_TARGET_BOARD.to_string(),
        }
    }
}

/// Fetch the master board and plan its copy onto the target board
pub async fn plan_duplicate<S>(
    service: &S,
    request: &DuplicateRequest,
    templates: &[TaskTemplate],
    subitem_columns: &SubitemColumns,
) -> Result<SyncPlan>
where
    S: BoardService + ?Sized,
{
    let source = resolve_board(service, &request.source)
        .await
        .context("Source board is required")?;
    let target = resolve_board(service, &request.target)
        .await
        .context("Target board is required")?;
    log::info!("Source board: {} ({})", source.name, source.id);
    log::info!("Target board: {} ({})", target.name, target.id);

    let items = service
        .list_items(&source.id)
        .await
        .with_context(|| format!("Failed to fetch items from '{}'", source.name))?;
    let source_columns = service
        .list_columns(&source.id)
        .await
        .with_context(|| format!("Failed to fetch columns for '{}'", source.name))?;
    let target_columns = service
        .list_columns(&target.id)
        .await
        .with_context(|| format!("Failed to fetch columns for '{}'", target.name))?;

    let source_platform = find_platform_column(&source_columns);
    let target_platform = find_platform_column(&target_columns);
    match (source_platform, target_platform) {
        (Some(from), Some(to)) => log::info!("Platform column: {} -> {}", from.title, to.title),
        _ => log::warn!("Platform column not found on one or both boards"),
    }

    let mut plan = SyncPlan::new(&target.id, &target.name);
    plan.groups = TARGET_GROUPS.iter().map(|g| g.to_string()).collect();

    for item in &items {
        let record = record_from_item(item, source_platform);
        let group = classify_group(item.group_title());
        if !record.has_launch_date() {
            log::debug!("'{}' has no launch date; subitems will have no due date", item.name);
        }

        let tasks = expand_schedule(&record, templates, TaskStatus::WorkingOnIt);
        plan.items.push(ItemPlan {
            name: item.name.clone(),
            group: Some(group.to_string()),
            column_values: reconcile_columns(&item.column_values, source_platform, target_platform),
            subitems: subitem_plans(&tasks, subitem_columns, &subitem_columns.due_date),
        });
    }

    log::info!("Planned {} items from '{}'", plan.items.len(), source.name);
    Ok(plan)
}
