//! Submit a planned run to a board
//!
//! Records go one at a time: the item, then each subitem, then the throttle
//! pause. A failure ends that record only. Nothing already created is rolled
//! back.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;

use crate::api::{BoardService, ItemPlan, Operation, RecordOutcome, Throttle};

use super::report::RunSummary;

/// Everything a run will create on one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncPlan {
    pub board_id: String,
    pub board_name: String,
    /// Groups ensured before any item is created
    pub groups: Vec<String>,
    pub items: Vec<ItemPlan>,
}

impl SyncPlan {
    pub fn new(board_id: impl Into<String>, board_name: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            board_name: board_name.into(),
            groups: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Every mutation in submission order
    pub fn operations(&self) -> Vec<Operation> {
        let mut ops: Vec<Operation> = self
            .groups
            .iter()
            .map(|title| Operation::CreateGroup {
                board_id: self.board_id.clone(),
                title: title.clone(),
            })
            .collect();

        for item in &self.items {
            ops.extend(item.operations(&self.board_id));
        }
        ops
    }

    pub fn subitem_count(&self) -> usize {
        self.items.iter().map(|i| i.subitems.len()).sum()
    }
}

/// Execute a plan sequentially.
///
/// Group setup errors abort the run; per-record errors are logged and
/// counted in the summary.
pub async fn execute<S>(service: &S, plan: &SyncPlan, throttle: Throttle) -> Result<RunSummary>
where
    S: BoardService + ?Sized,
{
    let mut group_ids: HashMap<String, String> = HashMap::new();
    for title in &plan.groups {
        let id = service.get_or_create_group(&plan.board_id, title).await?;
        log::debug!("Group '{}' -> {}", title, id);
        group_ids.insert(title.clone(), id);
    }

    let mut summary = RunSummary::default();
    let total = plan.items.len();

    for (index, item) in plan.items.iter().enumerate() {
        log::info!("[{}/{}] Processing {}", index + 1, total, item.name);

        let outcome = match resolve_group(service, &plan.board_id, item, &mut group_ids).await {
            Ok(group_id) => submit_item(service, &plan.board_id, group_id.as_deref(), item).await,
            Err(e) => RecordOutcome::error(&item.name, None, 0, format!("{:#}", e)),
        };

        if let Some(error) = &outcome.error {
            log::warn!("Failed to submit '{}': {}", item.name, error);
        }
        summary.record(outcome);

        if index + 1 < total {
            throttle.pause().await;
        }
    }

    log::info!(
        "Run complete: {} items, {} subitems, {} failed",
        summary.items_created,
        summary.subitems_created,
        summary.failed
    );
    Ok(summary)
}

async fn resolve_group<S>(
    service: &S,
    board_id: &str,
    item: &ItemPlan,
    group_ids: &mut HashMap<String, String>,
) -> Result<Option<String>>
where
    S: BoardService + ?Sized,
{
    let Some(title) = &item.group else {
        return Ok(None);
    };

    if let Some(id) = group_ids.get(title) {
        return Ok(Some(id.clone()));
    }

    let id = service.get_or_create_group(board_id, title).await?;
    group_ids.insert(title.clone(), id.clone());
    Ok(Some(id))
}

async fn submit_item<S>(service: &S, board_id: &str, group_id: Option<&str>, item: &ItemPlan) -> RecordOutcome
where
    S: BoardService + ?Sized,
{
    let created = match service
        .create_item(board_id, group_id, &item.name, &item.column_values)
        .await
    {
        Ok(created) => created,
        Err(e) => return RecordOutcome::error(&item.name, None, 0, format!("{:#}", e)),
    };

    log::debug!("Created item '{}' ({})", created.name, created.id);

    let mut subitems_created = 0;
    for subitem in &item.subitems {
        if let Err(e) = service
            .create_subitem(&created.id, &subitem.name, &subitem.column_values)
            .await
        {
            return RecordOutcome::error(
                &item.name,
                Some(created.id),
                subitems_created,
                format!("subitem '{}': {:#}", subitem.name, e),
            );
        }
        subitems_created += 1;
    }

    RecordOutcome::success(&item.name, created.id, subitems_created)
}
