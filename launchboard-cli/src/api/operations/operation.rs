//! Board mutations planned for a run
//!
//! Every record becomes an [`ItemPlan`]: the item itself plus its subitems.
//! Plans are built up front so a dry run can print exactly what a real run
//! would submit.

use serde::{Deserialize, Serialize};

use crate::api::models::ColumnValues;

/// A single board mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Operation {
    /// Ensure a group exists on the board
    CreateGroup {
        board_id: String,
        title: String,
    },
    /// Create a top-level item
    CreateItem {
        board_id: String,
        /// Group title; `None` puts the item in the board's top group
        group: Option<String>,
        name: String,
        column_values: ColumnValues,
    },
    /// Create a subitem under an item created earlier in the same plan
    CreateSubitem {
        /// Name of the parent item (its id only exists once it is created)
        parent: String,
        name: String,
        column_values: ColumnValues,
    },
}

impl Operation {
    pub fn operation_type(&self) -> &'static str {
        match self {
            Self::CreateGroup { .. } => "create_group",
            Self::CreateItem { .. } => "create_item",
            Self::CreateSubitem { .. } => "create_subitem",
        }
    }

    /// Name of the thing being created
    pub fn name(&self) -> &str {
        match self {
            Self::CreateGroup { title, .. } => title,
            Self::CreateItem { name, .. } => name,
            Self::CreateSubitem { name, .. } => name,
        }
    }
}

/// Subitem to create under a planned item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubitemPlan {
    pub name: String,
    pub column_values: ColumnValues,
}

/// One record's item and its subitems
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPlan {
    pub name: String,
    /// Destination group title
    pub group: Option<String>,
    pub column_values: ColumnValues,
    pub subitems: Vec<SubitemPlan>,
}

impl ItemPlan {
    /// Flatten into operations, item first then subitems in order
    pub fn operations(&self, board_id: &str) -> Vec<Operation> {
        let mut ops = Vec::with_capacity(self.subitems.len() + 1);
        ops.push(Operation::CreateItem {
            board_id: board_id.to_string(),
            group: self.group.clone(),
            name: self.name.clone(),
            column_values: self.column_values.clone(),
        });
        ops.extend(self.subitems.iter().map(|sub| Operation::CreateSubitem {
            parent: self.name.clone(),
            name: sub.name.clone(),
            column_values: sub.column_values.clone(),
        }));
        ops
    }
}

/// What happened to one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordOutcome {
    pub name: String,
    /// Id of the created item, when item creation got that far
    pub item_id: Option<String>,
    pub subitems_created: usize,
    pub error: Option<String>,
}

impl RecordOutcome {
    pub fn success(name: impl Into<String>, item_id: impl Into<String>, subitems_created: usize) -> Self {
        Self {
            name: name.into(),
            item_id: Some(item_id.into()),
            subitems_created,
            error: None,
        }
    }

    /// A failure. `item_id` is set when the item exists but a subitem failed;
    /// nothing is rolled back.
    pub fn error(
        name: impl Into<String>,
        item_id: Option<String>,
        subitems_created: usize,
        error: String,
    ) -> Self {
        Self {
            name: name.into(),
            item_id,
            subitems_created,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Item created but not all of its subitems
    pub fn is_partial(&self) -> bool {
        self.is_error() && self.item_id.is_some()
    }
}
