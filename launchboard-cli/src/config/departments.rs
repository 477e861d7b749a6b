//! Department task templates

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::planner::TaskTemplate;

/// Department used when none is named on the command line
pub const DEFAULT_DEPARTMENT: &str = "Product Development";

/// A department's board and the subitems generated for every product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Board the department's items are pushed to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_name: Option<String>,
    #[serde(default)]
    pub sub_items: Vec<TaskTemplate>,
}

/// Product development milestones with their lead times
pub fn product_development() -> Department {
    Department {
        board_name: Some("SS26 Prod Dev".to_string()),
        sub_items: vec![
            TaskTemplate::new("Fabric Approved", 40),
            TaskTemplate::new("Design Approved", 26),
            TaskTemplate::new("Fit Approved", 18),
            TaskTemplate::new("Color Approved", 16),
            TaskTemplate::new("Production Approved", 12),
        ],
    }
}

pub fn default_departments() -> BTreeMap<String, Department> {
    let mut departments = BTreeMap::new();
    departments.insert(DEFAULT_DEPARTMENT.to_string(), product_development());
    departments
}

/// File-name friendly department name: "Product Development" -> "product_development"
pub fn department_slug(name: &str) -> String {
    name.trim().replace(' ', "_").to_lowercase()
}
