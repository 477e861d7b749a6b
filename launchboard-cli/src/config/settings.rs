//! Configurable sections: master sheet column names, API access, submission
//! pacing and subitem column ids

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Master sheet column names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSettings {
    pub item_name_column: String,
    pub style_name_column: String,
    pub color_name_column: String,
    pub priority_column: String,
    /// The master sheet tracks execution status, not task status
    pub status_column: String,
    pub platform_column: String,
    pub launch_date_column: String,
    /// Optional section column used for group routing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_column: Option<String>,
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            item_name_column: "Item".to_string(),
            style_name_column: "Style Name".to_string(),
            color_name_column: "Color Name".to_string(),
            priority_column: "Priority".to_string(),
            status_column: "Exec Status".to_string(),
            platform_column: "Platform".to_string(),
            launch_date_column: "Launch Date".to_string(),
            group_column: None,
        }
    }
}

/// Monday.com API access
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub url: String,
    pub timeout_secs: u64,
    /// Environment variable holding the API token
    pub token_env: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: "https://api.monday.com/v2".to_string(),
            timeout_secs: 30,
            token_env: "MONDAY_API_TOKEN".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Read the API token from the configured environment variable
    pub fn token(&self) -> anyhow::Result<String> {
        match std::env::var(&self.token_env) {
            Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => anyhow::bail!(
                "No API token found. Set {} in the environment or in a .env file",
                self.token_env
            ),
        }
    }
}

/// Pacing between record submissions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Pause after each record when pushing a CSV
    pub delay_ms: u64,
    /// Pause after each record when duplicating a board
    pub duplicate_delay_ms: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            delay_ms: 500,
            duplicate_delay_ms: 100,
        }
    }
}

/// Column ids used on generated subitems
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubitemColumns {
    pub status: String,
    /// Due date column when the board's own "Due Date" column is not resolved
    pub due_date: String,
    pub description: String,
}

impl Default for SubitemColumns {
    fn default() -> Self {
        Self {
            status: "status".to_string(),
            due_date: "date".to_string(),
            description: "text".to_string(),
        }
    }
}
