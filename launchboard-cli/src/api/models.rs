//! Monday.com board models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column id → display text, as sent to `create_item`/`create_subitem`
pub type ColumnValues = BTreeMap<String, String>;

/// A board as returned by the `boards` query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// Named partition of items within a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub title: String,
}

/// Board column metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    #[serde(rename = "type", default)]
    pub column_type: Option<String>,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            column_type: None,
        }
    }
}

/// Column types this tool creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Date,
    Text,
    Status,
    LongText,
}

impl ColumnKind {
    /// GraphQL `ColumnType` enum literal
    pub fn as_graphql(&self) -> &'static str {
        match self {
            ColumnKind::Date => "date",
            ColumnKind::Text => "text",
            ColumnKind::Status => "status",
            ColumnKind::LongText => "long_text",
        }
    }
}

/// One cell of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnValue {
    pub id: String,
    /// Display text; `null` for empty cells
    #[serde(default)]
    pub text: Option<String>,
    /// Raw JSON-encoded value
    #[serde(default)]
    pub value: Option<String>,
}

impl ColumnValue {
    pub fn text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: Some(text.into()),
            value: None,
        }
    }

    /// Display text, empty for null cells
    pub fn display_text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// A board item or subitem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub group: Option<Group>,
    #[serde(default)]
    pub column_values: Vec<ColumnValue>,
}

impl Item {
    /// Title of the group the item sits in, empty when unknown
    pub fn group_title(&self) -> &str {
        self.group.as_ref().map(|g| g.title.as_str()).unwrap_or("")
    }

    /// Display text of a column by id
    pub fn column_text(&self, column_id: &str) -> Option<&str> {
        self.column_values
            .iter()
            .find(|cv| cv.id == column_id)
            .map(|cv| cv.display_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserializes_api_shape() {
        let json = r#"{
            "id": "1234",
            "name": "Trail Runner",
            "group": {"id": "new_group", "title": "SS26 New Styles"},
            "column_values": [
                {"id": "text", "text": "TR-01", "value": "\"TR-01\""},
                {"id": "date4", "text": null, "value": null}
            ]
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();

        assert_eq!(item.group_title(), "SS26 New Styles");
        assert_eq!(item.column_text("text"), Some("TR-01"));
        assert_eq!(item.column_text("date4"), Some(""));
        assert_eq!(item.column_text("missing"), None);
    }

    #[test]
    fn test_column_type_rename() {
        let column: Column =
            serde_json::from_str(r#"{"id": "date4", "title": "Launch Date", "type": "date"}"#)
                .unwrap();
        assert_eq!(column.column_type.as_deref(), Some("date"));
    }

    #[test]
    fn test_item_without_group() {
        let item: Item = serde_json::from_str(r#"{"id": "1", "name": "Sub"}"#).unwrap();
        assert_eq!(item.group_title(), "");
        assert!(item.column_values.is_empty());
    }
}
