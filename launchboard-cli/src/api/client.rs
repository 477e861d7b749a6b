//! Monday.com GraphQL client

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::models::{Board, Column, ColumnKind, ColumnValues, Group, Item};
use super::service::BoardService;
use crate::config::ApiConfig;

/// Items fetched per page; the API maximum
const ITEMS_PAGE_LIMIT: u32 = 500;

/// Boards fetched by `list_boards`
const BOARDS_LIMIT: u32 = 500;

const ITEM_FIELDS: &str = "id name group { id title } column_values { id text value }";

/// GraphQL client for `https://api.monday.com/v2`
#[derive(Debug, Clone)]
pub struct MondayClient {
    http: reqwest::Client,
    url: String,
    token: String,
}

/// Standard GraphQL envelope. Monday also reports some failures through a
/// top-level `error_message`.
#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct BoardsData<B> {
    boards: Vec<B>,
}

#[derive(Debug, Deserialize)]
struct BoardColumns {
    columns: Vec<Column>,
}

#[derive(Debug, Deserialize)]
struct BoardGroups {
    groups: Vec<Group>,
}

#[derive(Debug, Deserialize)]
struct BoardItems {
    items_page: ItemsPage,
}

#[derive(Debug, Deserialize)]
struct ItemsPage {
    cursor: Option<String>,
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct NextItemsPage {
    next_items_page: ItemsPage,
}

#[derive(Debug, Deserialize)]
struct CreateItemData {
    create_item: Item,
}

#[derive(Debug, Deserialize)]
struct CreateSubitemData {
    create_subitem: Item,
}

#[derive(Debug, Deserialize)]
struct CreateGroupData {
    create_group: Group,
}

#[derive(Debug, Deserialize)]
struct CreateColumnData {
    create_column: Column,
}

/// Unwrap a GraphQL response body into its `data` payload
pub(crate) fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    let response: GraphQlResponse<T> =
        serde_json::from_str(body).context("Failed to parse GraphQL response")?;

    if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        bail!("GraphQL errors: {}", messages.join("; "));
    }

    if let Some(message) = response.error_message {
        bail!("API error: {}", message);
    }

    response
        .data
        .context("GraphQL response contained no data")
}

/// The single board a `boards(ids: ...)` query asked for; an empty list
/// means the id does not exist or is not visible to the token
fn first_board<B>(data: BoardsData<B>, board_id: &str) -> Result<B> {
    match data.boards.into_iter().next() {
        Some(board) => Ok(board),
        None => bail!("Board {} not found", board_id),
    }
}

/// Column values travel as a JSON-encoded string in the `JSON!` argument
fn encode_column_values(column_values: &ColumnValues) -> Result<String> {
    serde_json::to_string(column_values).context("Failed to encode column values")
}

impl MondayClient {
    pub fn new(token: impl Into<String>, config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            url: config.url.clone(),
            token: token.into(),
        })
    }

    /// Build a client from config, reading the token from the environment
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let token = config.token()?;
        Self::new(token, config)
    }

    /// POST a GraphQL document and decode its `data`
    async fn request<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T> {
        log::debug!("GraphQL request: {}", first_line(query));

        let response = self
            .http
            .post(&self.url)
            .header(reqwest::header::AUTHORIZATION, &self.token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .context("API request failed")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read API response body")?;

        if !status.is_success() {
            bail!("API request failed with status {}: {}", status, body);
        }

        decode_response(&body)
    }

    async fn list_groups(&self, board_id: &str) -> Result<Vec<Group>> {
        let query = r#"query ($boardId: [ID!]) {
            boards(ids: $boardId) { groups { id title } }
        }"#;

        let data: BoardsData<BoardGroups> =
            self.request(query, json!({ "boardId": [board_id] })).await?;
        Ok(first_board(data, board_id)?.groups)
    }

    async fn create_group(&self, board_id: &str, title: &str) -> Result<Group> {
        let query = r#"mutation ($boardId: ID!, $groupName: String!) {
            create_group(board_id: $boardId, group_name: $groupName) { id title }
        }"#;

        let data: CreateGroupData = self
            .request(query, json!({ "boardId": board_id, "groupName": title }))
            .await?;
        Ok(data.create_group)
    }

    async fn create_column(&self, board_id: &str, title: &str, kind: ColumnKind) -> Result<Column> {
        let query = r#"mutation ($boardId: ID!, $title: String!, $columnType: ColumnType!) {
            create_column(board_id: $boardId, title: $title, column_type: $columnType) { id title type }
        }"#;

        let data: CreateColumnData = self
            .request(
                query,
                json!({ "boardId": board_id, "title": title, "columnType": kind.as_graphql() }),
            )
            .await?;
        Ok(data.create_column)
    }
}

#[async_trait]
impl BoardService for MondayClient {
    async fn list_boards(&self) -> Result<Vec<Board>> {
        let query = r#"query ($limit: Int!) {
            boards(limit: $limit) { id name state groups { id title } }
        }"#;

        let data: BoardsData<Board> = self.request(query, json!({ "limit": BOARDS_LIMIT })).await?;
        Ok(data.boards)
    }

    async fn list_items(&self, board_id: &str) -> Result<Vec<Item>> {
        let first_page = format!(
            r#"query ($boardId: [ID!], $limit: Int!) {{
                boards(ids: $boardId) {{ items_page(limit: $limit) {{ cursor items {{ {ITEM_FIELDS} }} }} }}
            }}"#
        );
        let next_page = format!(
            r#"query ($cursor: String!, $limit: Int!) {{
                next_items_page(limit: $limit, cursor: $cursor) {{ cursor items {{ {ITEM_FIELDS} }} }}
            }}"#
        );

        let data: BoardsData<BoardItems> = self
            .request(
                &first_page,
                json!({ "boardId": [board_id], "limit": ITEMS_PAGE_LIMIT }),
            )
            .await
            .with_context(|| format!("Failed to fetch items for board {}", board_id))?;

        let mut page = first_board(data, board_id)?.items_page;

        let mut items = std::mem::take(&mut page.items);
        let mut cursor = page.cursor;

        while let Some(current) = cursor {
            let data: NextItemsPage = self
                .request(
                    &next_page,
                    json!({ "cursor": current, "limit": ITEMS_PAGE_LIMIT }),
                )
                .await
                .with_context(|| format!("Failed to fetch next item page for board {}", board_id))?;

            items.extend(data.next_items_page.items);
            cursor = data.next_items_page.cursor;
        }

        log::info!("Retrieved {} items from board {}", items.len(), board_id);
        Ok(items)
    }

    async fn list_columns(&self, board_id: &str) -> Result<Vec<Column>> {
        let query = r#"query ($boardId: [ID!]) {
            boards(ids: $boardId) { columns { id title type } }
        }"#;

        let data: BoardsData<BoardColumns> =
            self.request(query, json!({ "boardId": [board_id] })).await?;
        Ok(first_board(data, board_id)?.columns)
    }

    async fn get_or_create_group(&self, board_id: &str, title: &str) -> Result<String> {
        let groups = self.list_groups(board_id).await?;
        if let Some(group) = groups.into_iter().find(|g| g.title == title) {
            return Ok(group.id);
        }

        log::info!("Creating group '{}' on board {}", title, board_id);
        let group = self
            .create_group(board_id, title)
            .await
            .with_context(|| format!("Failed to create group '{}'", title))?;
        Ok(group.id)
    }

    async fn create_item(
        &self,
        board_id: &str,
        group_id: Option<&str>,
        name: &str,
        column_values: &ColumnValues,
    ) -> Result<Item> {
        let query = r#"mutation ($boardId: ID!, $groupId: String, $itemName: String!, $columnValues: JSON!) {
            create_item(board_id: $boardId, group_id: $groupId, item_name: $itemName, column_values: $columnValues) { id name }
        }"#;

        let variables = json!({
            "boardId": board_id,
            "groupId": group_id,
            "itemName": name,
            "columnValues": encode_column_values(column_values)?,
        });

        let data: CreateItemData = self.request(query, variables).await?;
        Ok(data.create_item)
    }

    async fn create_subitem(
        &self,
        parent_item_id: &str,
        name: &str,
        column_values: &ColumnValues,
    ) -> Result<Item> {
        let query = r#"mutation ($parentItemId: ID!, $subitemName: String!, $columnValues: JSON!) {
            create_subitem(parent_item_id: $parentItemId, item_name: $subitemName, column_values: $columnValues) { id name }
        }"#;

        let variables = json!({
            "parentItemId": parent_item_id,
            "subitemName": name,
            "columnValues": encode_column_values(column_values)?,
        });

        let data: CreateSubitemData = self.request(query, variables).await?;
        Ok(data.create_subitem)
    }

    async fn get_or_create_column(
        &self,
        board_id: &str,
        title: &str,
        kind: ColumnKind,
    ) -> Result<String> {
        let columns = self.list_columns(board_id).await?;
        if let Some(column) = columns.into_iter().find(|c| c.title == title) {
            return Ok(column.id);
        }

        log::info!("Creating {} column '{}' on board {}", kind.as_graphql(), title, board_id);
        let column = self
            .create_column(board_id, title, kind)
            .await
            .with_context(|| format!("Failed to create column '{}'", title))?;
        Ok(column.id)
    }
}

fn first_line(query: &str) -> &str {
    query.lines().next().unwrap_or_default().trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_boards() {
        let body = r#"{"data": {"boards": [
            {"id": "1", "name": "SS26 Master", "state": "active", "groups": [{"id": "topics", "title": "New Colors"}]},
            {"id": "2", "name": "SS26 Prod Dev", "state": "active", "groups": []}
        ]}, "account_id": 99}"#;
        let data: BoardsData<Board> = decode_response(body).unwrap();
        assert_eq!(data.boards.len(), 2);
        assert_eq!(data.boards[0].groups[0].title, "New Colors");
    }

    #[test]
    fn test_decode_graphql_errors() {
        let body = r#"{"data": null, "errors": [{"message": "Field 'x' doesn't exist"}, {"message": "second"}]}"#;
        let err = decode_response::<BoardsData<Board>>(body).unwrap_err().to_string();
        assert!(err.contains("Field 'x' doesn't exist"));
        assert!(err.contains("second"));
    }

    #[test]
    fn test_decode_error_message() {
        let body = r#"{"error_message": "User unauthorized to perform action", "status_code": 403}"#;
        let err = decode_response::<BoardsData<Board>>(body).unwrap_err().to_string();
        assert!(err.contains("unauthorized"));
    }

    #[test]
    fn test_decode_missing_data() {
        assert!(decode_response::<BoardsData<Board>>("{}").is_err());
        assert!(decode_response::<BoardsData<Board>>("not json").is_err());
    }

    #[test]
    fn test_decode_items_page() {
        let body = r#"{"data": {"boards": [{"items_page": {
            "cursor": "MSw5NzI4MDA5MDAsaV9YcmxJb0p1VEdYc1VWeGlxeF9kLDg4MiwzNXw0MTQ1NzU1MTE5",
            "items": [{"id": "7", "name": "TR-01", "group": {"id": "g1", "title": "New Styles"},
                       "column_values": [{"id": "date4", "text": "2026-02-09", "value": "{\"date\":\"2026-02-09\"}"}]}]
        }}]}}"#;
        let data: BoardsData<BoardItems> = decode_response(body).unwrap();
        let page = &data.boards[0].items_page;
        assert!(page.cursor.is_some());
        assert_eq!(page.items[0].column_text("date4"), Some("2026-02-09"));
    }

    #[test]
    fn test_unknown_board_is_error() {
        let body = r#"{"data": {"boards": []}}"#;
        let data: BoardsData<BoardColumns> = decode_response(body).unwrap();
        let err = first_board(data, "404").unwrap_err().to_string();
        assert!(err.contains("Board 404 not found"));

        let body = r#"{"data": {"boards": [{"columns": [{"id": "date4", "title": "Launch Date", "type": "date"}]}]}}"#;
        let data: BoardsData<BoardColumns> = decode_response(body).unwrap();
        let columns = first_board(data, "7").unwrap().columns;
        assert_eq!(columns[0].column_type.as_deref(), Some("date"));
    }

    #[test]
    fn test_encode_column_values() {
        let mut values = ColumnValues::new();
        values.insert("status".to_string(), "Not Started".to_string());
        values.insert("date".to_string(), "2025-09-08".to_string());
        assert_eq!(
            encode_column_values(&values).unwrap(),
            r#"{"date":"2025-09-08","status":"Not Started"}"#
        );
    }

    #[test]
    fn test_client_requires_token() {
        let config = ApiConfig {
            token_env: "LAUNCHBOARD_TEST_TOKEN_THAT_IS_NEVER_SET".to_string(),
            ..Default::default()
        };
        assert!(MondayClient::from_config(&config).is_err());
    }
}
