//! The board service seam
//!
//! Sync flows talk to boards only through [`BoardService`]. `MondayClient`
//! implements it over GraphQL; tests use an in-memory board.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{Board, Column, ColumnKind, ColumnValues, Item};

#[async_trait]
pub trait BoardService: Send + Sync {
    /// Every board the token can see
    async fn list_boards(&self) -> Result<Vec<Board>>;

    /// Board with exactly this name, if any
    async fn find_board_by_name(&self, name: &str) -> Result<Option<Board>> {
        let boards = self.list_boards().await?;
        Ok(boards.into_iter().find(|b| b.name == name))
    }

    /// All items on a board, with group and column values
    async fn list_items(&self, board_id: &str) -> Result<Vec<Item>>;

    async fn list_columns(&self, board_id: &str) -> Result<Vec<Column>>;

    /// Id of the group with this title, creating it when missing
    async fn get_or_create_group(&self, board_id: &str, title: &str) -> Result<String>;

    async fn create_item(
        &self,
        board_id: &str,
        group_id: Option<&str>,
        name: &str,
        column_values: &ColumnValues,
    ) -> Result<Item>;

    async fn create_subitem(
        &self,
        parent_item_id: &str,
        name: &str,
        column_values: &ColumnValues,
    ) -> Result<Item>;

    /// Id of the column with this title, creating it when missing
    async fn get_or_create_column(&self, board_id: &str, title: &str, kind: ColumnKind)
    -> Result<String>;
}
