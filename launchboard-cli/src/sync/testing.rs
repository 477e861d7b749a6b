//! In-memory board service for sync tests

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::api::{Board, BoardService, Column, ColumnKind, ColumnValue, ColumnValues, Group, Item};

#[derive(Default)]
struct State {
    next_id: u64,
    boards: Vec<Board>,
    columns: HashMap<String, Vec<Column>>,
    items: HashMap<String, Vec<Item>>,
    subitems: HashMap<String, Vec<Item>>,
    failing_items: HashSet<String>,
    failing_subitems: HashSet<String>,
    name_lookups: Vec<String>,
}

impl State {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }
}

#[derive(Default)]
pub struct FakeBoards {
    state: Mutex<State>,
}

impl FakeBoards {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty board with the given column titles; returns its id
    pub fn add_board(&self, name: &str, column_titles: &[&str]) -> String {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let columns = column_titles
            .iter()
            .map(|title| Column::new(format!("col_{}", title.to_lowercase().replace(' ', "_")), *title))
            .collect();
        state.boards.push(Board {
            id: id.clone(),
            name: name.to_string(),
            state: Some("active".to_string()),
            groups: Vec::new(),
        });
        state.columns.insert(id.clone(), columns);
        id
    }

    /// Put an existing item on a board
    pub fn seed_item(&self, board_id: &str, name: &str, group: &str, cells: &[(&str, &str)]) {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let item = Item {
            id,
            name: name.to_string(),
            group: Some(Group {
                id: format!("seed_{}", group.to_lowercase().replace(' ', "_")),
                title: group.to_string(),
            }),
            column_values: cells.iter().map(|(id, text)| ColumnValue::text(*id, *text)).collect(),
        };
        state.items.entry(board_id.to_string()).or_default().push(item);
    }

    pub fn fail_item(&self, name: &str) {
        self.state.lock().unwrap().failing_items.insert(name.to_string());
    }

    pub fn fail_subitem(&self, name: &str) {
        self.state.lock().unwrap().failing_subitems.insert(name.to_string());
    }

    pub fn items(&self, board_id: &str) -> Vec<Item> {
        let state = self.state.lock().unwrap();
        state.items.get(board_id).cloned().unwrap_or_default()
    }

    pub fn subitems(&self, parent_id: &str) -> Vec<Item> {
        let state = self.state.lock().unwrap();
        state.subitems.get(parent_id).cloned().unwrap_or_default()
    }

    pub fn subitem_names(&self, parent_id: &str) -> Vec<String> {
        self.subitems(parent_id).into_iter().map(|i| i.name).collect()
    }

    pub fn group_titles(&self, board_id: &str) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state
            .boards
            .iter()
            .find(|b| b.id == board_id)
            .map(|b| b.groups.iter().map(|g| g.title.clone()).collect())
            .unwrap_or_default()
    }

    /// Names passed to `find_board_by_name`, in call order
    pub fn name_lookups(&self) -> Vec<String> {
        self.state.lock().unwrap().name_lookups.clone()
    }

    pub fn column_titles(&self, board_id: &str) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state
            .columns
            .get(board_id)
            .map(|cols| cols.iter().map(|c| c.title.clone()).collect())
            .unwrap_or_default()
    }
}

fn to_cells(values: &ColumnValues) -> Vec<ColumnValue> {
    values.iter().map(|(id, text)| ColumnValue::text(id, text)).collect()
}

#[async_trait]
impl BoardService for FakeBoards {
    async fn list_boards(&self) -> Result<Vec<Board>> {
        Ok(self.state.lock().unwrap().boards.clone())
    }

    async fn find_board_by_name(&self, name: &str) -> Result<Option<Board>> {
        let mut state = self.state.lock().unwrap();
        state.name_lookups.push(name.to_string());
        Ok(state.boards.iter().find(|b| b.name == name).cloned())
    }

    async fn list_items(&self, board_id: &str) -> Result<Vec<Item>> {
        Ok(self.items(board_id))
    }

    async fn list_columns(&self, board_id: &str) -> Result<Vec<Column>> {
        let state = self.state.lock().unwrap();
        state
            .columns
            .get(board_id)
            .cloned()
            .ok_or_else(|| anyhow!("Board {} not found", board_id))
    }

    async fn get_or_create_group(&self, board_id: &str, title: &str) -> Result<String> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let board = state
            .boards
            .iter_mut()
            .find(|b| b.id == board_id)
            .ok_or_else(|| anyhow!("Board {} not found", board_id))?;

        if let Some(group) = board.groups.iter().find(|g| g.title == title) {
            return Ok(group.id.clone());
        }
        let id = format!("group_{}", id);
        board.groups.push(Group {
            id: id.clone(),
            title: title.to_string(),
        });
        Ok(id)
    }

    async fn create_item(
        &self,
        board_id: &str,
        group_id: Option<&str>,
        name: &str,
        column_values: &ColumnValues,
    ) -> Result<Item> {
        let mut state = self.state.lock().unwrap();
        if state.failing_items.contains(name) {
            return Err(anyhow!("create_item rejected '{}'", name));
        }

        let group = group_id.and_then(|gid| {
            state
                .boards
                .iter()
                .flat_map(|b| b.groups.iter())
                .find(|g| g.id == gid)
                .cloned()
        });
        let item = Item {
            id: state.next_id(),
            name: name.to_string(),
            group,
            column_values: to_cells(column_values),
        };
        state.items.entry(board_id.to_string()).or_default().push(item.clone());
        Ok(item)
    }

    async fn create_subitem(
        &self,
        parent_item_id: &str,
        name: &str,
        column_values: &ColumnValues,
    ) -> Result<Item> {
        let mut state = self.state.lock().unwrap();
        if state.failing_subitems.contains(name) {
            return Err(anyhow!("create_subitem rejected '{}'", name));
        }

        let item = Item {
            id: state.next_id(),
            name: name.to_string(),
            group: None,
            column_values: to_cells(column_values),
        };
        state
            .subitems
            .entry(parent_item_id.to_string())
            .or_default()
            .push(item.clone());
        Ok(item)
    }

    async fn get_or_create_column(
        &self,
        board_id: &str,
        title: &str,
        _kind: ColumnKind,
    ) -> Result<String> {
        let mut state = self.state.lock().unwrap();
        let id = format!("col_{}", title.to_lowercase().replace(' ', "_"));
        let columns = state
            .columns
            .get_mut(board_id)
            .ok_or_else(|| anyhow!("Board {} not found", board_id))?;

        if let Some(column) = columns.iter().find(|c| c.title == title) {
            return Ok(column.id.clone());
        }
        columns.push(Column::new(&id, title));
        Ok(id)
    }
}
