//! Monday.com API module
//!
//! The [`BoardService`] trait is the only way sync flows reach a board.
//! [`MondayClient`] implements it over the v2 GraphQL endpoint; planned
//! mutations and per-record outcomes live in [`operations`].

pub mod client;
pub mod models;
pub mod operations;
pub mod service;
pub mod throttle;

pub use client::MondayClient;
pub use models::{Board, Column, ColumnKind, ColumnValue, ColumnValues, Group, Item};
pub use operations::{ItemPlan, Operation, RecordOutcome, SubitemPlan};
pub use service::BoardService;
pub use throttle::Throttle;
