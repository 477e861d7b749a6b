//! Launchboard
//!
//! Plans product launch tasks from a master sheet and pushes them to
//! Monday.com boards. The [`planner`] module holds the scheduling logic and
//! has no network dependency; [`sync`] drives a [`api::BoardService`] with
//! the plans it produces.

pub mod api;
pub mod cli;
pub mod config;
pub mod planner;
pub mod sheet;
pub mod sync;
