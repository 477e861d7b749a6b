//! Board synchronisation
//!
//! Plans are built first ([`plan_push`], [`plan_duplicate`]) and then
//! submitted by [`execute`], so a dry run can show the exact operations.

pub mod duplicate;
pub mod executor;
pub mod push;
pub mod report;

#[cfg(test)]
pub(crate) mod testing;

pub use duplicate::{DEFAULT_SOURCE_BOARD, DEFAULT_TARGET_BOARD, DuplicateRequest, plan_duplicate};
pub use executor::{SyncPlan, execute};
pub use push::{DUE_DATE_COLUMN, plan_push, resolve_board};
pub use report::RunSummary;
