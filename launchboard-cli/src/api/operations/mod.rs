//! Board operations planned and executed by the sync flows

pub mod operation;

pub use operation::{ItemPlan, Operation, RecordOutcome, SubitemPlan};
