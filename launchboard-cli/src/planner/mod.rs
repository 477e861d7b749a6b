//! Launch planning
//!
//! Pure functions that turn launch records and task templates into a dated
//! schedule, route items to destination groups and reconcile column values
//! between boards. Nothing in here touches the network.

pub mod dates;
pub mod groups;
pub mod reconcile;
pub mod schedule;

pub use dates::{calculate_due_date, format_date, format_optional_date, parse_launch_date};
pub use groups::{TARGET_GROUPS, classify_group};
pub use reconcile::{
    find_launch_date, find_platform_column, reconcile_columns, record_from_item,
    resolve_attribute_columns,
};
pub use schedule::{
    LaunchRecord, RecordSchedule, ScheduledTask, TaskStatus, TaskTemplate, expand_schedule,
    plan_catalog,
};
