//! Fee schedule aggregate
//!
//! Time-of-day bands, first-match lookup, and the reference table.

pub mod model;

pub use model::{default_intervals, Fee, FeeInterval, FeeSchedule, ScheduleIssue};
