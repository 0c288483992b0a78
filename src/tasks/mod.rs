//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Stats Reporter: Logs every group's counters at configured intervals

mod reporter;

pub use reporter::{report_stats, spawn_stats_reporter};
