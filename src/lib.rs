//! Gee Cache - An in-process, byte-bounded cache with pluggable loaders
//!
//! Named groups serve values from an LRU store and load misses through a
//! user-supplied getter.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod group;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::ByteView;
pub use config::Config;
pub use error::{CacheError, Result};
pub use group::{Getter, GetterFunc, Group, Registry};
pub use tasks::spawn_stats_reporter;
