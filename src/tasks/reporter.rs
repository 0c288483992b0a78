//! Stats Reporter Task
//!
//! Background task that periodically logs the statistics of every group.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::group::Registry;

/// Logs one line of statistics per registered group.
///
/// Returns the number of groups reported.
pub fn report_stats(registry: &Registry) -> usize {
    let mut reported = 0;
    for name in registry.group_names() {
        let Some(group) = registry.get_group(&name) else {
            continue;
        };
        let stats = group.stats();
        info!(
            group = %name,
            hits = stats.hits,
            misses = stats.misses,
            loads = stats.loads,
            load_errors = stats.load_errors,
            evictions = stats.evictions,
            entries = stats.total_entries,
            used_bytes = stats.used_bytes,
            "group stats"
        );
        reported += 1;
    }
    reported
}

/// Spawns a background task that logs group statistics every
/// `interval_secs` seconds.
///
/// Reporting only reads counters, so it never changes recency or
/// hit/miss figures.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_stats_reporter(registry: Arc<Registry>, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting stats reporter with interval of {} seconds",
            interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let reported = report_stats(&registry);
            if reported == 0 {
                debug!("Stats reporter: no groups registered");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::GetterFunc;

    fn registry_with_group() -> Arc<Registry> {
        let registry = Arc::new(Registry::new());
        registry.new_group(
            "scores",
            0,
            GetterFunc::new(|key: &str| Ok(key.as_bytes().to_vec())),
        );
        registry
    }

    #[test]
    fn test_report_stats_counts_groups() {
        assert_eq!(report_stats(&Registry::new()), 0);
        assert_eq!(report_stats(&registry_with_group()), 1);
    }

    #[tokio::test]
    async fn test_reporter_leaves_stats_untouched() {
        let registry = registry_with_group();
        let group = registry.get_group("scores").unwrap();
        group.get("Tom").unwrap();
        let before = group.stats();

        let handle = spawn_stats_reporter(registry.clone(), 1);
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(group.stats(), before);
        handle.abort();
    }

    #[tokio::test]
    async fn test_reporter_can_be_aborted() {
        let handle = spawn_stats_reporter(registry_with_group(), 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
