//! API Handlers
//!
//! HTTP request handlers serving registered groups.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};

use crate::error::{CacheError, Result};
use crate::group::{Group, Registry};
use crate::models::{GroupsResponse, HealthResponse, StatsResponse};

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Groups served by this front-end
    pub registry: Arc<Registry>,
}

impl AppState {
    /// Creates a new AppState around an existing registry.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    fn group(&self, name: &str) -> Result<Arc<Group>> {
        self.registry
            .get_group(name)
            .ok_or_else(|| CacheError::GroupNotFound(name.to_string()))
    }
}

/// Handler for GET /api/:group/:key
///
/// Returns the raw value bytes. The getter may block, so the lookup runs on
/// the blocking pool.
pub async fn get_handler(
    State(state): State<AppState>,
    Path((group_name, key)): Path<(String, String)>,
) -> Result<impl IntoResponse> {
    let group = state.group(&group_name)?;

    let view = tokio::task::spawn_blocking(move || group.get(&key))
        .await
        .map_err(|err| CacheError::Load(err.into()))??;

    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        view.byte_slice(),
    ))
}

/// Handler for GET /stats/:group
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(group_name): Path<String>,
) -> Result<Json<StatsResponse>> {
    let group = state.group(&group_name)?;
    Ok(Json(StatsResponse::new(group.name(), group.stats())))
}

/// Handler for GET /groups
pub async fn groups_handler(State(state): State<AppState>) -> Json<GroupsResponse> {
    Json(GroupsResponse::new(state.registry.group_names()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::GetterFunc;
    use anyhow::anyhow;

    fn test_state() -> AppState {
        let registry = Arc::new(Registry::new());
        registry.new_group(
            "scores",
            2 << 10,
            GetterFunc::new(|key: &str| match key {
                "Tom" => Ok(b"630".to_vec()),
                _ => Err(anyhow!("{} not exist", key)),
            }),
        );
        AppState::new(registry)
    }

    #[tokio::test]
    async fn test_get_handler() {
        let state = test_state();

        let result = get_handler(
            State(state.clone()),
            Path(("scores".to_string(), "Tom".to_string())),
        )
        .await;
        assert!(result.is_ok());

        let group = state.registry.get_group("scores").unwrap();
        assert_eq!(group.cached_keys(), vec!["Tom".to_string()]);
    }

    #[tokio::test]
    async fn test_get_handler_unknown_group() {
        let state = test_state();

        let result = get_handler(
            State(state),
            Path(("missing".to_string(), "Tom".to_string())),
        )
        .await;
        assert!(matches!(result, Err(CacheError::GroupNotFound(_))));
    }

    #[tokio::test]
    async fn test_get_handler_loader_error() {
        let state = test_state();

        let result = get_handler(
            State(state),
            Path(("scores".to_string(), "Nobody".to_string())),
        )
        .await;
        assert!(matches!(result, Err(CacheError::Load(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();

        let response = stats_handler(State(state), Path("scores".to_string()))
            .await
            .unwrap();
        assert_eq!(response.group, "scores");
        assert_eq!(response.stats.hits, 0);
    }

    #[tokio::test]
    async fn test_groups_handler() {
        let response = groups_handler(State(test_state())).await;
        assert_eq!(response.groups, vec!["scores".to_string()]);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
