use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use vortex_dns_core::QueryRecord;

use super::ApiError;
use crate::ApiState;

/// Optional inclusive time bounds; a missing bound leaves that end of
/// the range open.
#[derive(Debug, Deserialize)]
pub struct HistoryFilter {
    pub from: Option<u32>,
    pub until: Option<u32>,
}

pub async fn handler(
    State(state): State<Arc<ApiState>>,
    Query(filter): Query<HistoryFilter>,
) -> Result<Json<Vec<QueryRecord>>, ApiError> {
    let log = if filter.from.is_none() && filter.until.is_none() {
        state.analytics.history().await?
    } else {
        state
            .analytics
            .history_in_range(filter.from.unwrap_or(0), filter.until.unwrap_or(u32::MAX))
            .await?
    };

    Ok(Json(log))
}
