use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use vortex_dns_core::AggregationBucket;

use super::ApiError;
use crate::ApiState;

pub async fn query_type_counts(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<AggregationBucket>>, ApiError> {
    Ok(Json(state.analytics.query_type_counts().await?))
}

pub async fn top_blocked_domains(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<AggregationBucket>>, ApiError> {
    Ok(Json(state.analytics.top_blocked_domains().await?))
}

pub async fn client_counts(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<AggregationBucket>>, ApiError> {
    Ok(Json(state.analytics.client_counts().await?))
}

pub async fn domain_counts(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<AggregationBucket>>, ApiError> {
    Ok(Json(state.analytics.domain_counts().await?))
}
