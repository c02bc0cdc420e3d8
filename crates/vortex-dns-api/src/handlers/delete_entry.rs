use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use vortex_dns_core::ListKind;

use super::ApiError;
use crate::ApiState;

#[derive(Debug, Serialize)]
pub struct RemoveResponse {
    pub refreshed: bool,
}

pub async fn handler(
    State(state): State<Arc<ApiState>>,
    Path((kind, id)): Path<(ListKind, u32)>,
) -> Result<Json<RemoveResponse>, ApiError> {
    let refreshed = state.lists.remove(kind, id).await?;
    Ok(Json(RemoveResponse { refreshed }))
}
