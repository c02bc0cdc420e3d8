use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use vortex_dns_core::{DomainEntry, ListKind};

use super::ApiError;
use crate::ApiState;

pub async fn handler(
    State(state): State<Arc<ApiState>>,
    Path((kind, id)): Path<(ListKind, u32)>,
) -> Result<Json<DomainEntry>, ApiError> {
    let entry = state.lists.entry(kind, id).await?;
    Ok(Json(entry))
}
