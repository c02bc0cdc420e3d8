use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use vortex_dns_core::{DomainEntry, ListKind};

use crate::ApiState;

pub async fn handler(
    State(state): State<Arc<ApiState>>,
    Path(kind): Path<ListKind>,
) -> Json<Vec<DomainEntry>> {
    Json(state.lists.entries(kind).await)
}
