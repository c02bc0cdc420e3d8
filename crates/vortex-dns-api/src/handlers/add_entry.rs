use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use vortex_dns_core::{AddOutcome, ListKind};

use super::ApiError;
use crate::ApiState;

#[derive(Debug, Deserialize)]
pub struct AddEntryRequest {
    pub domain: Option<String>,
}

pub async fn handler(
    State(state): State<Arc<ApiState>>,
    Path(kind): Path<ListKind>,
    Json(request): Json<AddEntryRequest>,
) -> Result<Json<AddOutcome>, ApiError> {
    // A missing domain field is the same failure as a malformed one
    let domain = request.domain.as_deref().unwrap_or("");
    let outcome = state.lists.add(kind, domain).await?;

    Ok(Json(outcome))
}
