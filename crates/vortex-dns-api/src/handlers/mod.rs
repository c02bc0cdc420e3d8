mod add_entry;
mod delete_entry;
mod get_entry;
mod history;
mod list_entries;
mod stats;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
pub use add_entry::{handler as add_entry, AddEntryRequest};
pub use delete_entry::handler as delete_entry;
pub use get_entry::handler as get_entry;
pub use history::{handler as get_history, HistoryFilter};
pub use list_entries::handler as list_entries;
use serde::Serialize;
pub use stats::{client_counts, domain_counts, query_type_counts, top_blocked_domains};
use vortex_dns_core::FilterError;

use crate::ApiState;

/// Maps core failures onto transport statuses.
///
/// Expected failures carry a JSON `{error}` body; internal ones are
/// logged server-side and answered with a bare 500.
pub struct ApiError(FilterError);

impl From<FilterError> for ApiError {
    fn from(error: FilterError) -> Self {
        ApiError(error)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            FilterError::NotFound(_) => StatusCode::NOT_FOUND,
            FilterError::InvalidDomain(_) => StatusCode::BAD_REQUEST,
            FilterError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::debug!("Internal error while serving a request: {:#}", self.0);
            return status.into_response();
        }

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

pub async fn health_check(State(_): State<Arc<ApiState>>) -> &'static str {
    "I'm alive"
}
