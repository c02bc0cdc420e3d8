use std::sync::Arc;

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{
    add_entry, client_counts, delete_entry, domain_counts, get_entry, get_history, health_check,
    list_entries, query_type_counts, top_blocked_domains,
};
use crate::ApiState;

pub fn get_router(state: ApiState) -> Router {
    let state = Arc::new(state);
    Router::new()
        .route("/", get(health_check))
        .route("/lists/:kind", get(list_entries).post(add_entry))
        .route("/lists/:kind/:id", get(get_entry).delete(delete_entry))
        .route("/history", get(get_history))
        .route("/stats/query-types", get(query_type_counts))
        .route("/stats/top-blocked", get(top_blocked_domains))
        .route("/stats/top-clients", get(client_counts))
        .route("/stats/top-domains", get(domain_counts))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::DELETE])
                .allow_headers([CONTENT_TYPE])
                .allow_origin(Any),
        )
        .with_state(state)
}
