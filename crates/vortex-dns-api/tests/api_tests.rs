use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt as _;
use serde_json::{json, Value};
use tower::ServiceExt as _;
use vortex_dns_api::{get_router, ApiState};
use vortex_dns_core::{
    Analytics, DomainEntry, ListKind, ListManager, ListPersistence, RefreshSignal,
};
use vortex_dns_db::{Model as _, QueryLogRow, SqliteDb};

struct NullPersistence;

#[async_trait]
impl ListPersistence for NullPersistence {
    async fn load(&self, _kind: ListKind) -> anyhow::Result<Vec<DomainEntry>> {
        Ok(Vec::new())
    }

    async fn export(&self, _kind: ListKind, _entries: &[DomainEntry]) -> anyhow::Result<()> {
        Ok(())
    }
}

struct NullRefresh;

#[async_trait]
impl RefreshSignal for NullRefresh {
    async fn signal_refresh(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

async fn empty_db() -> SqliteDb {
    let db = SqliteDb::in_memory().await.unwrap();
    db.init_tables().await.unwrap();
    db
}

async fn seeded_db() -> SqliteDb {
    let db = empty_db().await;

    let mut connection = db.get_connection().await.unwrap();
    for (timestamp, domain, client, record_type, blocked) in [
        (10, "a.com", "c1", "A", true),
        (20, "b.com", "c1", "A", false),
        (30, "a.com", "c2", "AAAA", true),
    ] {
        QueryLogRow::new(
            timestamp,
            domain.to_string(),
            client.to_string(),
            record_type.to_string(),
            blocked,
        )
        .insert_into(&mut connection)
        .await
        .unwrap();
    }

    db
}

async fn test_router(db: SqliteDb) -> Router {
    let lists = ListManager::load(Arc::new(NullPersistence), Arc::new(NullRefresh))
        .await
        .unwrap();

    get_router(ApiState {
        lists: Arc::new(lists),
        analytics: Analytics::new(Arc::new(db)),
    })
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, body)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn delete(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn list_entry_lifecycle() {
    let router = test_router(empty_db().await).await;

    let (status, body) = post(&router, "/lists/deny", json!({"domain": "Ads.Example.COM"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "refreshed": true}));

    // Idempotent re-add reports the existing id without a refresh
    let (status, body) = post(&router, "/lists/deny", json!({"domain": "ads.example.com"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "refreshed": false}));

    let (status, body) = get(&router, "/lists/deny").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": 1, "domain": "ads.example.com"}]));

    let (status, body) = get(&router, "/lists/deny/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "domain": "ads.example.com"}));

    let (status, body) = delete(&router, "/lists/deny/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"refreshed": true}));

    let (status, body) = get(&router, "/lists/deny/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, _) = delete(&router, "/lists/deny/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn lists_do_not_share_entries() {
    let router = test_router(empty_db().await).await;

    post(&router, "/lists/allow", json!({"domain": "example.com"})).await;

    let (_, allow) = get(&router, "/lists/allow").await;
    let (_, deny) = get(&router, "/lists/deny").await;
    assert_eq!(allow.as_array().unwrap().len(), 1);
    assert!(deny.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_domains_are_rejected() {
    let router = test_router(empty_db().await).await;

    let (status, body) = post(&router, "/lists/allow", json!({"domain": "not a domain"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    // A missing domain field is the same failure
    let (status, _) = post(&router, "/lists/allow", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, entries) = get(&router, "/lists/allow").await;
    assert!(entries.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_list_kinds_are_rejected() {
    let router = test_router(empty_db().await).await;

    let (status, _) = get(&router, "/lists/graylist").await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn stats_endpoints_group_the_log() {
    let router = test_router(seeded_db().await).await;

    let (status, body) = get(&router, "/stats/query-types").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{"label": "A", "count": 2}, {"label": "AAAA", "count": 1}])
    );

    let (_, body) = get(&router, "/stats/top-blocked").await;
    assert_eq!(body, json!([{"label": "a.com", "count": 2}]));

    let (_, body) = get(&router, "/stats/top-clients").await;
    assert_eq!(
        body,
        json!([{"label": "c1", "count": 2}, {"label": "c2", "count": 1}])
    );

    let (_, body) = get(&router, "/stats/top-domains").await;
    assert_eq!(
        body,
        json!([{"label": "a.com", "count": 2}, {"label": "b.com", "count": 1}])
    );
}

#[tokio::test]
async fn history_supports_inclusive_time_ranges() {
    let router = test_router(seeded_db().await).await;

    let (status, body) = get(&router, "/history").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (_, body) = get(&router, "/history?from=15&until=30").await;
    let domains: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["domain"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(domains, ["b.com", "a.com"]);

    // An open bound leaves that end of the range unrestricted
    let (_, body) = get(&router, "/history?until=10").await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    // An inverted range is empty, not an error
    let (status, body) = get(&router, "/history?from=30&until=10").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn health_check_answers() {
    let router = test_router(empty_db().await).await;

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
