mod handlers;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context as _;
pub use routes::get_router;
use vortex_dns_core::{Analytics, ListManager};

pub struct ApiState {
    pub lists: Arc<ListManager>,
    pub analytics: Analytics,
}

pub struct ApiServer {
    state: ApiState,
}

impl ApiServer {
    pub fn new(lists: Arc<ListManager>, analytics: Analytics) -> Self {
        ApiServer {
            state: ApiState { lists, analytics },
        }
    }

    pub async fn serve(self, addr: SocketAddr) -> anyhow::Result<()> {
        let router = routes::get_router(self.state);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind the API server to {}", addr))?;
        tracing::info!("Management API is listening on {}", addr);

        axum::serve(listener, router).await.context("API server error")
    }
}
