use std::sync::Arc;

use anyhow::Context as _;
use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::domain_name::normalize_domain;
use crate::store::DomainStore;
use crate::{DomainEntry, FilterError, ListKind};

/// Durable storage for list contents, in the line-oriented domain
/// listing format the downstream resolver consumes.
#[async_trait]
pub trait ListPersistence: Send + Sync {
    async fn load(&self, kind: ListKind) -> anyhow::Result<Vec<DomainEntry>>;
    async fn export(&self, kind: ListKind, entries: &[DomainEntry]) -> anyhow::Result<()>;
}

/// Asks the downstream resolver to reload its filtering configuration.
#[async_trait]
pub trait RefreshSignal: Send + Sync {
    async fn signal_refresh(&self) -> anyhow::Result<()>;
}

/// Result of an add operation: the id of the entry (new or existing) and
/// whether the change was propagated downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddOutcome {
    pub id: u32,
    pub refreshed: bool,
}

/// Owns the allow and deny lists and decides when a mutation has to be
/// propagated to the downstream resolver.
///
/// Reads run concurrently; mutations are exclusive per list, and the
/// export plus refresh signal happen under the same write lock so a
/// reload never observes a half-applied list.
pub struct ListManager {
    allow: RwLock<DomainStore>,
    deny: RwLock<DomainStore>,
    persistence: Arc<dyn ListPersistence>,
    refresher: Arc<dyn RefreshSignal>,
}

impl ListManager {
    /// Loads both lists from persistence.
    pub async fn load(
        persistence: Arc<dyn ListPersistence>,
        refresher: Arc<dyn RefreshSignal>,
    ) -> anyhow::Result<Self> {
        let allow = persistence
            .load(ListKind::Allow)
            .await
            .context("failed to load the allow list")?;
        let deny = persistence
            .load(ListKind::Deny)
            .await
            .context("failed to load the deny list")?;

        Ok(ListManager {
            allow: RwLock::new(DomainStore::from_entries(allow)),
            deny: RwLock::new(DomainStore::from_entries(deny)),
            persistence,
            refresher,
        })
    }

    fn store(&self, kind: ListKind) -> &RwLock<DomainStore> {
        match kind {
            ListKind::Allow => &self.allow,
            ListKind::Deny => &self.deny,
        }
    }

    pub async fn entries(&self, kind: ListKind) -> Vec<DomainEntry> {
        self.store(kind).read().await.entries().to_vec()
    }

    pub async fn entry(&self, kind: ListKind, id: u32) -> Result<DomainEntry, FilterError> {
        self.store(kind).read().await.get(id).cloned()
    }

    /// Adds a domain to a list.
    ///
    /// Duplicate adds are idempotent: they report the existing entry id
    /// and skip the export and refresh, since nothing changed.
    pub async fn add(&self, kind: ListKind, raw_domain: &str) -> Result<AddOutcome, FilterError> {
        let domain = normalize_domain(raw_domain)?;

        let mut store = self.store(kind).write().await;
        let (id, inserted) = store.insert(domain);
        if !inserted {
            return Ok(AddOutcome { id, refreshed: false });
        }

        self.propagate(kind, &store).await?;

        Ok(AddOutcome { id, refreshed: true })
    }

    /// Removes the entry with the given id, reporting whether the change
    /// was propagated downstream (always true on success).
    pub async fn remove(&self, kind: ListKind, id: u32) -> Result<bool, FilterError> {
        let mut store = self.store(kind).write().await;
        store.remove(id)?;

        self.propagate(kind, &store).await?;

        Ok(true)
    }

    /// Exports the list and signals the resolver, in that order.
    ///
    /// A failed export is surfaced to the caller; a failed refresh is
    /// only logged, as the applied mutation remains the source of truth
    /// and the resolver picks it up on a later reload.
    async fn propagate(&self, kind: ListKind, store: &DomainStore) -> Result<(), FilterError> {
        self.persistence
            .export(kind, store.entries())
            .await
            .with_context(|| format!("failed to export the {} list", kind))?;

        if let Err(e) = self.refresher.signal_refresh().await {
            tracing::warn!("Failed to signal a list refresh: {:#}", e);
        }

        Ok(())
    }
}
