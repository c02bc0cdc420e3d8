use thiserror::Error;

/// Failure classes surfaced by list management and analytics.
///
/// Adding a domain that is already present is not in here: duplicate adds
/// are defined as idempotent successes reporting the existing entry id.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("no entry with id {0}")]
    NotFound(u32),

    #[error("invalid domain name: {0:?}")]
    InvalidDomain(String),

    /// A broken store invariant or a failed collaborator. Never a user
    /// error; the transport layer reports it without detail.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
