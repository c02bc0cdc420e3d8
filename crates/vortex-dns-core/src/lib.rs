mod analytics;
pub use analytics::{grouped_counts, history_between, Analytics, QueryLogSource};
mod domain_name;
pub use domain_name::normalize_domain;
mod error;
pub use error::FilterError;
mod manager;
pub use manager::{AddOutcome, ListManager, ListPersistence, RefreshSignal};
mod model;
pub use model::{AggregationBucket, DomainEntry, ListKind, QueryRecord};
mod store;
pub use store::DomainStore;
