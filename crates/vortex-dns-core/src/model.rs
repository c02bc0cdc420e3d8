use std::fmt;

use serde::{Deserialize, Serialize};

/// The two independent domain collections that control filtering.
///
/// An entry in one list has no relationship to the same domain in the
/// other one: a domain may legally appear in both at once, or in neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Allow,
    Deny,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Allow => "allow",
            ListKind::Deny => "deny",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEntry {
    pub id: u32,
    pub domain: String,
}

/// One logged DNS resolution event, as recorded by the appliance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRecord {
    pub timestamp: u32,
    pub domain: String,
    pub client: String,
    pub record_type: String,
    pub blocked: bool,
}

/// One grouped count in an analytics result, keyed by a chosen attribute
/// of the query records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationBucket {
    pub label: String,
    pub count: u64,
}
