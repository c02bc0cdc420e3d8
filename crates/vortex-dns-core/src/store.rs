use crate::{DomainEntry, FilterError};

/// In-memory contents of a single list.
///
/// Entries keep their insertion order, which is also the order they are
/// exported in. Ids are assigned monotonically and never reused within
/// the lifetime of the store, even after a removal.
#[derive(Debug)]
pub struct DomainStore {
    entries: Vec<DomainEntry>,
    next_id: u32,
}

impl DomainStore {
    pub fn new() -> Self {
        DomainStore {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Seeds the store with previously persisted entries and continues
    /// id assignment after the highest one seen.
    pub fn from_entries(entries: Vec<DomainEntry>) -> Self {
        let next_id = entries.iter().map(|entry| entry.id).max().unwrap_or(0) + 1;
        DomainStore { entries, next_id }
    }

    pub fn entries(&self) -> &[DomainEntry] {
        &self.entries
    }

    pub fn find_by_domain(&self, domain: &str) -> Option<&DomainEntry> {
        self.entries.iter().find(|entry| entry.domain == domain)
    }

    /// Returns the entry with the given id.
    ///
    /// More than one entry sharing an id means the uniqueness invariant
    /// is broken; that is reported as an internal error instead of
    /// silently picking one of the matches.
    pub fn get(&self, id: u32) -> Result<&DomainEntry, FilterError> {
        let mut matches = self.entries.iter().filter(|entry| entry.id == id);
        let entry = matches.next().ok_or(FilterError::NotFound(id))?;
        if matches.next().is_some() {
            return Err(FilterError::Internal(anyhow::anyhow!(
                "more than one entry with id {}",
                id
            )));
        }
        Ok(entry)
    }

    /// Inserts a normalized domain, enforcing uniqueness.
    ///
    /// Returns the entry id and whether a new entry was created: inserting
    /// a domain that is already present reports the existing id without
    /// touching the store.
    pub fn insert(&mut self, domain: String) -> (u32, bool) {
        if let Some(existing) = self.find_by_domain(&domain) {
            return (existing.id, false);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(DomainEntry { id, domain });
        (id, true)
    }

    pub fn remove(&mut self, id: u32) -> Result<DomainEntry, FilterError> {
        let idx = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(FilterError::NotFound(id))?;
        Ok(self.entries.remove(idx))
    }
}

impl Default for DomainStore {
    fn default() -> Self {
        DomainStore::new()
    }
}
