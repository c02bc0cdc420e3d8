use std::path::PathBuf;

use anyhow::Context as _;
use async_trait::async_trait;
use vortex_dns_core::{normalize_domain, DomainEntry, ListKind, ListPersistence};

/// List files in the line-oriented format the downstream resolver
/// consumes: one domain per line, `#` starts a comment.
pub struct FileListStore {
    dir: PathBuf,
}

impl FileListStore {
    pub fn new(dir: PathBuf) -> Self {
        FileListStore { dir }
    }

    fn list_path(&self, kind: ListKind) -> PathBuf {
        self.dir.join(format!("{}.list", kind))
    }
}

#[async_trait]
impl ListPersistence for FileListStore {
    async fn load(&self, kind: ListKind) -> anyhow::Result<Vec<DomainEntry>> {
        let path = self.list_path(kind);
        let data = match tokio::fs::read_to_string(&path).await {
            Ok(data) => data,
            // A list that was never exported yet is simply empty
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("error while opening the file {:?}", path))
            }
        };

        let mut entries = Vec::new();
        for line in data.lines() {
            let line = line.trim();
            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match normalize_domain(line) {
                Ok(domain) => entries.push(DomainEntry {
                    id: entries.len() as u32 + 1,
                    domain,
                }),
                Err(e) => {
                    tracing::debug!("Error while processing the line '{}': {}", line, e);
                }
            }
        }

        Ok(entries)
    }

    async fn export(&self, kind: ListKind, entries: &[DomainEntry]) -> anyhow::Result<()> {
        let path = self.list_path(kind);

        let mut contents = String::with_capacity(entries.len() * 16);
        for entry in entries {
            contents.push_str(&entry.domain);
            contents.push('\n');
        }

        tokio::fs::write(&path, contents)
            .await
            .with_context(|| format!("error while writing the file {:?}", path))
    }
}
