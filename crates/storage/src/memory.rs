//! In-process implementation of [`ContentStore`].
//!
//! Keys stored file sets by a sha-256 digest over their names and
//! contents, so identical submissions yield identical identifiers,
//! mirroring the content-addressed behaviour of the real network.
//! Intended for tests and local development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::store::{Cid, ContentStore, StorageError, StoredFile};

#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<String, Vec<StoredFile>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hex digest over every file name and content, NUL-separated so
    /// `("ab", "c")` and `("a", "bc")` key differently.
    fn content_key(files: &[StoredFile]) -> String {
        let mut hasher = Sha256::new();
        for file in files {
            hasher.update(file.name.as_bytes());
            hasher.update([0u8]);
            hasher.update(file.content.as_bytes());
            hasher.update([0u8]);
        }
        hasher
            .finalize()
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn put(&self, files: Vec<StoredFile>) -> Result<Cid, StorageError> {
        let cid = Cid::new(Self::content_key(&files));
        self.objects
            .lock()
            .expect("store mutex poisoned")
            .insert(cid.as_str().to_string(), files);
        Ok(cid)
    }

    async fn get(&self, cid: &Cid) -> Result<Option<Vec<StoredFile>>, StorageError> {
        Ok(self
            .objects
            .lock()
            .expect("store mutex poisoned")
            .get(cid.as_str())
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn identical_content_yields_identical_cid() {
        let store = MemoryStore::new();
        let files = vec![StoredFile::new("secret.txt", "payload")];

        let first = store.put(files.clone()).await.unwrap();
        let second = store.put(files).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn different_content_yields_different_cid() {
        let store = MemoryStore::new();

        let a = store
            .put(vec![StoredFile::new("secret.txt", "payload a")])
            .await
            .unwrap();
        let b = store
            .put(vec![StoredFile::new("secret.txt", "payload b")])
            .await
            .unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn get_unknown_cid_returns_none() {
        let store = MemoryStore::new();
        let missing = store.get(&Cid::new("no-such-cid")).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn file_boundaries_affect_the_key() {
        let store = MemoryStore::new();

        let joined = store
            .put(vec![StoredFile::new("ab", "c")])
            .await
            .unwrap();
        let split = store
            .put(vec![StoredFile::new("a", "bc")])
            .await
            .unwrap();
        assert_ne!(joined, split);
    }
}
