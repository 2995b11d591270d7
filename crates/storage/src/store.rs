//! The content-store capability interface and its data types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Identifier assigned by a content-addressed storage network.
///
/// Derived from the stored content by the network itself; opaque to
/// this client beyond equality and display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cid(String);

impl Cid {
    /// Wrap a raw identifier string as reported by the network.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named file as stored on the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    pub name: String,
    pub content: String,
}

impl StoredFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Errors from the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The network returned no result for the requested identifier.
    #[error("No response from storage network for {cid}")]
    NoResponse {
        /// The identifier that came back empty.
        cid: Cid,
    },

    /// A result was returned, but the requested file was not in it.
    #[error("File '{name}' not found in stored content")]
    FileNotFound {
        /// The file name that was asked for.
        name: String,
    },

    /// The HTTP request to the storage bridge failed (network, DNS,
    /// TLS, etc.), or a success response body did not decode.
    #[error("Storage request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The storage bridge returned a non-2xx status code.
    #[error("Storage bridge error ({status}): {body}")]
    Bridge {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

/// A client for a content-addressed storage network.
///
/// `put` submits named files and returns the identifier the network
/// derived for them; `get` returns every file stored under an
/// identifier, or `None` when the network has nothing for it.
/// Implementations perform no retries and keep no local state.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Submit `files` as one unit and return its content identifier.
    async fn put(&self, files: Vec<StoredFile>) -> Result<Cid, StorageError>;

    /// Retrieve every file stored under `cid`.
    async fn get(&self, cid: &Cid) -> Result<Option<Vec<StoredFile>>, StorageError>;
}
