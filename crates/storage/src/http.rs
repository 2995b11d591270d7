//! HTTP bridge implementation of [`ContentStore`].
//!
//! Talks to a storage bridge fronting the decentralized network:
//! `POST {endpoint}/upload` submits the files as multipart parts and
//! returns the assigned identifier; `GET {endpoint}/content/{cid}`
//! returns the stored files, or 404 when the network has nothing for
//! the identifier.

use async_trait::async_trait;
use serde::Deserialize;

use crate::store::{Cid, ContentStore, StorageError, StoredFile};

/// Storage bridge client authenticated with a caller-supplied token.
pub struct HttpStore {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

/// Response body of a successful upload.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    cid: Cid,
}

impl HttpStore {
    /// Create a client for the bridge at `endpoint`.
    ///
    /// The token is not validated here; a bad token surfaces as an
    /// error on the first request.
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }
}

#[async_trait]
impl ContentStore for HttpStore {
    async fn put(&self, files: Vec<StoredFile>) -> Result<Cid, StorageError> {
        let mut form = reqwest::multipart::Form::new();
        for file in files {
            let part = reqwest::multipart::Part::text(file.content).file_name(file.name);
            form = form.part("file", part);
        }

        let response = self
            .client
            .post(format!("{}/upload", self.endpoint))
            .bearer_auth(&self.token)
            .multipart(form)
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let upload: UploadResponse = response.json().await?;

        tracing::debug!(cid = %upload.cid, "Upload complete");
        Ok(upload.cid)
    }

    async fn get(&self, cid: &Cid) -> Result<Option<Vec<StoredFile>>, StorageError> {
        let response = self
            .client
            .get(format!("{}/content/{}", self.endpoint, cid))
            .bearer_auth(&self.token)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = ensure_success(response).await?;
        Ok(Some(response.json().await?))
    }
}

/// Ensure the response has a success status code. Returns the response
/// unchanged on success, or a [`StorageError::Bridge`] carrying the
/// status and body text on failure.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StorageError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(StorageError::Bridge {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}
