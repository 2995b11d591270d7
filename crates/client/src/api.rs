//! Generic resource client for the backend's CRUD collections.
//!
//! Wraps the four collection operations (list, create, update, delete)
//! using [`reqwest`].  One [`ApiClient`] serves every record type that
//! implements [`Resource`]; the bearer credential is supplied by the
//! caller on every call and never cached here.

use std::marker::PhantomData;

use chronicle_core::gallery::GalleryItem;
use chronicle_core::research::ResearchItem;
use chronicle_core::timeline::TimelineEvent;
use chronicle_core::types::{RecordId, Resource};

/// HTTP client for a single Chronicle backend instance.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the resource client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.), or a
    /// 2xx response body did not decode as the expected record shape.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The record could not be serialized into a JSON request body.
    #[error("Failed to encode request body: {0}")]
    Body(#[from] serde_json::Error),

    /// The backend returned a non-2xx status code.  `body` preserves
    /// the raw response text exactly as the backend sent it.
    #[error("Backend error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

impl ApiClient {
    /// Create a new client for the backend at `base_url`.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:5138`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across clients).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Backend base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Typed handle for an arbitrary resource collection.
    pub fn resource<R: Resource>(&self) -> ResourceClient<'_, R> {
        ResourceClient {
            api: self,
            _record: PhantomData,
        }
    }

    /// Handle for the gallery collection (`/api/GalleryItems`).
    pub fn gallery(&self) -> ResourceClient<'_, GalleryItem> {
        self.resource()
    }

    /// Handle for the research collection (`/api/ResearchItems`).
    pub fn research(&self) -> ResourceClient<'_, ResearchItem> {
        self.resource()
    }

    /// Handle for the timeline collection (`/api/TimelineEvents`).
    pub fn timeline(&self) -> ResourceClient<'_, TimelineEvent> {
        self.resource()
    }
}

/// CRUD operations over one backend collection.
///
/// Stateless: every call is a single request/response round trip, and
/// the record lifecycle is entirely backend-owned.  Two concurrent
/// calls may land at the backend in either order.
pub struct ResourceClient<'a, R> {
    api: &'a ApiClient,
    _record: PhantomData<R>,
}

impl<R: Resource> ResourceClient<'_, R> {
    fn collection_url(&self) -> String {
        format!("{}/api/{}", self.api.base_url, R::COLLECTION)
    }

    fn record_url(&self, id: RecordId) -> String {
        format!("{}/api/{}/{}", self.api.base_url, R::COLLECTION, id)
    }

    /// Fetch every record in the collection, in backend order.
    pub async fn list(&self, token: &str) -> Result<Vec<R>, ClientError> {
        tracing::debug!(collection = R::COLLECTION, "Listing records");

        let response = self
            .api
            .client
            .get(self.collection_url())
            .bearer_auth(token)
            .send()
            .await?;

        parse_response(response).await
    }

    /// Create a record in the collection.
    ///
    /// The `id` field is stripped from the request body regardless of
    /// the input (identifiers are backend-assigned); the returned
    /// record carries the identifier the backend chose.
    pub async fn create(&self, token: &str, record: &R) -> Result<R, ClientError> {
        let mut body = serde_json::to_value(record)?;
        if let Some(obj) = body.as_object_mut() {
            obj.remove("id");
        }

        tracing::debug!(collection = R::COLLECTION, "Creating record");

        let response = self
            .api
            .client
            .post(self.collection_url())
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        parse_response(response).await
    }

    /// Replace the record stored under `id` wholesale.
    ///
    /// The request body always carries an `id` field equal to the path
    /// identifier, whatever the input record's own `id` says.
    pub async fn update(&self, token: &str, id: RecordId, record: &R) -> Result<(), ClientError> {
        let mut body = serde_json::to_value(record)?;
        // Record shapes always serialize to JSON objects.
        if let Some(obj) = body.as_object_mut() {
            obj.insert("id".to_string(), serde_json::Value::from(id));
        }

        tracing::debug!(collection = R::COLLECTION, id, "Updating record");

        let response = self
            .api
            .client
            .put(self.record_url(id))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        check_status(response).await
    }

    /// Delete the record stored under `id`.
    ///
    /// Sends no body and no `Content-Type`; only the bearer header.
    pub async fn delete(&self, token: &str, id: RecordId) -> Result<(), ClientError> {
        tracing::debug!(collection = R::COLLECTION, id, "Deleting record");

        let response = self
            .api
            .client
            .delete(self.record_url(id))
            .bearer_auth(token)
            .send()
            .await?;

        check_status(response).await
    }
}

// ---- response helpers ----

/// Ensure the response has a success status code. Returns the response
/// unchanged on success, or a [`ClientError::Api`] carrying the status
/// and the raw body text on failure.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(ClientError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Parse a successful JSON response body into the expected type.
async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let response = ensure_success(response).await?;
    Ok(response.json::<T>().await?)
}

/// Assert the response has a success status code, discarding the body.
async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
    ensure_success(response).await?;
    Ok(())
}
