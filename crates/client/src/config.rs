/// Default backend base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5138";

/// Backend connection configuration.
///
/// Loaded once at binary startup and injected into
/// [`ApiClient`](crate::api::ApiClient); library code never reads the
/// environment itself.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (default: `http://localhost:5138`).
    pub base_url: String,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var             | Default                 |
    /// |---------------------|-------------------------|
    /// | `CHRONICLE_API_URL` | `http://localhost:5138` |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("CHRONICLE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self { base_url }
    }
}
