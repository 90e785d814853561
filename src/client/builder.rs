use std::time::Duration;

use crate::client::core::{SchemaClient, DEFAULT_MODEL};
use crate::transport::HttpTransport;
use crate::Result;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable (developer-friendly).
pub struct SchemaClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    default_model: Option<String>,
    timeout: Option<Duration>,
}

impl SchemaClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            default_model: None,
            timeout: None,
        }
    }

    /// API key, sent as a bearer token. Not validated locally; a bad key is
    /// rejected by the backend.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Base URL of the OpenAI-compatible endpoint, without the
    /// `/chat/completions` path. A trailing slash is tolerated.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Model used when a request does not name one. Defaults to
    /// [`DEFAULT_MODEL`].
    pub fn default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = Some(model.into());
        self
    }

    /// Request timeout. When unset (and `SCHEMA_COMPLETION_TIMEOUT_SECS` is
    /// not in the environment), no timeout is applied and stall behavior is
    /// the HTTP client's default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<SchemaClient> {
        let transport = HttpTransport::new(
            self.base_url.unwrap_or_default(),
            self.api_key.unwrap_or_default(),
            self.timeout,
        )?;

        Ok(SchemaClient {
            transport,
            default_model: self
                .default_model
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

impl Default for SchemaClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
