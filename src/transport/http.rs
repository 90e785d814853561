use crate::types::response::ChatCompletion;
use crate::Result;
use std::env;
use std::time::Duration;

/// Path of the chat-completions operation, joined onto the base URL.
const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// HTTP transport bound to one endpoint and credential pair.
///
/// Connection pooling lives in the underlying `reqwest::Client`; cloning the
/// owning client reuses the pool.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    /// Build a transport for the given endpoint.
    ///
    /// Pool knobs are env-overridable. No request timeout is applied unless
    /// one is passed in or `SCHEMA_COMPLETION_TIMEOUT_SECS` is set; stall
    /// behavior otherwise stays with the HTTP client's defaults.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(
                env::var("SCHEMA_COMPLETION_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(32),
            )
            .pool_idle_timeout(Some(Duration::from_secs(
                env::var("SCHEMA_COMPLETION_POOL_IDLE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(90),
            )));

        let timeout = timeout.or_else(|| {
            env::var("SCHEMA_COMPLETION_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
        });
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }

        if let Ok(proxy_url) = env::var("SCHEMA_COMPLETION_PROXY_URL") {
            if let Ok(proxy) = reqwest::Proxy::all(&proxy_url) {
                builder = builder.proxy(proxy);
            }
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// POST a chat-completion request body and decode the response.
    ///
    /// Non-2xx statuses and network failures surface as the HTTP client's
    /// native error, untranslated.
    pub async fn post_chat_completions(&self, body: &serde_json::Value) -> Result<ChatCompletion> {
        let url = format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        let completion = response.error_for_status()?.json::<ChatCompletion>().await?;
        Ok(completion)
    }
}
