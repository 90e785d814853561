use serde_json::Value;

use crate::client::builder::SchemaClientBuilder;
use crate::structured::{compose_system_prompt, SchemaFormat};
use crate::transport::HttpTransport;
use crate::types::message::Message;
use crate::types::response::SchemaCompletion;
use crate::{Error, Result};

/// Model used when the caller does not name one.
pub const DEFAULT_MODEL: &str = "meta-llama/Llama-3.3-70B-Instruct";

/// Client for schema-constrained completions against one endpoint.
///
/// Holds a pooled HTTP client, so it is cheap to reuse across calls. Each
/// call is fully independent: no shared mutable state, no retries, no
/// response caching. Concurrent calls from multiple tasks are fine.
pub struct SchemaClient {
    pub(crate) transport: HttpTransport,
    pub(crate) default_model: String,
}

impl SchemaClient {
    /// Create a builder.
    pub fn builder() -> SchemaClientBuilder {
        SchemaClientBuilder::new()
    }

    /// Start a schema-constrained completion request.
    pub fn complete(&self) -> CompletionRequestBuilder<'_> {
        CompletionRequestBuilder::new(self)
    }
}

/// Builder for a single completion request.
pub struct CompletionRequestBuilder<'a> {
    client: &'a SchemaClient,
    schema: Value,
    system_prompt: String,
    user_prompt: String,
    model: Option<String>,
}

impl<'a> CompletionRequestBuilder<'a> {
    pub(crate) fn new(client: &'a SchemaClient) -> Self {
        Self {
            client,
            schema: Value::Object(serde_json::Map::new()),
            system_prompt: String::new(),
            user_prompt: String::new(),
            model: None,
        }
    }

    /// JSON schema the response must adhere to.
    ///
    /// Passed through unmodified, both into the prompt text and into the
    /// `response_format` constraint.
    pub fn schema(mut self, schema: Value) -> Self {
        self.schema = schema;
        self
    }

    /// Base system prompt; the schema instruction is appended to it.
    pub fn system_prompt(mut self, text: impl Into<String>) -> Self {
        self.system_prompt = text.into();
        self
    }

    /// User prompt, sent verbatim.
    pub fn user_prompt(mut self, text: impl Into<String>) -> Self {
        self.user_prompt = text.into();
        self
    }

    /// Model identifier; the client default applies when unset.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Execute the request and return the completion.
    ///
    /// A single non-streaming exchange: transport and backend failures
    /// propagate directly, and a response whose first choice carries no
    /// content fails with [`Error::GenerationFailed`].
    pub async fn execute(self) -> Result<SchemaCompletion> {
        let model = self.model.as_deref().unwrap_or(&self.client.default_model);
        let body = build_request_body(model, &self.schema, &self.system_prompt, &self.user_prompt);

        tracing::debug!(model, "dispatching schema-constrained completion request");

        let completion = self.client.transport.post_chat_completions(&body).await?;

        let message = completion.choices.into_iter().next().map(|c| c.message);
        let (content, reasoning) = match message {
            Some(m) => (m.content, m.reasoning_content),
            None => (None, None),
        };

        match content {
            Some(content) if !content.is_empty() => Ok(SchemaCompletion { content, reasoning }),
            _ => {
                tracing::warn!(model, "backend response carried no content");
                Err(Error::GenerationFailed)
            }
        }
    }
}

/// Build the wire-shape request body for a chat-completion call.
pub(crate) fn build_request_body(
    model: &str,
    schema: &Value,
    system_prompt: &str,
    user_prompt: &str,
) -> Value {
    let messages = vec![
        Message::system(compose_system_prompt(system_prompt, schema)),
        Message::user(user_prompt),
    ];

    serde_json::json!({
        "messages": messages,
        "model": model,
        "stream": false,
        "response_format": SchemaFormat::strict_schema(schema.clone()).to_openai_format(),
    })
}

/// Perform a schema-constrained completion in one call.
///
/// Builds a client for the given endpoint, sends the two-message request,
/// and returns the completion. `model` falls back to [`DEFAULT_MODEL`] when
/// `None`. For repeated calls against the same endpoint, build a
/// [`SchemaClient`] once instead.
///
/// No format validation is performed on `api_key` or `base_url`; any
/// rejection is surfaced by the backend.
pub async fn complete_with_schema(
    api_key: &str,
    base_url: &str,
    schema: Value,
    system_prompt: &str,
    user_prompt: &str,
    model: Option<&str>,
) -> Result<SchemaCompletion> {
    let client = SchemaClient::builder()
        .api_key(api_key)
        .base_url(base_url)
        .build()?;

    let mut request = client
        .complete()
        .schema(schema)
        .system_prompt(system_prompt)
        .user_prompt(user_prompt);
    if let Some(model) = model {
        request = request.model(model);
    }

    request.execute().await
}
