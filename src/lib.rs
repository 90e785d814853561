//! # schema-completion
//!
//! Schema-constrained chat completions for OpenAI-compatible model endpoints.
//!
//! The crate does one thing: send a system prompt, a user prompt, and a JSON
//! schema to a chat-completion endpoint, asking the model to produce output
//! that validates against the schema, and hand back the raw JSON text plus
//! the backend's optional reasoning trace.
//!
//! The schema is passed through twice, both times unmodified: serialized into
//! the system prompt between `<schema>` tags, and attached as a strict
//! `response_format` constraint. The endpoint is trusted to enforce the
//! schema; no local validation of the returned content is performed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use schema_completion::complete_with_schema;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> schema_completion::Result<()> {
//!     let schema = json!({
//!         "type": "object",
//!         "properties": { "answer": { "type": "string" } },
//!         "required": ["answer"]
//!     });
//!
//!     let completion = complete_with_schema(
//!         "your-api-key",
//!         "https://api.example.com/v1",
//!         schema,
//!         "You are a helpful AI assistant.",
//!         "2+2?",
//!         None,
//!     )
//!     .await?;
//!
//!     println!("{}", completion.content);
//!     Ok(())
//! }
//! ```
//!
//! For repeated calls against the same endpoint, build a [`SchemaClient`]
//! once and reuse it; [`complete_with_schema`] constructs a client per call.
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client handle, builders, and the one-call helper |
//! | [`transport`] | HTTP transport over the chat-completions endpoint |
//! | [`structured`] | Strict JSON-schema response format and prompt composition |
//! | [`types`] | Messages, wire response types, and the completion result |

pub mod client;
pub mod structured;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{complete_with_schema, SchemaClient, SchemaClientBuilder, DEFAULT_MODEL};
pub use structured::SchemaFormat;
pub use types::{
    message::{Message, MessageRole},
    response::SchemaCompletion,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
