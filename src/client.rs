//! Client interface for schema-constrained completions.
//!
//! Developer-friendly goal: keep the public surface small and predictable.
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;

pub use builder::SchemaClientBuilder;
pub use self::core::{complete_with_schema, CompletionRequestBuilder, SchemaClient, DEFAULT_MODEL};
