//! Strict JSON-schema structured output support.
//!
//! The schema travels with the request in two places: embedded in the system
//! prompt via [`compose_system_prompt`], and attached as a strict
//! [`SchemaFormat`] constraint. The backend is trusted to enforce the schema;
//! nothing here validates the returned content.
//!
//! # Examples
//!
//! ```
//! use schema_completion::structured::SchemaFormat;
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": {
//!         "answer": {"type": "string"}
//!     },
//!     "required": ["answer"]
//! });
//!
//! let wire = SchemaFormat::strict_schema(schema).to_openai_format();
//! assert_eq!(wire["type"], "json_schema");
//! assert_eq!(wire["json_schema"]["strict"], true);
//! ```

pub mod format;

pub use format::{compose_system_prompt, SchemaFormat, SCHEMA_NAME};
