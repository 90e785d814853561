//! Core data types for schema-constrained completions.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`message`] | Role-tagged text messages sent to the endpoint |
//! | [`response`] | Wire response shapes and the completion result |

pub mod message;
pub mod response;

pub use message::{Message, MessageRole};
pub use response::{ChatCompletion, SchemaCompletion};
