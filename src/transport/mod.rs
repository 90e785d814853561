//! HTTP transport over the chat-completions endpoint.

pub mod http;

pub use http::HttpTransport;
