//! Response-side types: the wire shapes this crate reads, and the
//! caller-facing completion result.

use serde::Deserialize;

/// Chat-completion response body (the subset this crate reads).
#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: CompletionMessage,
}

/// Assistant message returned by the backend.
///
/// Both fields are optional on the wire: `content` may be null or missing,
/// and `reasoning_content` is a backend-specific extension only some servers
/// emit. An absent field deserializes to `None` and is never conflated with
/// a field that is present but empty.
#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub reasoning_content: Option<String>,
}

/// Result of a schema-constrained completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaCompletion {
    /// Raw JSON text produced by the model.
    pub content: String,
    /// Reasoning trace, present only when the backend emitted
    /// `reasoning_content`.
    pub reasoning: Option<String>,
}

impl SchemaCompletion {
    /// Split into the `(content, reasoning)` pair.
    pub fn into_parts(self) -> (String, Option<String>) {
        (self.content, self.reasoning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_content_and_reasoning() {
        let body = r#"{"choices":[{"message":{"content":"{\"a\":1}","reasoning_content":"X"}}]}"#;
        let completion: ChatCompletion = serde_json::from_str(body).unwrap();
        let message = &completion.choices[0].message;
        assert_eq!(message.content.as_deref(), Some("{\"a\":1}"));
        assert_eq!(message.reasoning_content.as_deref(), Some("X"));
    }

    #[test]
    fn absent_fields_are_none() {
        let body = r#"{"choices":[{"message":{}}]}"#;
        let completion: ChatCompletion = serde_json::from_str(body).unwrap();
        let message = &completion.choices[0].message;
        assert!(message.content.is_none());
        assert!(message.reasoning_content.is_none());
    }

    #[test]
    fn present_but_empty_is_not_absent() {
        let body = r#"{"choices":[{"message":{"content":""}}]}"#;
        let completion: ChatCompletion = serde_json::from_str(body).unwrap();
        assert_eq!(completion.choices[0].message.content.as_deref(), Some(""));
    }

    #[test]
    fn missing_choices_is_empty() {
        let completion: ChatCompletion = serde_json::from_str("{}").unwrap();
        assert!(completion.choices.is_empty());
    }

    #[test]
    fn into_parts_preserves_pair_order() {
        let completion = SchemaCompletion {
            content: "{}".to_string(),
            reasoning: Some("because".to_string()),
        };
        assert_eq!(
            completion.into_parts(),
            ("{}".to_string(), Some("because".to_string()))
        );
    }
}
