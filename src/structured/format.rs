//! Strict JSON-schema response format and prompt composition.
//!
//! Compatible with the OpenAI Chat Completions `response_format` parameter.

use serde_json::Value;

/// Fixed name the schema is registered under in the request.
pub const SCHEMA_NAME: &str = "response";

/// Instructional text inserted between the system prompt and the serialized
/// schema. The leading space is part of the contract.
const SCHEMA_INSTRUCTION: &str = " Here's the json schema you need to adhere to: <schema>";

/// Strict JSON-schema response constraint.
///
/// Rendered into the `response_format` parameter of a chat-completion
/// request; the schema itself passes through unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFormat {
    /// JSON schema the response must validate against
    pub schema: Value,

    /// Name for the schema (used in OpenAI format)
    pub schema_name: String,

    /// Whether to enforce strict schema compliance
    pub strict: bool,
}

impl SchemaFormat {
    /// Create a strict-mode format under the fixed [`SCHEMA_NAME`].
    pub fn strict_schema(schema: Value) -> Self {
        Self {
            schema,
            schema_name: SCHEMA_NAME.to_string(),
            strict: true,
        }
    }

    /// Convert to the OpenAI `response_format` parameter value.
    ///
    /// Example output:
    /// ```json
    /// {
    ///   "type": "json_schema",
    ///   "json_schema": {
    ///     "name": "response",
    ///     "strict": true,
    ///     "schema": { ... }
    ///   }
    /// }
    /// ```
    pub fn to_openai_format(&self) -> Value {
        serde_json::json!({
            "type": "json_schema",
            "json_schema": {
                "name": self.schema_name,
                "strict": self.strict,
                "schema": self.schema,
            }
        })
    }
}

/// Append the schema instruction to a system prompt.
///
/// The result is byte-exact for all inputs: `system_prompt` followed by the
/// fixed instruction text, the schema as compact JSON, and a closing
/// `</schema>` tag.
pub fn compose_system_prompt(system_prompt: &str, schema: &Value) -> String {
    format!("{system_prompt}{SCHEMA_INSTRUCTION}{schema}</schema>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strict_schema_defaults() {
        let format = SchemaFormat::strict_schema(json!({"type": "object"}));

        assert_eq!(format.schema_name, "response");
        assert!(format.strict);
        assert_eq!(format.schema, json!({"type": "object"}));
    }

    #[test]
    fn to_openai_format_shape() {
        let schema = json!({
            "type": "object",
            "properties": {
                "answer": {"type": "string"}
            }
        });

        let wire = SchemaFormat::strict_schema(schema.clone()).to_openai_format();

        assert_eq!(wire["type"], "json_schema");
        assert_eq!(wire["json_schema"]["name"], "response");
        assert_eq!(wire["json_schema"]["strict"], true);
        assert_eq!(wire["json_schema"]["schema"], schema);
    }

    #[test]
    fn compose_appends_instruction_and_schema() {
        let schema = json!({"type": "object"});
        let composed = compose_system_prompt("You are a helpful AI assistant.", &schema);

        assert_eq!(
            composed,
            "You are a helpful AI assistant. Here's the json schema you need to adhere to: \
             <schema>{\"type\":\"object\"}</schema>"
        );
    }

    #[test]
    fn compose_with_empty_system_prompt() {
        let schema = json!({});
        let composed = compose_system_prompt("", &schema);

        assert_eq!(
            composed,
            " Here's the json schema you need to adhere to: <schema>{}</schema>"
        );
    }

    #[test]
    fn compose_serializes_nested_schema_compactly() {
        let schema = json!({
            "properties": {
                "items": {"items": {"type": "number"}, "type": "array"}
            },
            "type": "object"
        });
        let composed = compose_system_prompt("Base.", &schema);

        // Compact JSON: no spaces after separators, nested objects inline.
        assert_eq!(
            composed,
            format!(
                "Base. Here's the json schema you need to adhere to: <schema>{schema}</schema>"
            )
        );
        assert!(composed.contains("\"items\":{\"items\":"));
        assert!(!composed.contains(": {"));
    }
}
