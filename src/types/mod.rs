//! Shared data structures modeling chat conversations and results.
//!
//! These types mirror the chat-completions payload shape so the rest of the
//! crate can translate between caller intent and the wire format without
//! re-deriving structure at every call site.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Chat role string compatible with provider-side semantics.
///
/// Roles stay stringly typed on the wire; the request validator enforces
/// membership in the supported set before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(pub String);

impl Role {
    pub fn system() -> Self {
        Self("system".to_string())
    }

    pub fn user() -> Self {
        Self("user".to_string())
    }

    pub fn assistant() -> Self {
        Self("assistant".to_string())
    }
}

/// Single chat message; an ordered sequence of messages forms a conversation.
///
/// # Examples
///
/// ```
/// # use kaiwa::types::Message;
/// let msgs = vec![
///     Message::system("You are concise."),
///     Message::user("Summarize Rust traits."),
/// ];
/// assert_eq!(msgs[0].role.0, "system");
/// assert_eq!(msgs.len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role associated with this message.
    pub role: Role,
    /// Plain UTF-8 text content.
    pub content: String,
}

impl Message {
    /// Builds a system message from text.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::system(),
            content: content.into(),
        }
    }

    /// Builds a user message from text.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::user(),
            content: content.into(),
        }
    }

    /// Builds an assistant message from text.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::assistant(),
            content: content.into(),
        }
    }
}

/// Tunable options for one outgoing request.
///
/// Every field is optional so callers only set knobs they care about; unset
/// fields fall back to the client defaults. The struct is owned by a single
/// call and never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChatOptions {
    /// Optional model identifier override.
    pub model: Option<String>,
    /// Sampling temperature, typically within `0.0..=2.0`.
    pub temperature: Option<f32>,
    /// Optional structured-output constraint sent as `response_format`.
    pub response_format: Option<SchemaSpec>,
}

/// Options accepted by the single-turn convenience calls.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PromptOptions {
    /// Optional system message placed before the user message.
    pub system: Option<String>,
    /// Optional model identifier override.
    pub model: Option<String>,
    /// Sampling temperature override.
    pub temperature: Option<f32>,
}

/// User-authored description of a structured-output constraint.
///
/// The `schema` tree uses plain JSON values; the client translates it into
/// the provider's `json_schema` response-format envelope before dispatch.
///
/// # Examples
///
/// ```
/// # use kaiwa::types::SchemaSpec;
/// # use serde_json::json;
/// let spec = SchemaSpec::new("weather", json!({
///     "type": "object",
///     "properties": { "city": { "type": "string" } },
///     "required": ["city"],
///     "additionalProperties": false
/// }));
/// assert!(spec.strict);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaSpec {
    /// Name reported to the provider for this schema.
    pub name: String,
    /// Whether the provider must enforce the schema strictly.
    #[serde(default = "default_strict")]
    pub strict: bool,
    /// JSON Schema tree constraining the output.
    pub schema: Value,
}

fn default_strict() -> bool {
    true
}

impl SchemaSpec {
    /// Creates a strict schema spec with the given name and schema tree.
    pub fn new(name: impl Into<String>, schema: Value) -> Self {
        Self {
            name: name.into(),
            strict: true,
            schema,
        }
    }

    /// Overrides the strictness flag.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Token usage metrics reported by the provider.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TokenUsage {
    /// prompt tokens
    #[serde(default)]
    pub prompt_tokens: Option<u64>,
    /// completion tokens
    #[serde(default)]
    pub completion_tokens: Option<u64>,
    /// Total tokens across prompt and completion.
    #[serde(default)]
    pub total_tokens: Option<u64>,
}

/// Result of one chat call, immutable after construction.
///
/// `refusal` and `parsed` are mutually exclusive: a recorded refusal
/// suppresses structured-data extraction. `parsed` is only populated when the
/// assistant content was itself valid JSON; plain-text content leaves it
/// unset without signaling an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResult {
    /// Assistant message content, possibly empty on refusal.
    pub content: String,
    /// Effective model identifier reported by the provider.
    pub model: String,
    /// Token usage accounting.
    pub usage: TokenUsage,
    /// Explicit declination reported by the model, when present.
    pub refusal: Option<String>,
    /// Content parsed as JSON, when it was valid JSON.
    pub parsed: Option<Value>,
}
