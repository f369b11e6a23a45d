use serde_json::Value;

use crate::error::ChatError;
use crate::types::{ChatResult, TokenUsage};

use super::error::parse_api_error;
use super::types::{ChatCompletionResponse, UsageBlock};

/// Interprets the wire-format response into a typed result.
///
/// Error statuses delegate to the error-envelope parser; success statuses
/// must carry `choices[0].message`. A recorded refusal suppresses
/// structured-data extraction; otherwise content that parses as JSON is
/// surfaced through `parsed`, and content that does not simply stays plain
/// text.
pub(crate) fn interpret(status: u16, body: &str) -> Result<ChatResult, ChatError> {
    if status >= 400 {
        return Err(parse_api_error(status, body));
    }

    let envelope: ChatCompletionResponse = serde_json::from_str(body).map_err(|err| {
        ChatError::protocol(format!("failed to parse chat completion response: {err}"))
    })?;
    let ChatCompletionResponse {
        choices,
        model,
        usage,
    } = envelope;

    let message = choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .ok_or_else(|| ChatError::protocol("response carries no choices[0].message"))?;

    let content = message.content.unwrap_or_default();
    // Empty and literal "null" refusal strings follow the provider convention
    // for an absent refusal.
    let refusal = message
        .refusal
        .filter(|reason| !reason.is_empty() && reason != "null");
    let parsed = if refusal.is_none() && !content.is_empty() {
        serde_json::from_str::<Value>(&content).ok()
    } else {
        None
    };

    Ok(ChatResult {
        content,
        model,
        usage: usage.map(convert_usage).unwrap_or_default(),
        refusal,
        parsed,
    })
}

fn convert_usage(usage: UsageBlock) -> TokenUsage {
    TokenUsage {
        prompt_tokens: usage.prompt_tokens,
        completion_tokens: usage.completion_tokens,
        total_tokens: usage.total_tokens,
    }
}
