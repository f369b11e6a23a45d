use serde_json::{Map, Value};

use crate::error::ChatError;
use crate::types::{Message, SchemaSpec};

use super::schema::to_response_format;

const SUPPORTED_ROLES: [&str; 3] = ["system", "user", "assistant"];

/// Checks a conversation is well-formed before it is serialized.
///
/// Field presence is enforced by the type system; what remains is the
/// non-empty conversation, the supported role set, and non-empty content.
pub(crate) fn validate_messages(messages: &[Message]) -> Result<(), ChatError> {
    if messages.is_empty() {
        return Err(ChatError::validation(
            "conversation must contain at least one message",
        ));
    }
    for (index, message) in messages.iter().enumerate() {
        if !SUPPORTED_ROLES.contains(&message.role.0.as_str()) {
            return Err(ChatError::Validation {
                message: format!("message {index} has unsupported role `{}`", message.role.0),
            });
        }
        if message.content.is_empty() {
            return Err(ChatError::Validation {
                message: format!("message {index} has empty content"),
            });
        }
    }
    Ok(())
}

/// Builds the chat-completions request body.
///
/// Key order is insertion order and therefore deterministic: `model`,
/// `messages`, `temperature`, then `response_format` when a schema was
/// supplied.
pub(crate) fn build_chat_body(
    messages: &[Message],
    model: &str,
    temperature: f32,
    response_format: Option<&SchemaSpec>,
) -> Result<Value, ChatError> {
    let mut body = Map::new();
    body.insert("model".to_string(), Value::String(model.to_string()));
    body.insert(
        "messages".to_string(),
        Value::Array(messages.iter().map(convert_message).collect()),
    );
    body.insert("temperature".to_string(), Value::from(temperature));
    if let Some(spec) = response_format {
        body.insert("response_format".to_string(), to_response_format(spec)?);
    }
    Ok(Value::Object(body))
}

fn convert_message(message: &Message) -> Value {
    let mut obj = Map::new();
    obj.insert("role".to_string(), Value::String(message.role.0.clone()));
    obj.insert(
        "content".to_string(),
        Value::String(message.content.clone()),
    );
    Value::Object(obj)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::Role;

    #[test]
    fn validate_rejects_empty_conversation() {
        let err = validate_messages(&[]).expect_err("empty conversation should fail");
        match err {
            ChatError::Validation { message } => {
                assert!(
                    message.contains("at least one message"),
                    "unexpected validation message: {message}"
                );
            }
            other => panic!("unexpected error type: {other:?}"),
        }
    }

    #[test]
    fn validate_accepts_exactly_the_supported_roles() {
        let messages = vec![
            Message::system("a"),
            Message::user("b"),
            Message::assistant("c"),
        ];
        validate_messages(&messages).expect("supported roles should pass");
    }

    #[test]
    fn validate_rejects_out_of_enum_role() {
        let messages = vec![Message {
            role: Role("tool".to_string()),
            content: "output".to_string(),
        }];
        let err = validate_messages(&messages).expect_err("unknown role should fail");
        match err {
            ChatError::Validation { message } => {
                assert!(message.contains("tool"), "unexpected message: {message}");
            }
            other => panic!("unexpected error type: {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_empty_content() {
        let messages = vec![Message::user("")];
        let err = validate_messages(&messages).expect_err("empty content should fail");
        assert!(matches!(err, ChatError::Validation { .. }));
    }

    #[test]
    fn body_preserves_message_count_and_order() {
        let messages = vec![
            Message::system("first"),
            Message::user("second"),
            Message::assistant("third"),
            Message::user("fourth"),
        ];
        let body = build_chat_body(&messages, "m", 0.5, None).expect("body");

        // Round trip through wire text to assert on what the receiver sees.
        let text = serde_json::to_string(&body).expect("serialize");
        let parsed: Value = serde_json::from_str(&text).expect("parse");
        let wire_messages = parsed["messages"].as_array().expect("messages array");
        assert_eq!(wire_messages.len(), 4);
        assert_eq!(wire_messages[0]["role"], json!("system"));
        assert_eq!(wire_messages[0]["content"], json!("first"));
        assert_eq!(wire_messages[3]["content"], json!("fourth"));
    }

    #[test]
    fn body_temperature_is_numeric() {
        let body = build_chat_body(&[Message::user("hi")], "m", 0.7, None).expect("body");
        assert!(body["temperature"].is_number());
        let value = body["temperature"].as_f64().expect("temperature number");
        assert!((value - 0.7).abs() < 1e-6);
    }

    #[test]
    fn body_escapes_quotes_and_backslashes() {
        let messages = vec![Message::user(r#"say "hi" and a back\slash"#)];
        let body = build_chat_body(&messages, "m", 0.0, None).expect("body");
        let text = serde_json::to_string(&body).expect("serialize");
        assert!(text.contains(r#"say \"hi\" and a back\\slash"#));

        let parsed: Value = serde_json::from_str(&text).expect("parse");
        assert_eq!(
            parsed["messages"][0]["content"],
            json!(r#"say "hi" and a back\slash"#)
        );
    }

    #[test]
    fn body_omits_response_format_without_schema() {
        let body = build_chat_body(&[Message::user("hi")], "m", 0.0, None).expect("body");
        assert!(body.get("response_format").is_none());
    }

    #[test]
    fn body_includes_translated_response_format() {
        let spec = SchemaSpec::new("answer", json!({"type": "object"}));
        let body = build_chat_body(&[Message::user("hi")], "m", 0.0, Some(&spec)).expect("body");
        assert_eq!(body["response_format"]["type"], json!("json_schema"));
        assert_eq!(
            body["response_format"]["json_schema"]["name"],
            json!("answer")
        );
    }

    #[test]
    fn body_key_order_is_deterministic() {
        let messages = vec![Message::user("hi")];
        let first = serde_json::to_string(&build_chat_body(&messages, "m", 0.3, None).unwrap())
            .expect("serialize");
        let second = serde_json::to_string(&build_chat_body(&messages, "m", 0.3, None).unwrap())
            .expect("serialize");
        assert_eq!(first, second);
        assert!(
            first.starts_with(r#"{"model""#),
            "unexpected key order: {first}"
        );
    }
}
