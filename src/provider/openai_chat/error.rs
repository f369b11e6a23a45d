use serde::Deserialize;
use serde_json::Value;

use crate::error::ChatError;

pub(crate) fn parse_api_error(status: u16, body: &str) -> ChatError {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<InnerError>,
    }
    #[derive(Deserialize)]
    struct InnerError {
        message: Option<String>,
        code: Option<Value>,
    }
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(error) = parsed.error {
            let mut message = error.message.unwrap_or_else(|| "unknown error".to_string());
            if let Some(code) = error.code {
                message = format!("{message} ({code})");
            }
            return ChatError::Api { status, message };
        }
    }
    ChatError::Api {
        status,
        message: body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_message_from_error_envelope() {
        let err = parse_api_error(401, r#"{"error":{"message":"bad key"}}"#);
        match err {
            ChatError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "bad key");
            }
            other => panic!("unexpected error type: {other:?}"),
        }
    }

    #[test]
    fn appends_error_code_when_present() {
        let err = parse_api_error(
            429,
            r#"{"error":{"message":"slow down","code":"rate_limit_exceeded"}}"#,
        );
        match err {
            ChatError::Api { status, message } => {
                assert_eq!(status, 429);
                assert!(
                    message.contains("slow down") && message.contains("rate_limit_exceeded"),
                    "unexpected message: {message}"
                );
            }
            other => panic!("unexpected error type: {other:?}"),
        }
    }

    #[test]
    fn falls_back_to_raw_body_when_unparseable() {
        let err = parse_api_error(502, "<html>bad gateway</html>");
        match err {
            ChatError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "<html>bad gateway</html>");
            }
            other => panic!("unexpected error type: {other:?}"),
        }
    }
}
