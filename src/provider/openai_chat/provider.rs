use std::collections::HashMap;
use std::env;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::ChatError;
use crate::http::{DynHttpTransport, post_json_with_headers};
use crate::provider::ChatProvider;
use crate::types::{ChatOptions, ChatResult, Message};

use super::request::{build_chat_body, validate_messages};
use super::response::interpret;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// OpenAI Chat Completions 客户端
pub struct OpenAiChatClient {
    pub(crate) transport: DynHttpTransport,
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: String,
    pub(crate) default_model: String,
    pub(crate) timeout: Duration,
}

impl OpenAiChatClient {
    /// 创建带默认配置的客户端 凭证未显式给出时在构造期读取一次环境变量
    pub fn new(transport: DynHttpTransport) -> Self {
        Self {
            transport,
            api_key: env::var(API_KEY_ENV)
                .ok()
                .filter(|key| !key.trim().is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// 显式指定 API Key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// 自定义 base_url
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// 设置默认模型
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// 设置请求超时 毫秒
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout = Duration::from_millis(timeout_ms);
        self
    }

    pub(crate) fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.ends_with("/v1") {
            format!("{base}/chat/completions")
        } else {
            format!("{base}/v1/chat/completions")
        }
    }

    fn build_headers(&self, api_key: &str) -> HashMap<String, String> {
        HashMap::from([
            ("Authorization".to_string(), format!("Bearer {api_key}")),
            ("Content-Type".to_string(), "application/json".to_string()),
        ])
    }

    fn require_api_key(&self) -> Result<&str, ChatError> {
        self.api_key.as_deref().ok_or_else(|| ChatError::Config {
            message: format!("no API key configured; pass one explicitly or set {API_KEY_ENV}"),
        })
    }
}

impl ChatProvider for OpenAiChatClient {
    fn send_request(
        &self,
        messages: &[Message],
        options: &ChatOptions,
    ) -> Result<ChatResult, ChatError> {
        let api_key = self.require_api_key()?;
        validate_messages(messages)?;

        let model = options.model.as_deref().unwrap_or(&self.default_model);
        let temperature = options.temperature.unwrap_or(DEFAULT_TEMPERATURE);
        let body = build_chat_body(
            messages,
            model,
            temperature,
            options.response_format.as_ref(),
        )?;

        let endpoint = self.endpoint();
        debug!(
            model,
            endpoint = endpoint.as_str(),
            structured = options.response_format.is_some(),
            "dispatching chat completion request"
        );

        let response = post_json_with_headers(
            self.transport.as_ref(),
            endpoint,
            self.build_headers(api_key),
            Some(self.timeout),
            &body,
        )?;

        let status = response.status;
        let text = response.into_string()?;
        let result = interpret(status, &text);
        if let Err(ChatError::Api { status, message }) = &result {
            warn!(
                status = *status,
                message = message.as_str(),
                "chat completion rejected by remote"
            );
        }
        result
    }

    fn name(&self) -> &'static str {
        "openai_chat"
    }
}
