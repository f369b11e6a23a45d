use serde::{Deserialize, Serialize};

use crate::http::DynHttpTransport;
use crate::provider::openai_chat::OpenAiChatClient;

/// 客户端配置 未设置的字段回退到内置默认值
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// 显式 API Key 缺省时构造期读取一次环境变量
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub default_model: Option<String>,
    pub timeout_ms: Option<u64>,
}

/// 根据配置构建客户端 显式字段优先于默认值
pub fn build_client_from_config(
    config: &ClientConfig,
    transport: DynHttpTransport,
) -> OpenAiChatClient {
    let mut client = OpenAiChatClient::new(transport);
    if let Some(api_key) = &config.api_key {
        client = client.with_api_key(api_key.clone());
    }
    if let Some(base_url) = &config.base_url {
        client = client.with_base_url(base_url.clone());
    }
    if let Some(model) = &config.default_model {
        client = client.with_default_model(model.clone());
    }
    if let Some(timeout_ms) = config.timeout_ms {
        client = client.with_timeout_ms(timeout_ms);
    }
    client
}
