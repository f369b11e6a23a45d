//! OpenAI 兼容 Chat Completions 同步客户端库

pub mod config;
pub mod error;
pub mod http;
pub mod provider;
pub mod types;

pub use error::ChatError;
pub use provider::ChatProvider;
pub use provider::openai_chat::OpenAiChatClient;
pub use types::*;
