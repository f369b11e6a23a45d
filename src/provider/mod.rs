use std::sync::Arc;

use serde_json::Value;

use crate::error::ChatError;
use crate::types::{ChatOptions, ChatResult, Message, PromptOptions, SchemaSpec};

pub mod openai_chat;

/// 统一的 Provider Trait 所有后端实现该接口即可接入
pub trait ChatProvider: Send + Sync {
    /// 提交完整对话并等待完整响应
    fn send_request(
        &self,
        messages: &[Message],
        options: &ChatOptions,
    ) -> Result<ChatResult, ChatError>;

    /// 后端名称
    fn name(&self) -> &'static str;

    /// 单轮便捷调用 返回纯文本回答 模型拒答时报 Refusal
    fn prompt(&self, text: &str, options: &PromptOptions) -> Result<String, ChatError> {
        let result = self.send_request(
            &prompt_messages(text, options),
            &ChatOptions {
                model: options.model.clone(),
                temperature: options.temperature,
                response_format: None,
            },
        )?;
        if let Some(reason) = result.refusal {
            return Err(ChatError::Refusal { reason });
        }
        Ok(result.content)
    }

    /// 单轮结构化调用 返回满足 schema 约束的 JSON 值
    fn prompt_structured(
        &self,
        text: &str,
        schema: &SchemaSpec,
        options: &PromptOptions,
    ) -> Result<Value, ChatError> {
        let result = self.send_request(
            &prompt_messages(text, options),
            &ChatOptions {
                model: options.model.clone(),
                temperature: options.temperature,
                response_format: Some(schema.clone()),
            },
        )?;
        if let Some(reason) = result.refusal {
            return Err(ChatError::Refusal { reason });
        }
        result.parsed.ok_or_else(|| ChatError::Parse {
            message: format!(
                "model did not return valid JSON for schema `{}`",
                schema.name
            ),
        })
    }
}

/// 线程安全 Provider
pub type DynProvider = Arc<dyn ChatProvider>;

/// 构造单轮对话 可选 system 在前 user 在后
fn prompt_messages(text: &str, options: &PromptOptions) -> Vec<Message> {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = &options.system {
        messages.push(Message::system(system.clone()));
    }
    messages.push(Message::user(text));
    messages
}
