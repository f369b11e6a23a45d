use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub(crate) choices: Vec<ResponseChoice>,
    pub(crate) model: String,
    #[serde(default)]
    pub(crate) usage: Option<UsageBlock>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub(crate) struct ResponseChoice {
    #[serde(default)]
    pub(crate) message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub(crate) struct ResponseMessage {
    #[serde(default)]
    pub(crate) content: Option<String>,
    #[serde(default)]
    pub(crate) refusal: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub(crate) struct UsageBlock {
    #[serde(default)]
    pub(crate) prompt_tokens: Option<u64>,
    #[serde(default)]
    pub(crate) completion_tokens: Option<u64>,
    #[serde(default)]
    pub(crate) total_tokens: Option<u64>,
}
