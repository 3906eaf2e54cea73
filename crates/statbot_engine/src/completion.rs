use serde::{Deserialize, Serialize};
use statbot_logging::bot_debug;

use crate::http::{endpoint, ensure_success, map_reqwest_error};
use crate::{FetchError, FetchSettings};

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_COMPLETION_BASE_URL: &str = "https://api.openai.com/v1";
pub const EMAIL_SYSTEM_PROMPT: &str =
    "You are a helpful assistant. You are helping me write an email.";

#[derive(Debug, Clone)]
pub struct CompletionSettings {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl CompletionSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_COMPLETION_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Chat-completions client used to draft emails.
#[derive(Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    url: reqwest::Url,
    api_key: String,
    model: String,
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("url", &self.url.as_str())
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl CompletionClient {
    pub fn new(settings: &CompletionSettings, fetch: &FetchSettings) -> Result<Self, FetchError> {
        Ok(Self {
            client: fetch.build_client()?,
            url: endpoint(&settings.base_url, "chat/completions")?,
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
        })
    }

    /// Sends `prompt` as the user turn and returns the first choice's text.
    pub async fn complete(&self, prompt: &str) -> Result<String, FetchError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: EMAIL_SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };
        let response = self
            .client
            .post(self.url.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body: ChatResponse = ensure_success(response)?
            .json()
            .await
            .map_err(map_reqwest_error)?;
        bot_debug!("Completion returned {} choices", body.choices.len());
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| FetchError::missing("choices[0].message.content"))
    }
}
