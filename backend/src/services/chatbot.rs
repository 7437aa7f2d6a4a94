use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1";
const CHAT_MODEL: &str = "deepseek/deepseek-r1";
const MAX_RESPONSE_TOKENS: u32 = 200;

const SYSTEM_PROMPT: &str = "You are StudyHub AI Assistant, a helpful AI for an educational \
    platform that connects students and tutors. Help users with study sessions, tutoring, \
    course materials, bookings, payments, and educational guidance. Be friendly, informative, \
    and concise.";

/// The reply substituted for every failure of the model endpoint. The chat
/// surface must never show a raw error to the end user.
pub const FALLBACK_REPLY: &str =
    "I'm sorry, I'm having trouble responding right now. Please try again later.";

/// Wrapper around the OpenRouter chat-completions API.
pub struct ChatbotClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ChatbotClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, OPENROUTER_API_URL)
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Answer a user message. Any failure (network, auth, quota, empty
    /// completion) degrades to the fixed apology reply.
    pub async fn reply(&self, message: &str) -> String {
        match self.complete(message).await {
            Ok(text) => text,
            Err(e) => {
                warn!("[CHATBOT] Falling back to canned reply: {}", e);
                FALLBACK_REPLY.to_string()
            }
        }
    }

    async fn complete(&self, message: &str) -> Result<String, String> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!("Requesting completion from {}", CHAT_MODEL);

        let body = serde_json::json!({
            "model": CHAT_MODEL,
            "max_tokens": MAX_RESPONSE_TOKENS,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": message },
            ],
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("API error: {}", response.status()));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err("Empty completion".to_string());
        }

        Ok(text)
    }
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_endpoint_degrades_to_apology() {
        // Port 9 (discard) is not listening; the request fails fast.
        let chatbot =
            ChatbotClient::with_base_url("test-key".to_string(), "http://127.0.0.1:9");
        let reply = chatbot.reply("Hello?").await;
        assert_eq!(reply, FALLBACK_REPLY);
    }
}
