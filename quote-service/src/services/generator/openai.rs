//! OpenAI chat-completions provider.
//!
//! Sends the two-message exchange (system persona + templated user prompt)
//! to the chat completions endpoint and extracts the first choice's text.

use super::{build_prompt, GeneratorError, QuoteGenerator, MAX_COMPLETION_TOKENS, SYSTEM_PROMPT};
use crate::config::OpenAiConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// OpenAI API base URL.
const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

pub struct OpenAiGenerator {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiGenerator {
    pub fn new(config: OpenAiConfig) -> Self {
        // A hung provider call is bounded by the transport timeout and
        // surfaces as a generation failure
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn build_request(&self, category: &str, topic: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: build_prompt(category, topic),
                },
            ],
            max_tokens: MAX_COMPLETION_TOKENS,
        }
    }
}

#[async_trait]
impl QuoteGenerator for OpenAiGenerator {
    async fn generate(&self, category: &str, topic: &str) -> Result<String, GeneratorError> {
        let request = self.build_request(category, topic);
        let url = format!("{}/chat/completions", OPENAI_API_BASE);

        tracing::debug!(
            model = %self.config.model,
            category = %category,
            topic = %topic,
            "Sending request to OpenAI API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GeneratorError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeneratorError::Api(format!(
                "OpenAI API error {}: {}",
                status, error_text
            )));
        }

        let api_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::Api(format!("Failed to parse response: {}", e)))?;

        let text = api_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(GeneratorError::EmptyCompletion)?;

        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> OpenAiGenerator {
        OpenAiGenerator::new(OpenAiConfig {
            api_key: "test-key".to_string(),
            model: "gpt-3.5-turbo".to_string(),
        })
    }

    #[test]
    fn request_is_a_two_message_exchange() {
        let request = generator().build_request("wisdom", "patience");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[0].content, SYSTEM_PROMPT);
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(request.max_tokens, MAX_COMPLETION_TOKENS);
    }

    #[test]
    fn response_envelope_parses() {
        let body = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": "  Patience turns obstacles into stepping stones.  "
                    },
                    "finish_reason": "stop"
                }
            ],
            "usage": { "prompt_tokens": 40, "completion_tokens": 9, "total_tokens": 49 }
        }"#;

        let parsed: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        let text = parsed.choices[0].message.content.trim();
        assert_eq!(text, "Patience turns obstacles into stepping stones.");
    }

    #[test]
    fn empty_choices_is_an_empty_completion() {
        let parsed: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(parsed.choices.is_empty());
    }
}
