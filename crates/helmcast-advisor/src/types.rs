//! Serde types for the chat-completion wire format.

use serde::{Deserialize, Serialize};

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the chat-completion endpoint.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Response body from the chat-completion endpoint. Extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

/// Message payload inside a choice. `content` can be absent upstream
/// (tool calls, refusals).
#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.message.content.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_roles_in_order() {
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![
                ChatMessage::system("You are concise."),
                ChatMessage::user("Hello"),
            ],
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "You are concise.");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "Hello");
    }

    #[test]
    fn test_first_content_present() {
        let body = serde_json::json!({
            "choices": [
                {"message": {"role": "assistant", "content": "Reef early."}},
                {"message": {"role": "assistant", "content": "Ignored."}}
            ]
        });

        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();

        assert_eq!(response.first_content(), Some("Reef early."));
    }

    #[test]
    fn test_first_content_missing_field() {
        let body = serde_json::json!({
            "choices": [{"message": {"role": "assistant"}}]
        });

        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();

        assert_eq!(response.first_content(), None);
    }

    #[test]
    fn test_first_content_no_choices() {
        let body = serde_json::json!({"choices": []});

        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();

        assert_eq!(response.first_content(), None);
    }
}
