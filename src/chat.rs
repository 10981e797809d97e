use serde::Serialize;
use thiserror::Error;

use crate::recommendation::{RecipeCard, RecommendationAdapter};

pub const CHAT_GREETING: &str =
    "안녕하세요! 냉장고에 있는 재료를 알려주시면 맞춤 레시피를 추천해드릴게요.";
pub const CHAT_FALLBACK_REPLY: &str = "죄송합니다. 잠시 문제가 발생했어요. 다시 시도해주세요.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatInputError {
    #[error("message is empty")]
    EmptyMessage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recipes: Vec<RecipeCard>,
    /// True when `text` is the local apology rather than a backend reply.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
}

impl ChatMessage {
    fn user(text: String) -> Self {
        Self {
            role: ChatRole::User,
            text,
            recipes: Vec::new(),
            fallback: false,
        }
    }

    fn assistant(text: String, recipes: Vec<RecipeCard>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text,
            recipes,
            fallback: false,
        }
    }
}

/// Chat transcript for one widget session.
#[derive(Clone, Debug)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(CHAT_GREETING.to_string(), Vec::new())],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Records the user's turn, asks the backend, and records the answer.
    /// A failed call still leaves the user's message in the transcript,
    /// followed by the fixed apology.
    pub async fn send(
        &mut self,
        adapter: &RecommendationAdapter,
        input: &str,
    ) -> Result<&ChatMessage, ChatInputError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(ChatInputError::EmptyMessage);
        }
        self.messages.push(ChatMessage::user(text.to_string()));

        let answer = match adapter.send_chat(text).await {
            Ok(reply) => ChatMessage::assistant(reply.reply, reply.recipes.unwrap_or_default()),
            Err(_) => ChatMessage {
                fallback: true,
                ..ChatMessage::assistant(CHAT_FALLBACK_REPLY.to_string(), Vec::new())
            },
        };
        self.messages.push(answer);
        Ok(&self.messages[self.messages.len() - 1])
    }
}
