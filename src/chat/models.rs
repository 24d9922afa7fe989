//! The core models for a chat with the HR policy API.
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
        }
    }
}

/// Body of the request sent to the answer API.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct RequestPayload {
    pub messages: Vec<Message>,
}

/// One question and the answer it got back.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Turn {
    pub question: String,
    pub answer: Option<String>,
}

impl Turn {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: Some(answer.to_string()),
        }
    }
}

/// Ordered, append-only history of a single session. Only `reset`
/// removes turns and it removes all of them.
#[derive(Default, Clone, Debug)]
pub struct Transcript(Vec<Turn>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn new_with_turns(turns: Vec<Turn>) -> Self {
        Self(turns)
    }

    pub fn append(&mut self, turn: Turn) {
        self.0.push(turn)
    }

    pub fn reset(&mut self) {
        self.0.clear()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flatten the history into alternating user/assistant messages and
    /// end with `question` as the newest user message. A turn without
    /// an answer still contributes an (empty) assistant message so the
    /// roles keep alternating.
    pub fn to_payload(&self, question: &str) -> RequestPayload {
        let mut messages: Vec<Message> = self
            .0
            .iter()
            .flat_map(|turn| {
                [
                    Message::new(Role::User, &turn.question),
                    Message::new(Role::Assistant, turn.answer.as_deref().unwrap_or("")),
                ]
            })
            .collect();
        messages.push(Message::new(Role::User, question));

        RequestPayload { messages }
    }
}
