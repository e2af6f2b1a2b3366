use serde::{Deserialize, Serialize};

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A single chat message. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    /// Id of the `send` call this message belongs to. A user message and
    /// its canned reply share the same id.
    pub request_id: u64,
    pub created_at: String,
}

impl Message {
    pub fn user(request_id: u64, text: impl Into<String>) -> Self {
        Self::new(Sender::User, request_id, text)
    }

    pub fn assistant(request_id: u64, text: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, request_id, text)
    }

    fn new(sender: Sender, request_id: u64, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            request_id,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}
