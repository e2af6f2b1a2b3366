use serde::{Deserialize, Serialize};

/// The single transient success banner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub visible: bool,
}

impl Notification {
    pub fn shown(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            visible: true,
        }
    }
}
