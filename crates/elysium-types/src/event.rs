use serde::{Deserialize, Serialize};
use crate::message::Message;
use crate::session::{AuthMode, Session};

/// Events emitted by the controllers.
/// UI drains these each frame for status updates and repaint decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// The identity provider reported a new session state
    SessionChanged { session: Option<Session> },

    /// A login or signup was accepted by the provider
    AuthSucceeded { mode: AuthMode },

    /// A login or signup was rejected (locally or by the provider)
    AuthFailed { mode: AuthMode, message: String },

    NotificationShown { message: String },

    NotificationDismissed,

    /// A message was appended to the conversation
    MessageAppended { message: Message },

    /// The provider refused to end the session
    LogoutFailed { message: String },
}
