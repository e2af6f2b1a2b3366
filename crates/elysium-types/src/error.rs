use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Signup form with differing password fields. Detected before any
    /// provider call.
    #[error("Passwords do not match.")]
    PasswordMismatch,

    /// Failure reported by the identity provider, shown to the user verbatim.
    #[error("{0}")]
    AuthProvider(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl AppError {
    /// Text suitable for the inline error slot of the auth modal.
    pub fn user_message(&self) -> String {
        match self {
            AppError::AuthProvider(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e.to_string())
    }
}
