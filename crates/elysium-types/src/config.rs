use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub title: String,
    /// Display name for assistant messages
    pub assistant_name: String,
    /// Text of the simulated assistant reply
    pub canned_reply: String,
    pub timing: TimingConfig,
    pub identity: IdentityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Elysium AI".to_string(),
            assistant_name: "Elysium".to_string(),
            canned_reply: DEFAULT_CANNED_REPLY.to_string(),
            timing: TimingConfig::default(),
            identity: IdentityConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Auto-dismiss window of the success notification
    pub notification_dismiss_ms: u32,
    /// Delay before the canned assistant reply is appended
    pub reply_delay_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            notification_dismiss_ms: 2500,
            reply_delay_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    pub provider: IdentityProviderKind,
    pub api_key: String,
    pub api_base: Option<String>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            provider: IdentityProviderKind::InMemory,
            api_key: String::new(),
            api_base: None,
        }
    }
}

impl IdentityConfig {
    pub fn firebase(api_key: impl Into<String>) -> Self {
        Self {
            provider: IdentityProviderKind::Firebase,
            api_key: api_key.into(),
            api_base: None,
        }
    }

    pub fn base_url(&self) -> &str {
        self.api_base
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityProviderKind {
    Firebase,
    /// Accounts kept in page memory; no network
    InMemory,
}

impl IdentityProviderKind {
    pub fn default_base_url(&self) -> &str {
        match self {
            IdentityProviderKind::Firebase => "https://identitytoolkit.googleapis.com",
            IdentityProviderKind::InMemory => "",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            IdentityProviderKind::Firebase => "Firebase",
            IdentityProviderKind::InMemory => "In-memory",
        }
    }
}

const DEFAULT_CANNED_REPLY: &str = "This is a simulated assistant response.";
