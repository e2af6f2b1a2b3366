use serde::{Deserialize, Serialize};

/// An authenticated identity as reported by the identity provider.
///
/// Anonymous state is modelled as `Option<Session>::None`, so a value of
/// this type is always fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub uid: String,
    pub email: String,
}

impl Session {
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
        }
    }

    /// Label shown in the header
    pub fn label(&self) -> &str {
        &self.email
    }

    /// Upper-cased first character of the email, used as the avatar glyph
    pub fn avatar_initial(&self) -> String {
        self.email
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// Which form the auth modal shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            AuthMode::Login => "Welcome Back",
            AuthMode::Signup => "Create Account",
        }
    }

    pub fn submit_label(&self) -> &str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Create Account",
        }
    }

    /// Notification text shown after a successful submit in this mode
    pub fn success_message(&self) -> &str {
        match self {
            AuthMode::Login => "Successfully logged in!",
            AuthMode::Signup => "Account created successfully!",
        }
    }
}

/// Credentials submitted from the auth modal. Lives only for one submit.
#[derive(Debug, Clone)]
pub struct AuthRequest {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub confirm_password: Option<String>,
}

impl AuthRequest {
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            mode: AuthMode::Login,
            email: email.into(),
            password: password.into(),
            confirm_password: None,
        }
    }

    pub fn signup(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            mode: AuthMode::Signup,
            email: email.into(),
            password: password.into(),
            confirm_password: Some(confirm_password.into()),
        }
    }
}
