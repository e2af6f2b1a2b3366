//! UI-level state that drives rendering.
//! Holds form buffers and view toggles; controller state is read directly
//! each frame and events from the EventBus update the status line.

use elysium_types::event::AppEvent;
use elysium_types::session::{AuthMode, AuthRequest};

/// Something the user asked for. The app routes these to the controllers.
#[derive(Debug, Clone)]
pub enum UiIntent {
    ToggleSidebar,
    OpenAuth(AuthMode),
    CloseAuth,
    SwitchAuthMode,
    SubmitAuth(AuthRequest),
    Logout,
    SendMessage(String),
    DismissNotification,
}

/// Field buffers of the auth modal
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl AuthForm {
    pub fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
        self.confirm_password.clear();
    }
}

/// State visible to UI panels
pub struct UiState {
    /// Chat input field content
    pub chat_input: String,
    pub sidebar_open: bool,
    pub auth_form: AuthForm,
    /// A login/signup request is awaiting the provider
    pub auth_in_flight: bool,
    /// Status line text
    pub status_text: String,
    /// Set when a message lands; the chat view scrolls and clears it
    pub scroll_to_bottom: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            chat_input: String::new(),
            sidebar_open: false,
            auth_form: AuthForm::default(),
            auth_in_flight: false,
            status_text: "Ready".to_string(),
            scroll_to_bottom: false,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<AppEvent>) {
        for event in events {
            match event {
                AppEvent::SessionChanged { session } => {
                    self.status_text = match session {
                        Some(s) => format!("Signed in as {}", s.label()),
                        None => "Signed out".to_string(),
                    };
                }
                AppEvent::AuthSucceeded { .. } => {
                    self.auth_in_flight = false;
                    self.auth_form.clear();
                }
                AppEvent::AuthFailed { .. } => {
                    self.auth_in_flight = false;
                }
                AppEvent::MessageAppended { .. } => {
                    self.scroll_to_bottom = true;
                }
                AppEvent::LogoutFailed { message } => {
                    self.status_text = format!("Logout failed: {}", message);
                }
                AppEvent::NotificationShown { .. } | AppEvent::NotificationDismissed => {}
            }
        }
    }

    /// Take the trimmed chat input if it is non-blank, clearing the field.
    pub fn take_chat_input(&mut self) -> Option<String> {
        let text = self.chat_input.trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.chat_input.clear();
        Some(text)
    }

    /// Build a submit request from the form for the given mode
    pub fn auth_request(&self, mode: AuthMode) -> AuthRequest {
        let form = &self.auth_form;
        match mode {
            AuthMode::Login => AuthRequest::login(&form.email, &form.password),
            AuthMode::Signup => {
                AuthRequest::signup(&form.email, &form.password, &form.confirm_password)
            }
        }
    }

    pub fn can_submit_auth(&self, mode: AuthMode) -> bool {
        let form = &self.auth_form;
        let filled = !form.email.trim().is_empty() && !form.password.is_empty();
        let confirmed = mode == AuthMode::Login || !form.confirm_password.is_empty();
        filled && confirmed && !self.auth_in_flight
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
