//! Session controller: current user, auth modal, login/signup/logout.
//!
//! The session itself is written only by the identity provider's change
//! listener. A successful login closes the modal and raises the success
//! notification straight away; the session may still be absent at that
//! point because the provider's push is a separate event.

use std::cell::RefCell;
use std::rc::Rc;
use elysium_types::{
    AppError, Result,
    event::AppEvent,
    session::{AuthMode, AuthRequest, Session},
};
use crate::event_bus::EventBus;
use crate::listeners::Subscription;
use crate::notification::NotificationCenter;
use crate::ports::IdentityPort;

/// State of the login/signup dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthModal {
    pub open: bool,
    pub mode: AuthMode,
    /// Inline error from the last failed submit
    pub error: Option<String>,
}

pub struct SessionController {
    identity: Rc<dyn IdentityPort>,
    session: Rc<RefCell<Option<Session>>>,
    modal: RefCell<AuthModal>,
    notifications: NotificationCenter,
    event_bus: EventBus,
    _subscription: Subscription,
}

impl SessionController {
    /// Create the controller and subscribe to the provider for its lifetime.
    pub fn new(
        identity: Rc<dyn IdentityPort>,
        notifications: NotificationCenter,
        event_bus: EventBus,
    ) -> Self {
        let session: Rc<RefCell<Option<Session>>> = Rc::new(RefCell::new(None));

        let weak = Rc::downgrade(&session);
        let bus = event_bus.clone();
        let subscription = identity.on_session_change(Box::new(move |next: Option<Session>| {
            let Some(slot) = weak.upgrade() else {
                return;
            };
            match &next {
                Some(s) => log::info!("Session changed: signed in as {}", s.label()),
                None => log::info!("Session changed: signed out"),
            }
            *slot.borrow_mut() = next.clone();
            bus.emit(AppEvent::SessionChanged { session: next });
        }));

        log::info!("Session controller using {} identity", identity.provider_name());

        Self {
            identity,
            session,
            modal: RefCell::new(AuthModal::default()),
            notifications,
            event_bus,
            _subscription: subscription,
        }
    }

    // ─── Session ─────────────────────────────────────────────

    pub fn session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_some()
    }

    // ─── Auth modal ──────────────────────────────────────────

    pub fn modal(&self) -> AuthModal {
        self.modal.borrow().clone()
    }

    pub fn open_modal(&self, mode: AuthMode) {
        let mut modal = self.modal.borrow_mut();
        modal.mode = mode;
        modal.open = true;
        modal.error = None;
    }

    pub fn close_modal(&self) {
        let mut modal = self.modal.borrow_mut();
        modal.open = false;
        modal.error = None;
    }

    /// Flip between the login and signup forms
    pub fn switch_mode(&self) {
        let mut modal = self.modal.borrow_mut();
        modal.mode = modal.mode.toggled();
        modal.error = None;
    }

    // ─── Operations ──────────────────────────────────────────

    /// Dispatch a modal submit to `login` or `signup`.
    pub async fn submit(&self, request: AuthRequest) -> Result<()> {
        self.modal.borrow_mut().error = None;
        match request.mode {
            AuthMode::Login => self.login(&request.email, &request.password).await,
            AuthMode::Signup => {
                let confirm = request.confirm_password.unwrap_or_default();
                self.signup(&request.email, &request.password, &confirm).await
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        log::info!("Login requested for {}", email);
        match self.identity.sign_in_with_password(email, password).await {
            Ok(_) => {
                self.succeed(AuthMode::Login);
                Ok(())
            }
            Err(e) => Err(self.fail(AuthMode::Login, e)),
        }
    }

    /// Create an account. A password/confirmation mismatch is rejected
    /// before the provider is contacted.
    pub async fn signup(&self, email: &str, password: &str, confirm_password: &str) -> Result<()> {
        if password != confirm_password {
            return Err(self.fail(AuthMode::Signup, AppError::PasswordMismatch));
        }

        log::info!("Signup requested for {}", email);
        match self.identity.create_account(email, password).await {
            Ok(_) => {
                self.succeed(AuthMode::Signup);
                Ok(())
            }
            Err(e) => Err(self.fail(AuthMode::Signup, e)),
        }
    }

    /// Ask the provider to end the session.
    ///
    /// Callers spawn this and move on. A refusal is logged and published as
    /// [`AppEvent::LogoutFailed`]; the session only changes on the
    /// provider's push.
    pub async fn logout(&self) {
        if let Err(e) = self.identity.sign_out().await {
            let message = e.user_message();
            log::warn!("Logout failed: {}", message);
            self.event_bus.emit(AppEvent::LogoutFailed { message });
        }
    }

    fn succeed(&self, mode: AuthMode) {
        log::info!("{:?} succeeded", mode);
        self.close_modal();
        self.notifications.activate(mode.success_message());
        self.event_bus.emit(AppEvent::AuthSucceeded { mode });
    }

    /// Record a failure inline and normalise it for the caller.
    fn fail(&self, mode: AuthMode, error: AppError) -> AppError {
        let error = match error {
            AppError::PasswordMismatch => AppError::PasswordMismatch,
            other => AppError::AuthProvider(other.user_message()),
        };
        let message = error.user_message();
        log::warn!("{:?} failed: {}", mode, message);

        self.modal.borrow_mut().error = Some(message.clone());
        self.event_bus.emit(AppEvent::AuthFailed { mode, message });
        error
    }
}
