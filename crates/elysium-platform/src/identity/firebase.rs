//! Firebase Authentication adapter.
//!
//! Talks to the Identity Toolkit REST API (`accounts:signInWithPassword`,
//! `accounts:signUp`) with browser `fetch()` via gloo-net. The signed-in
//! session is persisted through a `StoragePort` so it survives reloads;
//! the returned ID and refresh tokens are not kept.
//! Session-change pushes are queued with `spawn_local`, so listeners hear
//! about a sign-in after the sign-in call itself has resolved.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::json;

use elysium_core::listeners::{SessionListeners, Subscription};
use elysium_core::ports::{IdentityPort, SessionListener, StoragePort};
use elysium_types::{AppError, Result, config::IdentityConfig, session::Session};
use super::errors::{self, describe_error, rejection};

pub const SESSION_STORAGE_KEY: &str = "elysium:session";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordAuthResponse {
    local_id: String,
    email: String,
}

pub struct FirebaseIdentity {
    config: IdentityConfig,
    storage: Rc<dyn StoragePort>,
    current: Rc<RefCell<Option<Session>>>,
    listeners: SessionListeners,
}

impl FirebaseIdentity {
    pub fn new(config: IdentityConfig, storage: Rc<dyn StoragePort>) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(AppError::Config("Firebase API key is empty".to_string()));
        }
        Ok(Self {
            config,
            storage,
            current: Rc::new(RefCell::new(None)),
            listeners: SessionListeners::new(),
        })
    }

    /// Load a persisted session, if any, and announce it to listeners.
    pub async fn restore(&self) -> Result<Option<Session>> {
        let Some(bytes) = self.storage.get(SESSION_STORAGE_KEY).await? else {
            return Ok(None);
        };
        let session: Session = match serde_json::from_slice(&bytes) {
            Ok(session) => session,
            Err(e) => {
                log::warn!("Discarding unreadable stored session: {}", e);
                self.storage.delete(SESSION_STORAGE_KEY).await?;
                return Ok(None);
            }
        };
        log::info!("Restored session for {}", session.email);
        self.set_current(Some(session.clone()));
        Ok(Some(session))
    }

    /// Finish a sign-in from a successful Identity Toolkit response body:
    /// persist the session and announce it.
    pub async fn complete_sign_in(&self, body: &str) -> Result<Session> {
        let data: PasswordAuthResponse = serde_json::from_str(body)?;
        let session = Session::new(data.local_id, data.email);
        self.persist(&session).await;
        self.set_current(Some(session.clone()));
        Ok(session)
    }

    fn endpoint(&self, method: &str) -> String {
        format!(
            "{}/v1/accounts:{}?key={}",
            self.config.base_url().trim_end_matches('/'),
            method,
            self.config.api_key
        )
    }

    async fn password_request(&self, method: &str, email: &str, password: &str) -> Result<Session> {
        let body = json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });

        let response = Request::post(&self.endpoint(method))
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| AppError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                log::warn!("Identity request failed: {}", e);
                AppError::AuthProvider(describe_error(errors::NETWORK_REQUEST_FAILED))
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            let error = rejection(status, &text);
            log::warn!("{} rejected: {}", method, error);
            return Err(error);
        }
        self.complete_sign_in(&text).await
    }

    /// Persistence failures only cost the session on next reload.
    async fn persist(&self, session: &Session) {
        let result = match serde_json::to_vec(session) {
            Ok(json) => self.storage.set(SESSION_STORAGE_KEY, &json).await,
            Err(e) => Err(e.into()),
        };
        if let Err(e) = result {
            log::warn!("Could not persist session to {}: {}", self.storage.backend_name(), e);
        }
    }

    fn set_current(&self, session: Option<Session>) {
        *self.current.borrow_mut() = session.clone();
        let listeners = self.listeners.clone();
        wasm_bindgen_futures::spawn_local(async move {
            listeners.notify(session);
        });
    }
}

#[async_trait(?Send)]
impl IdentityPort for FirebaseIdentity {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session> {
        self.password_request("signInWithPassword", email, password).await
    }

    async fn create_account(&self, email: &str, password: &str) -> Result<Session> {
        self.password_request("signUp", email, password).await
    }

    /// Identity Toolkit has no sign-out call; dropping the stored session
    /// ends it.
    async fn sign_out(&self) -> Result<()> {
        self.storage.delete(SESSION_STORAGE_KEY).await?;
        self.set_current(None);
        Ok(())
    }

    fn on_session_change(&self, listener: SessionListener) -> Subscription {
        let current = self.current.borrow().clone();
        listener(current);
        self.listeners.subscribe(listener)
    }

    fn provider_name(&self) -> &str {
        "firebase"
    }
}
