//! In-memory identity provider.
//!
//! Accounts live for the lifetime of the page. Used when no Firebase key
//! is configured and in tests. Failures use the same messages as the
//! Firebase adapter. Change notifications are delivered synchronously.

use std::cell::RefCell;
use std::collections::HashMap;
use async_trait::async_trait;

use elysium_core::listeners::{SessionListeners, Subscription};
use elysium_core::ports::{IdentityPort, SessionListener};
use elysium_types::{AppError, Result, session::Session};
use super::errors::{self, describe_error};

const MIN_PASSWORD_LEN: usize = 6;

struct Account {
    uid: String,
    password: String,
}

#[derive(Default)]
pub struct InMemoryIdentity {
    accounts: RefCell<HashMap<String, Account>>,
    current: RefCell<Option<Session>>,
    listeners: SessionListeners,
}

impl InMemoryIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.borrow().len()
    }

    pub fn current(&self) -> Option<Session> {
        self.current.borrow().clone()
    }

    fn set_current(&self, session: Option<Session>) {
        *self.current.borrow_mut() = session.clone();
        self.listeners.notify(session);
    }
}

fn rejected(code: &str) -> AppError {
    AppError::AuthProvider(describe_error(code))
}

#[async_trait(?Send)]
impl IdentityPort for InMemoryIdentity {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session> {
        let key = email.trim().to_lowercase();
        let session = {
            let accounts = self.accounts.borrow();
            match accounts.get(&key) {
                Some(account) if account.password == password => Session::new(&account.uid, &key),
                _ => return Err(rejected(errors::INVALID_LOGIN_CREDENTIALS)),
            }
        };
        self.set_current(Some(session.clone()));
        Ok(session)
    }

    async fn create_account(&self, email: &str, password: &str) -> Result<Session> {
        let key = email.trim().to_lowercase();
        if !key.contains('@') {
            return Err(rejected(errors::INVALID_EMAIL));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(rejected(&format!(
                "{} : Password should be at least {} characters",
                errors::WEAK_PASSWORD,
                MIN_PASSWORD_LEN
            )));
        }

        let session = {
            let mut accounts = self.accounts.borrow_mut();
            if accounts.contains_key(&key) {
                return Err(rejected(errors::EMAIL_EXISTS));
            }
            let uid = uuid::Uuid::new_v4().to_string();
            accounts.insert(
                key.clone(),
                Account {
                    uid: uid.clone(),
                    password: password.to_string(),
                },
            );
            Session::new(uid, key)
        };
        log::info!("Created in-memory account {}", session.email);
        self.set_current(Some(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> Result<()> {
        self.set_current(None);
        Ok(())
    }

    fn on_session_change(&self, listener: SessionListener) -> Subscription {
        let current = self.current.borrow().clone();
        listener(current);
        self.listeners.subscribe(listener)
    }

    fn provider_name(&self) -> &str {
        "in-memory"
    }
}
