//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `elysium-core` (pure Rust).
//! Implementations live in `elysium-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use elysium_types::{Result, session::Session};
use crate::listeners::Subscription;

// ─── Identity Port ───────────────────────────────────────────

/// Callback invoked with the provider's current session state
pub type SessionListener = Box<dyn Fn(Option<Session>)>;

/// A third-party identity service.
///
/// The session returned by the sign-in calls is informational; the
/// authoritative state arrives through [`IdentityPort::on_session_change`].
#[async_trait(?Send)]
pub trait IdentityPort {
    /// Verify email/password credentials
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session>;

    /// Register a new account and sign it in
    async fn create_account(&self, email: &str, password: &str) -> Result<Session>;

    /// End the current session
    async fn sign_out(&self) -> Result<()>;

    /// Register for session-change pushes. The listener is called once with
    /// the current state, then on every change, until the returned handle
    /// is dropped.
    fn on_session_change(&self, listener: SessionListener) -> Subscription;

    /// Name of this provider (for logging/debug)
    fn provider_name(&self) -> &str;
}

// ─── Timer Port ──────────────────────────────────────────────

/// Handle to a scheduled callback, used for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// One-shot timers on the single UI thread.
pub trait TimerPort {
    /// Run `callback` once after `delay_ms` milliseconds
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle;

    /// Cancel a pending callback. Unknown or already-fired handles are ignored.
    fn cancel(&self, handle: TimerHandle);
}

// ─── Storage Port ────────────────────────────────────────────

#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Set a value
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Delete a value
    async fn delete(&self, key: &str) -> Result<()>;

    /// Check if a key exists
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
