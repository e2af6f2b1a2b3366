//! Elysium core: the controllers behind the chat view.
//!
//! Everything here is single-threaded and platform-free. Timers, the
//! identity provider and storage are reached through the traits in
//! [`ports`]; `elysium-platform` supplies the browser implementations.

pub mod ports;
pub mod listeners;
pub mod event_bus;
pub mod notification;
pub mod conversation;
pub mod session;


pub use conversation::ConversationStore;
pub use event_bus::EventBus;
pub use listeners::{SessionListeners, Subscription};
pub use notification::NotificationCenter;
pub use session::{AuthModal, SessionController};
