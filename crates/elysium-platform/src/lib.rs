//! Browser adapters for the Elysium core ports.

pub mod timers;
pub mod identity;
pub mod storage;

pub use identity::{FirebaseIdentity, InMemoryIdentity};
pub use timers::GlooTimers;
