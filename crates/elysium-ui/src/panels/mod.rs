pub mod header;
pub mod sidebar;
pub mod chat;
pub mod welcome;
pub mod auth_modal;
pub mod toast;
