//! egui front end for Elysium.
//!
//! Panels render controller state and hand user intents back to the app
//! as [`state::UiIntent`] values; they never call the controllers.

pub mod state;
pub mod theme;
pub mod panels;
