//! Collapsible sidebar with a static list of recent chats.

use egui::{self, RichText};
use crate::theme::*;

const RECENT: &[&str] = &[
    "Frontend design similar to Gemini...",
    "Explain quantum computing...",
    "Recipe for a vegan chocolate cake",
];

pub fn sidebar_panel(ui: &mut egui::Ui) {
    ui.add_space(8.0);
    let new_chat = egui::Button::new(RichText::new("New Chat  +").color(TEXT_PRIMARY))
        .fill(BG_SURFACE)
        .corner_radius(PILL_ROUNDING);
    if ui.add(new_chat).clicked() {
        log::debug!("New chat requested; conversations are single-session");
    }

    ui.add_space(16.0);
    ui.label(RichText::new("Recent").color(TEXT_SECONDARY).small().strong());
    ui.add_space(4.0);
    for title in RECENT {
        ui.add(egui::Label::new(RichText::new(*title).color(TEXT_PRIMARY)).truncate());
    }
}
