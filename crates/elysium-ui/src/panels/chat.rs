//! Chat panel: message list (or the welcome screen) and the input footer.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use elysium_types::message::{Message, Sender};
use crate::panels::welcome;
use crate::state::{UiIntent, UiState};
use crate::theme::*;

const FOOTER_HEIGHT: f32 = 72.0;

/// Render the chat panel. Returns `SendMessage` when the user submits input.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    messages: &[Message],
    assistant_name: &str,
) -> Option<UiIntent> {
    let available_height = (ui.available_height() - FOOTER_HEIGHT).max(0.0);

    ScrollArea::vertical()
        .max_height(available_height)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if messages.is_empty() {
                welcome_screen(ui);
            } else {
                for message in messages {
                    render_message(ui, message, assistant_name);
                    ui.add_space(10.0);
                }
                if state.scroll_to_bottom {
                    ui.scroll_to_cursor(Some(Align::BOTTOM));
                    state.scroll_to_bottom = false;
                }
            }
        });

    ui.add_space(8.0);
    input_footer(ui, state, assistant_name)
}

fn welcome_screen(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(
            RichText::new("Hello, how can I help you today?")
                .size(28.0)
                .color(TEXT_PRIMARY),
        );
        ui.add_space(16.0);
        welcome::icosahedron(ui, 240.0);
    });
}

fn render_message(ui: &mut egui::Ui, message: &Message, assistant_name: &str) {
    let (name, color) = match message.sender {
        Sender::User => ("You", ACCENT),
        Sender::Assistant => (assistant_name, ASSISTANT),
    };

    ui.horizontal_top(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(28.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 14.0, color);

        ui.vertical(|ui| {
            ui.label(RichText::new(name).color(color).strong().small());
            ui.label(RichText::new(&message.text).color(TEXT_PRIMARY));
        });
    });
}

fn input_footer(ui: &mut egui::Ui, state: &mut UiState, assistant_name: &str) -> Option<UiIntent> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PILL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let input = egui::TextEdit::singleline(&mut state.chat_input)
                    .hint_text(format!("Message {}...", assistant_name))
                    .frame(false)
                    .desired_width(ui.available_width() - 50.0)
                    .font(egui::FontId::proportional(15.0));
                let response = ui.add(input);

                let send_enabled = !state.chat_input.trim().is_empty();
                let send_btn = ui.add_enabled(
                    send_enabled,
                    egui::Button::new(RichText::new("➤").color(TEXT_PRIMARY))
                        .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                        .corner_radius(PILL_ROUNDING),
                );

                // Submit on Enter or button click
                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if enter || send_btn.clicked() {
                    if let Some(text) = state.take_chat_input() {
                        submitted = Some(UiIntent::SendMessage(text));
                    }
                    response.request_focus();
                }
            });
        });

    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.label(
            RichText::new(format!(
                "{} may display inaccurate info, so double-check its responses.",
                assistant_name
            ))
            .color(TEXT_SECONDARY)
            .small(),
        );
    });

    submitted
}
