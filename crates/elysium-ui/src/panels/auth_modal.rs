//! Login / signup dialog.

use egui::{self, Align, Layout, RichText, Vec2};
use elysium_core::session::AuthModal;
use elysium_types::session::AuthMode;
use crate::state::{UiIntent, UiState};
use crate::theme::*;

/// Render the modal when open. Clicking the backdrop, pressing Escape or
/// the close button all yield `CloseAuth`.
pub fn auth_modal(ctx: &egui::Context, state: &mut UiState, modal: &AuthModal) -> Option<UiIntent> {
    if !modal.open {
        return None;
    }

    let mut intent = None;
    let mode = modal.mode;

    let response = egui::Modal::new(egui::Id::new("auth_modal")).show(ctx, |ui| {
        ui.set_width(340.0);

        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
            if ui
                .add(egui::Button::new(RichText::new("✕").color(TEXT_SECONDARY)).frame(false))
                .clicked()
            {
                intent = Some(UiIntent::CloseAuth);
            }
        });

        ui.vertical_centered(|ui| {
            ui.heading(RichText::new(mode.title()).color(TEXT_PRIMARY).strong());
        });
        ui.add_space(8.0);

        if let Some(error) = &modal.error {
            egui::Frame::default()
                .fill(ERROR_BG)
                .corner_radius(PANEL_ROUNDING)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(error).color(ERROR));
                });
            ui.add_space(6.0);
        }

        let form = &mut state.auth_form;
        field(ui, "Email", &mut form.email, "you@example.com", false);
        field(ui, "Password", &mut form.password, "••••••••", true);
        if mode == AuthMode::Signup {
            field(ui, "Confirm Password", &mut form.confirm_password, "••••••••", true);
        }
        ui.add_space(10.0);

        let enabled = state.can_submit_auth(mode);
        let label = if state.auth_in_flight { "Please wait..." } else { mode.submit_label() };
        let submit = ui.add_enabled(
            enabled,
            egui::Button::new(RichText::new(label).color(BG_PRIMARY).strong())
                .fill(ACCENT)
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(ui.available_width(), 34.0)),
        );
        let enter = enabled && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if submit.clicked() || enter {
            state.auth_in_flight = true;
            intent = Some(UiIntent::SubmitAuth(state.auth_request(mode)));
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let (prompt, link) = match mode {
                AuthMode::Login => ("Don't have an account?", "Sign Up"),
                AuthMode::Signup => ("Already have an account?", "Login"),
            };
            ui.label(RichText::new(prompt).color(TEXT_SECONDARY));
            if ui.link(RichText::new(link).color(ACCENT)).clicked() {
                intent = Some(UiIntent::SwitchAuthMode);
            }
        });
    });

    if intent.is_none() && response.should_close() {
        intent = Some(UiIntent::CloseAuth);
    }
    intent
}

fn field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str, password: bool) {
    ui.label(RichText::new(label).color(TEXT_SECONDARY).small());
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .password(password)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(4.0);
}
