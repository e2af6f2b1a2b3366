//! Top bar: sidebar toggle, title, and the auth controls.

use egui::{self, Align, Layout, RichText, Vec2};
use elysium_types::session::{AuthMode, Session};
use crate::state::UiIntent;
use crate::theme::*;

pub fn header_panel(ui: &mut egui::Ui, title: &str, session: Option<&Session>) -> Option<UiIntent> {
    let mut intent = None;

    ui.horizontal(|ui| {
        if ui
            .add(egui::Button::new(RichText::new("☰").size(18.0).color(TEXT_PRIMARY)).frame(false))
            .on_hover_text("Toggle sidebar")
            .clicked()
        {
            intent = Some(UiIntent::ToggleSidebar);
        }

        ui.label(RichText::new(title).strong().size(18.0).color(TEXT_PRIMARY));

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| match session {
            Some(session) => {
                if ui.add(secondary_button("Logout")).clicked() {
                    intent = Some(UiIntent::Logout);
                }
                avatar(ui, session);
            }
            None => {
                // right-to-left: the rightmost button goes first
                if ui.add(primary_button("Sign Up")).clicked() {
                    intent = Some(UiIntent::OpenAuth(AuthMode::Signup));
                }
                if ui.add(secondary_button("Login")).clicked() {
                    intent = Some(UiIntent::OpenAuth(AuthMode::Login));
                }
            }
        });
    });

    intent
}

fn avatar(ui: &mut egui::Ui, session: &Session) {
    let size = Vec2::splat(30.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), size.x / 2.0, ACCENT);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        session.avatar_initial(),
        egui::FontId::proportional(15.0),
        BG_PRIMARY,
    );
    response.on_hover_text(session.label());
}

fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text.to_string()).color(BG_PRIMARY))
        .fill(ACCENT)
        .corner_radius(PILL_ROUNDING)
}

fn secondary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text.to_string()).color(TEXT_PRIMARY))
        .fill(BG_SURFACE)
        .corner_radius(PILL_ROUNDING)
}
