//! Success popup pinned to the top of the screen.

use egui::{self, Align2, Order, RichText};
use elysium_types::notification::Notification;
use crate::state::UiIntent;
use crate::theme::*;

/// Show the banner while visible; a click dismisses it early.
pub fn success_toast(ctx: &egui::Context, notification: &Notification) -> Option<UiIntent> {
    if !notification.visible {
        return None;
    }

    let area = egui::Area::new(egui::Id::new("success_toast"))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_TOP, [0.0, 20.0])
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(BG_SURFACE)
                .stroke(egui::Stroke::new(1.0, SUCCESS))
                .corner_radius(PILL_ROUNDING)
                .inner_margin(egui::Margin::symmetric(16, 10))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("✔").color(SUCCESS));
                        ui.label(RichText::new(&notification.message).color(TEXT_PRIMARY));
                    });
                })
                .response
                .interact(egui::Sense::click())
        });

    area.inner.clicked().then_some(UiIntent::DismissNotification)
}
