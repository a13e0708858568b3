// src/ui/toast.rs
use eframe::egui;

use crate::notify::{Level, Notifications};

fn color_for(level: Level) -> egui::Color32 {
    match level {
        Level::Info => egui::Color32::from_rgb(0x34, 0x98, 0xdb),
        Level::Success => egui::Color32::from_rgb(0x2e, 0xcc, 0x71),
        Level::Warning => egui::Color32::from_rgb(0xf3, 0x9c, 0x12),
        Level::Error => egui::Color32::from_rgb(0xe7, 0x4c, 0x3c),
    }
}

/// Transient toasts, stacked in the top-right corner.
pub fn show_toasts(ctx: &egui::Context, notifications: &Notifications) {
    if notifications.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toast_area"))
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 40.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.set_max_width(360.0);
            for toast in notifications.iter() {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.colored_label(color_for(toast.level), toast.level.title());
                        ui.label(&toast.message);
                    });
                });
                ui.add_space(4.0);
            }
        });
}
