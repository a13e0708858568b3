// src/ui/capabilities.rs
use eframe::egui;

use crate::state::AppState;

/// Backend status pill for the top bar.
pub fn show_status_pill(ui: &mut egui::Ui, state: &AppState) {
    match &state.status {
        Some(status) if status.is_online() => {
            ui.colored_label(
                egui::Color32::from_rgb(0x2e, 0xcc, 0x71),
                format!(
                    "● Sistema Ultra-Robusto ({} busca + {} IA)",
                    status.search_available(),
                    status.ai_available()
                ),
            );
        }
        Some(_) => {
            ui.colored_label(
                egui::Color32::from_rgb(0xf3, 0x9c, 0x12),
                "● Configuração Parcial",
            );
        }
        None => {
            ui.weak("● Verificando status...");
        }
    }
}

/// Floating window listing the backend's psychological agents.
pub fn show_capabilities_window(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_capabilities {
        return;
    }

    let mut open = state.show_capabilities;
    egui::Window::new("🤖 Agentes Psicológicos Especializados")
        .open(&mut open)
        .resizable(true)
        .show(ctx, |ui| match &state.capabilities {
            Some(capabilities) if !capabilities.agents.is_empty() => {
                egui::ScrollArea::vertical()
                    .id_source("agents_scroll")
                    .show(ui, |ui| {
                        for agent in capabilities.agents.values() {
                            ui.group(|ui| {
                                ui.horizontal(|ui| {
                                    ui.label(egui::RichText::new(&agent.name).strong());
                                    ui.small("ATIVO");
                                });
                                ui.label(&agent.mission);
                                ui.horizontal_wrapped(|ui| {
                                    for specialty in &agent.specialties {
                                        ui.small(format!("[{}]", specialty));
                                    }
                                });
                            });
                            ui.add_space(4.0);
                        }
                    });
            }
            _ => {
                ui.weak("Capacidades dos agentes indisponíveis.");
            }
        });
    state.show_capabilities = open;
}
