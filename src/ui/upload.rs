// src/ui/upload.rs
use eframe::egui;
use std::path::PathBuf;

use crate::model::upload::{format_file_size, picker_extensions};
use crate::state::AppState;

/// What the upload widget asked for this frame.
#[derive(Debug, Default)]
pub struct UploadAction {
    pub files: Vec<PathBuf>,
    pub remove: Option<String>,
}

/// Attachment intake: drop target, picker, per-file progress and the list
/// of confirmed uploads.
pub fn show_upload_view(ui: &mut egui::Ui, state: &mut AppState) -> UploadAction {
    let mut action = UploadAction::default();

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("📎 Anexos").strong());

        let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
        let hint = if hovering {
            "Solte os arquivos para enviar"
        } else {
            "Arraste arquivos aqui ou use o botão para selecionar (máx. 50MB)"
        };
        ui.label(egui::RichText::new(hint).weak());

        if ui.button("Selecionar Arquivos...").clicked() {
            if let Some(paths) = rfd::FileDialog::new()
                .add_filter("Documentos e imagens", &picker_extensions())
                .set_title("Selecionar anexos")
                .pick_files()
            {
                action.files.extend(paths);
            }
        }

        // Files dropped anywhere on the window count as intake.
        let dropped: Vec<PathBuf> = ui.ctx().input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        action.files.extend(dropped);

        if !state.uploads.rows.is_empty() {
            ui.add_space(6.0);
            for row in &state.uploads.rows {
                ui.horizontal(|ui| {
                    ui.label(&row.name);
                    ui.add_sized(
                        [160.0, 12.0],
                        egui::ProgressBar::new(row.percent as f32 / 100.0)
                            .text(format!("{}%", row.percent)),
                    );
                });
            }
        }

        if !state.uploads.files.is_empty() {
            ui.add_space(6.0);
            ui.label("Arquivos Enviados:");
            for file in &state.uploads.files {
                ui.horizontal(|ui| {
                    ui.label(format!(
                        "📄 {} ({})",
                        file.name,
                        format_file_size(file.size)
                    ));
                    if ui
                        .button(egui::RichText::new("🗑").color(egui::Color32::RED))
                        .clicked()
                    {
                        action.remove = Some(file.file_id.clone());
                    }
                });
            }
        }
    });

    action
}
