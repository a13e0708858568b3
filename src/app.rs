// src/app.rs
use eframe::egui;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::api::ApiClient;
use crate::export;
use crate::model::upload::validate_file;
use crate::settings::Settings;
use crate::state::{AnalysisPhase, AppState, SubmitError};
use crate::tasks::{TaskOutcome, Tasks};
use crate::ui::{self, ResultsAction};

pub struct ArqApp {
    state: AppState,
    api: ApiClient,
    tasks: Tasks,
}

impl ArqApp {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let api = ApiClient::new(settings)?;
        let tasks = Tasks::new()?;

        // Backend context is fetched once at startup, like the page load did.
        tasks.spawn_capabilities(api.clone());
        tasks.spawn_status(api.clone());

        Ok(Self {
            state: AppState::new(),
            api,
            tasks,
        })
    }

    fn pump_outcomes(&mut self) {
        let now = Instant::now();
        for outcome in self.tasks.poll() {
            match outcome {
                TaskOutcome::Analysis(Ok(raw)) => self.state.complete_analysis(raw),
                TaskOutcome::Analysis(Err(message)) => self.state.fail_analysis(&message),

                TaskOutcome::Capabilities(Ok(response)) if response.success => {
                    self.state.capabilities = Some(response);
                }
                TaskOutcome::Capabilities(result) => {
                    tracing::warn!("agent capabilities unavailable: {:?}", result.err());
                }
                TaskOutcome::Status(Ok(status)) => self.state.status = Some(status),
                TaskOutcome::Status(Err(message)) => {
                    tracing::warn!("app status unavailable: {}", message);
                }

                TaskOutcome::Pdf(Ok(path)) => {
                    self.state.notifications.success(format!(
                        "PDF gerado com sucesso! ({})",
                        path.display()
                    ));
                }
                TaskOutcome::Pdf(Err(message)) => {
                    self.state
                        .notifications
                        .error(format!("Erro ao gerar PDF: {}", message));
                }

                TaskOutcome::Upload {
                    row_id,
                    file_name,
                    result: Ok(file),
                } => {
                    self.state.uploads.succeed(row_id, file, now);
                    self.state.notifications.success(format!(
                        "Arquivo \"{}\" enviado com sucesso!",
                        file_name
                    ));
                }
                TaskOutcome::Upload {
                    row_id,
                    file_name,
                    result: Err(message),
                } => {
                    self.state.uploads.fail(row_id);
                    self.state.notifications.error(format!(
                        "Erro ao enviar \"{}\": {}",
                        file_name, message
                    ));
                }

                TaskOutcome::Removed {
                    file_id,
                    result: Ok(()),
                } => {
                    self.state.uploads.remove_file(&file_id);
                    self.state
                        .notifications
                        .success("Arquivo removido com sucesso!");
                }
                TaskOutcome::Removed {
                    result: Err(message),
                    ..
                } => {
                    self.state
                        .notifications
                        .error(format!("Erro ao remover arquivo: {}", message));
                }
            }
        }
    }

    fn submit_analysis(&mut self) {
        match self.state.try_begin_analysis(Instant::now()) {
            Ok(request) => {
                tracing::info!(session_id = %request.session_id, "starting analysis");
                self.tasks.spawn_analysis(self.api.clone(), request);
            }
            Err(SubmitError::AlreadyRunning) => {
                self.state
                    .notifications
                    .warning(SubmitError::AlreadyRunning.to_string());
            }
            Err(error) => {
                self.state.notifications.error(error.to_string());
                self.state.focus_segment = true;
            }
        }
    }

    fn export_json(&mut self) {
        let raw = match &self.state.current {
            Some(outcome) => outcome.raw.clone(),
            None => {
                self.state
                    .notifications
                    .warning("Nenhuma análise disponível para salvar");
                return;
            }
        };

        let chosen = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_directory(export::default_export_dir())
            .set_file_name(export::json_file_name())
            .set_title("Salvar dados da análise")
            .save_file();

        if let Some(path) = chosen {
            match export::save_json(&raw, &path) {
                Ok(()) => self
                    .state
                    .notifications
                    .success("Dados JSON salvos com sucesso!"),
                Err(error) => self
                    .state
                    .notifications
                    .error(format!("Erro ao salvar JSON: {}", error)),
            }
        }
    }

    fn export_pdf(&mut self) {
        let raw = match &self.state.current {
            Some(outcome) => outcome.raw.clone(),
            None => {
                self.state
                    .notifications
                    .warning("Nenhuma análise disponível para download");
                return;
            }
        };

        let chosen = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_directory(export::default_export_dir())
            .set_file_name(export::pdf_file_name())
            .set_title("Salvar relatório PDF")
            .save_file();

        if let Some(path) = chosen {
            self.tasks.spawn_pdf(self.api.clone(), raw, path);
        }
    }

    /// Validate each file locally, then fire one independent upload per
    /// survivor. A rejected file never blocks its siblings.
    fn intake_files(&mut self, paths: Vec<PathBuf>) {
        for path in paths {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            let size = match std::fs::metadata(&path) {
                Ok(meta) => meta.len(),
                Err(error) => {
                    self.state
                        .notifications
                        .error(format!("Erro ao ler \"{}\": {}", name, error));
                    continue;
                }
            };
            if let Err(rejection) = validate_file(&name, size) {
                self.state.notifications.error(rejection.to_string());
                continue;
            }

            let session_id = self.state.session_ids.session_id().to_string();
            let row_id = self.state.uploads.begin(&name);
            self.tasks
                .spawn_upload(self.api.clone(), row_id, path, name, session_id);
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (submit, save, close) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::Enter),
                i.modifiers.command && i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if submit && !self.state.is_analyzing() {
            self.submit_analysis();
        }
        if save && self.state.current.is_some() {
            self.export_json();
        }
        if close {
            self.state.show_capabilities = false;
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.label(egui::RichText::new("ARQV30 Enhanced").strong());
            ui.separator();
            if ui
                .selectable_label(self.state.show_capabilities, "Agentes")
                .clicked()
            {
                self.state.show_capabilities = !self.state.show_capabilities;
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui::capabilities::show_status_pill(ui, &self.state);
            });
        });
    }
}

impl eframe::App for ArqApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump_outcomes();

        let now = Instant::now();
        if let AnalysisPhase::InFlight { sim } = &mut self.state.phase {
            sim.tick(now);
            // Keep the ticker moving even without input events.
            ctx.request_repaint_after(Duration::from_millis(200));
        }
        if !self.state.uploads.rows.is_empty() || !self.state.notifications.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
        self.state.uploads.prune(now);
        self.state.notifications.retain(now);

        self.handle_shortcuts(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.is_analyzing() {
                ui::progress::show_progress_view(ui, &self.state);
            } else if self.state.report_view.is_some() {
                if let Some(action) = ui::results::show_results_view(ui, &mut self.state) {
                    match action {
                        ResultsAction::ExportJson => self.export_json(),
                        ResultsAction::ExportPdf => self.export_pdf(),
                        ResultsAction::NewAnalysis => self.state.reset_for_new_analysis(),
                    }
                }
            } else {
                egui::ScrollArea::vertical()
                    .id_source("form_scroll")
                    .show(ui, |ui| {
                        let submit = ui::form::show_form_view(ui, &mut self.state);
                        ui.add_space(12.0);
                        let upload_action = ui::upload::show_upload_view(ui, &mut self.state);

                        if submit {
                            self.submit_analysis();
                        }
                        if !upload_action.files.is_empty() {
                            self.intake_files(upload_action.files);
                        }
                        if let Some(file_id) = upload_action.remove {
                            self.tasks.spawn_remove(self.api.clone(), file_id);
                        }
                    });
            }
        });

        ui::capabilities::show_capabilities_window(ctx, &mut self.state);
        ui::toast::show_toasts(ctx, &self.state.notifications);
    }
}
