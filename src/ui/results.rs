// src/ui/results.rs
use eframe::egui;

use crate::state::{AppState, AvatarTab};
use crate::view::{Bar, ReportView};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultsAction {
    ExportJson,
    ExportPdf,
    NewAnalysis,
}

/// Materialize the prebuilt report view. All data decisions (caps,
/// defaults, bar widths) were made when the view was built.
pub fn show_results_view(ui: &mut egui::Ui, state: &mut AppState) -> Option<ResultsAction> {
    // Clone the view for immutable use while tab state mutates.
    let view = match state.report_view.clone() {
        Some(view) => view,
        None => return None,
    };

    let mut action = None;

    ui.horizontal(|ui| {
        ui.heading("Análise Arqueológica Ultra-Detalhada Concluída");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("➕ Nova Análise").clicked() {
                action = Some(ResultsAction::NewAnalysis);
            }
            if ui.button("💾 Dados JSON").clicked() {
                action = Some(ResultsAction::ExportJson);
            }
            if ui.button("📄 Relatório PDF").clicked() {
                action = Some(ResultsAction::ExportPdf);
            }
        });
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .id_source("results_scroll")
        .show(ui, |ui| {
            show_dna_card(ui, &view);
            show_avatar_card(ui, state, &view);
            show_drivers_card(ui, &view);
            show_proofs_card(ui, &view);
            show_anti_objection_card(ui, &view);
            show_forensic_card(ui, &view);
            show_research_card(ui, &view);
            show_metadata_card(ui, &view);
        });

    action
}

fn card<R>(
    ui: &mut egui::Ui,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let result = ui
        .group(|ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(title).strong().size(16.0));
            ui.add_space(6.0);
            add_contents(ui)
        })
        .inner;
    ui.add_space(10.0);
    result
}

fn numbered_list(ui: &mut egui::Ui, items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        ui.label(format!("{}. {}", i + 1, item));
    }
}

fn quoted_list(ui: &mut egui::Ui, items: &[String]) {
    for item in items {
        ui.label(egui::RichText::new(format!("\"{}\"", item)).italics());
    }
}

fn metric(ui: &mut egui::Ui, value: &str, label: &str) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(value).strong().size(20.0));
        ui.label(egui::RichText::new(label).small().weak());
    });
}

fn bars(ui: &mut egui::Ui, id: &str, entries: &[Bar]) {
    egui::Grid::new(id)
        .num_columns(3)
        .spacing([10.0, 4.0])
        .show(ui, |ui| {
            for bar in entries {
                ui.label(egui::RichText::new(&bar.label).small());
                ui.add_sized(
                    [180.0, 12.0],
                    egui::ProgressBar::new(bar.percent / 100.0),
                );
                ui.label(egui::RichText::new(&bar.value).strong());
                ui.end_row();
            }
        });
}

fn show_dna_card(ui: &mut egui::Ui, view: &ReportView) {
    card(ui, "🔬 DNA da Conversão Extraído", |ui| {
        ui.label("Fórmula Estrutural Descoberta:");
        ui.label(egui::RichText::new(&view.dna.formula).strong());
        ui.add_space(6.0);

        if !view.dna.triggers.is_empty() {
            ui.label("Sequência de Gatilhos Psicológicos:");
            numbered_list(ui, &view.dna.triggers);
            ui.add_space(6.0);
        }
        if !view.dna.language_patterns.is_empty() {
            ui.label("Padrões de Linguagem Identificados:");
            for pattern in &view.dna.language_patterns {
                ui.label(format!("→ {}", pattern));
            }
            ui.add_space(6.0);
        }
        ui.label(format!("Timing Ótimo: {}", view.dna.optimal_timing));
    });
}

fn show_avatar_card(ui: &mut egui::Ui, state: &mut AppState, view: &ReportView) {
    let avatar = &view.avatar;
    card(ui, "🧠 Avatar Visceral Ultra-Detalhado", |ui| {
        ui.label(egui::RichText::new(&avatar.name).strong());
        ui.add_space(6.0);

        let tabs = [
            (AvatarTab::Wounds, "Feridas Abertas"),
            (AvatarTab::Dreams, "Sonhos Proibidos"),
            (AvatarTab::Demons, "Demônios Internos"),
            (AvatarTab::Dialect, "Dialeto da Alma"),
        ];
        ui.horizontal(|ui| {
            for (tab, label) in tabs {
                if ui
                    .selectable_label(state.avatar_tab == tab, label)
                    .clicked()
                {
                    state.avatar_tab = tab;
                }
            }
        });
        ui.separator();

        match state.avatar_tab {
            AvatarTab::Wounds => {
                ui.label(format!(
                    "Dores Inconfessáveis ({} identificadas):",
                    avatar.wound_count
                ));
                numbered_list(ui, &avatar.wounds);
            }
            AvatarTab::Dreams => {
                ui.label(format!(
                    "Desejos Ardentes ({} mapeados):",
                    avatar.dream_count
                ));
                numbered_list(ui, &avatar.dreams);
            }
            AvatarTab::Demons => {
                ui.label(format!(
                    "Medos Paralisantes ({} descobertos):",
                    avatar.demon_count
                ));
                numbered_list(ui, &avatar.demons);
            }
            AvatarTab::Dialect => {
                ui.label("Frases sobre Dores:");
                quoted_list(ui, &avatar.pain_phrases);
                ui.add_space(4.0);
                ui.label("Frases sobre Desejos:");
                quoted_list(ui, &avatar.desire_phrases);
                ui.add_space(4.0);
                ui.label("Metáforas Comuns:");
                for metaphor in &avatar.metaphors {
                    ui.label(metaphor);
                }
            }
        }
    });
}

fn show_drivers_card(ui: &mut egui::Ui, view: &ReportView) {
    let drivers = &view.drivers;
    card(
        ui,
        &format!(
            "⚙ Arsenal de Drivers Mentais ({} Customizados)",
            drivers.created
        ),
        |ui| {
            ui.horizontal(|ui| {
                metric(ui, &drivers.created.to_string(), "Drivers Criados");
                ui.add_space(24.0);
                metric(
                    ui,
                    &drivers.universal_available.to_string(),
                    "Universais Disponíveis",
                );
                ui.add_space(24.0);
                metric(ui, &drivers.personalization, "Personalização");
            });
            ui.add_space(8.0);

            for driver in &drivers.drivers {
                egui::CollapsingHeader::new(format!(
                    "{}  [{}]",
                    driver.title, driver.priority
                ))
                .show(ui, |ui| {
                    ui.label(format!("Gatilho Central: {}", driver.central_trigger));
                    ui.label(format!(
                        "Definição Visceral: {}",
                        driver.visceral_definition
                    ));
                    ui.add_space(4.0);
                    ui.label("Roteiro de Ativação:");
                    ui.label(format!(
                        "  Pergunta de Abertura: \"{}\"",
                        driver.opening_question
                    ));
                    ui.label(format!("  História/Analogia: {}", driver.story_analogy));
                    ui.label(format!(
                        "  Comando de Ação: \"{}\"",
                        driver.action_command
                    ));
                    if !driver.anchor_phrases.is_empty() {
                        ui.add_space(4.0);
                        ui.label("Frases de Ancoragem:");
                        quoted_list(ui, &driver.anchor_phrases);
                    }
                });
            }
        },
    );
}

fn show_proofs_card(ui: &mut egui::Ui, view: &ReportView) {
    card(
        ui,
        &format!("🎭 Arsenal de PROVIs ({} Devastadoras)", view.proofs.len()),
        |ui| {
            ui.label(
                "Provas Visuais Instantâneas que transformam conceitos abstratos \
                 em experiências físicas inesquecíveis",
            );
            ui.add_space(6.0);

            for proof in &view.proofs {
                egui::CollapsingHeader::new(format!(
                    "{}  [{}]",
                    proof.name, proof.category
                ))
                .show(ui, |ui| {
                    ui.label(format!("Objetivo Psicológico: {}", proof.objective));
                    ui.label(format!("Experimento: {}", proof.experiment));
                    ui.label("Materiais:");
                    for material in &proof.materials {
                        ui.label(format!("  • {}", material));
                    }
                    ui.label(format!("Impacto Esperado: {}", proof.expected_impact));
                });
            }
        },
    );
}

fn show_anti_objection_card(ui: &mut egui::Ui, view: &ReportView) {
    let system = &view.anti_objection;
    card(ui, "🛡 Sistema Anti-Objeção Psicológico", |ui| {
        ui.horizontal(|ui| {
            metric(ui, "Tempo", "Urgência e priorização");
            ui.add_space(24.0);
            metric(ui, "Dinheiro", "Custo vira investimento");
            ui.add_space(24.0);
            metric(ui, "Confiança", "Autoridade e prova social");
        });
        ui.add_space(8.0);

        if !system.hidden.is_empty() {
            ui.label("Objeções Ocultas Identificadas:");
            for objection in &system.hidden {
                egui::CollapsingHeader::new(&objection.kind).show(ui, |ui| {
                    ui.label(format!("Objeção: \"{}\"", objection.objection));
                    ui.label(format!("Perfil Típico: {}", objection.typical_profile));
                    ui.label(format!("Contra-ataque: {}", objection.counter_attack));
                });
            }
            ui.add_space(6.0);
        }
        if !system.emergency.is_empty() {
            ui.label("Arsenal de Emergência:");
            quoted_list(ui, &system.emergency);
        }
    });
}

fn show_forensic_card(ui: &mut egui::Ui, view: &ReportView) {
    let forensic = &view.forensic;
    card(ui, "📊 Métricas Forenses Objetivas", |ui| {
        ui.horizontal(|ui| {
            metric(
                ui,
                &forensic.total_arguments.to_string(),
                "Argumentos Totais",
            );
            ui.add_space(24.0);
            metric(ui, &forensic.logical_arguments.to_string(), "Lógicos");
            ui.add_space(24.0);
            metric(ui, &forensic.emotional_arguments.to_string(), "Emocionais");
            ui.add_space(24.0);
            metric(ui, &forensic.promise_proof_ratio, "Ratio Promessa/Prova");
        });
        ui.add_space(8.0);

        ui.label("Gatilhos de Cialdini:");
        bars(ui, "cialdini_bars", &forensic.cialdini);
        if !forensic.emotional.is_empty() {
            ui.add_space(6.0);
            ui.label("Intensidade Emocional:");
            bars(ui, "emotional_bars", &forensic.emotional);
        }
    });
}

fn show_research_card(ui: &mut egui::Ui, view: &ReportView) {
    let research = &view.research;
    card(ui, "🌐 Pesquisa Web Massiva", |ui| {
        ui.horizontal(|ui| {
            metric(ui, &research.total_queries, "Queries Executadas");
            ui.add_space(24.0);
            metric(ui, &research.unique_sources, "Fontes Únicas");
            ui.add_space(24.0);
            metric(ui, &research.total_content, "Caracteres Extraídos");
            ui.add_space(24.0);
            metric(ui, &research.average_quality, "Qualidade Média");
        });
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(
                "Garantia de Dados Reais: 100% dos dados baseados em pesquisa \
                 real na web — zero simulação",
            )
            .small(),
        );
    });
}

fn show_metadata_card(ui: &mut egui::Ui, view: &ReportView) {
    let metadata = &view.metadata;
    card(ui, "📋 Metadados da Análise", |ui| {
        egui::Grid::new("metadata_grid")
            .num_columns(2)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                ui.label("Tempo de Processamento:");
                ui.label(&metadata.processing_time);
                ui.end_row();
                ui.label("Engine de Análise:");
                ui.label(&metadata.engine);
                ui.end_row();
                ui.label("Agentes Utilizados:");
                ui.label(&metadata.agents_used);
                ui.end_row();
                ui.label("Densidade Persuasiva:");
                ui.label(&metadata.persuasion_density);
                ui.end_row();
                ui.label("Arsenal Completo:");
                ui.label(&metadata.arsenal_complete);
                ui.end_row();
                ui.label("Session ID:");
                ui.label(&metadata.session_id);
                ui.end_row();
            });
    });
}
