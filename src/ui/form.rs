// src/ui/form.rs
use eframe::egui;

use crate::state::AppState;

/// Analysis request form. Returns true when the user asked to submit.
pub fn show_form_view(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut submit = false;

    ui.heading("Análise Arqueológica de Mercado");
    ui.add_space(8.0);

    egui::Grid::new("analysis_form_grid")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Segmento *");
            let segment_response = ui.add(
                egui::TextEdit::singleline(&mut state.form.segment)
                    .hint_text("Ex: fitness, finanças, educação")
                    .desired_width(320.0),
            );
            if state.focus_segment {
                segment_response.request_focus();
                state.focus_segment = false;
            }
            ui.end_row();

            ui.label("Produto/Serviço");
            ui.add(egui::TextEdit::singleline(&mut state.form.product).desired_width(320.0));
            ui.end_row();

            ui.label("Público-Alvo");
            ui.add(egui::TextEdit::singleline(&mut state.form.audience).desired_width(320.0));
            ui.end_row();

            ui.label("Preço (R$)");
            ui.add(egui::TextEdit::singleline(&mut state.form.price).desired_width(120.0));
            ui.end_row();

            ui.label("Objetivo de Receita (R$)");
            ui.add(
                egui::TextEdit::singleline(&mut state.form.revenue_goal).desired_width(120.0),
            );
            ui.end_row();

            ui.label("Orçamento de Marketing (R$)");
            ui.add(
                egui::TextEdit::singleline(&mut state.form.marketing_budget)
                    .desired_width(120.0),
            );
            ui.end_row();

            ui.label("Prazo de Lançamento");
            ui.add(
                egui::TextEdit::singleline(&mut state.form.launch_deadline)
                    .hint_text("Ex: 3 meses")
                    .desired_width(160.0),
            );
            ui.end_row();

            ui.label("Concorrentes");
            ui.add(egui::TextEdit::singleline(&mut state.form.competitors).desired_width(320.0));
            ui.end_row();

            ui.label("Query de Pesquisa");
            ui.add(
                egui::TextEdit::singleline(&mut state.form.query)
                    .hint_text("Gerada automaticamente a partir do segmento")
                    .desired_width(320.0),
            );
            ui.end_row();

            ui.label("Dados Adicionais");
            ui.add(
                egui::TextEdit::multiline(&mut state.form.notes)
                    .desired_rows(3)
                    .desired_width(320.0),
            );
            ui.end_row();
        });

    ui.add_space(12.0);
    if ui
        .add(egui::Button::new("🔬 Iniciar Análise Arqueológica"))
        .clicked()
    {
        submit = true;
    }
    ui.label(
        egui::RichText::new("Ctrl+Enter envia o formulário")
            .small()
            .weak(),
    );

    submit
}
