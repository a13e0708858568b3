// src/ui/progress.rs
use eframe::egui;

use crate::state::{AnalysisPhase, AppState};

/// In-flight view: the cosmetic step ticker. The request itself is not
/// observable from here; the real outcome arrives through the task channel.
pub fn show_progress_view(ui: &mut egui::Ui, state: &AppState) {
    let sim = match &state.phase {
        AnalysisPhase::InFlight { sim } => sim,
        AnalysisPhase::Idle => return,
    };

    ui.heading("Análise em andamento");
    ui.add_space(12.0);

    let (current, total) = sim.counter();
    ui.add(
        egui::ProgressBar::new(sim.fraction())
            .text(format!("{}/{}", current, total))
            .animate(true),
    );
    ui.add_space(8.0);
    ui.label(sim.message());
    ui.add_space(4.0);
    ui.label(
        egui::RichText::new(format!("Tempo estimado: {}", sim.eta()))
            .small()
            .weak(),
    );
}
