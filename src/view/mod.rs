// src/view/mod.rs
pub mod format;

use crate::model::report::{AnalysisReport, Material};
use crate::view::format::{percent1, thousands};

pub const DEFAULT_FORMULA: &str =
    "DESPERTAR → AMPLIFICAR → PRESSIONAR → DIRECIONAR → CONVERTER";
pub const DEFAULT_ENGINE: &str = "ARQV30 Enhanced v2.0";

const MAX_WOUNDS: usize = 15;
const MAX_DREAMS: usize = 15;
const MAX_DEMONS: usize = 10;

const NA: &str = "N/A";

/// Display tree built from a typed report. Pure data: the egui layer only
/// materializes it, so every default and cap is testable without a UI.
#[derive(Debug, Clone)]
pub struct ReportView {
    pub dna: DnaView,
    pub avatar: AvatarView,
    pub drivers: DriversView,
    pub proofs: Vec<ProofView>,
    pub anti_objection: AntiObjectionView,
    pub forensic: ForensicView,
    pub research: ResearchView,
    pub metadata: MetadataView,
}

#[derive(Debug, Clone)]
pub struct DnaView {
    pub formula: String,
    pub triggers: Vec<String>,
    pub language_patterns: Vec<String>,
    pub optimal_timing: String,
}

#[derive(Debug, Clone)]
pub struct AvatarView {
    pub name: String,
    pub wound_count: usize,
    pub wounds: Vec<String>,
    pub dream_count: usize,
    pub dreams: Vec<String>,
    pub demon_count: usize,
    pub demons: Vec<String>,
    pub pain_phrases: Vec<String>,
    pub desire_phrases: Vec<String>,
    pub metaphors: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DriversView {
    pub created: usize,
    pub universal_available: usize,
    pub personalization: String,
    pub drivers: Vec<DriverView>,
}

#[derive(Debug, Clone)]
pub struct DriverView {
    pub title: String,
    pub priority: String,
    pub central_trigger: String,
    pub visceral_definition: String,
    pub opening_question: String,
    pub story_analogy: String,
    pub action_command: String,
    pub anchor_phrases: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ProofView {
    pub name: String,
    pub category: String,
    pub objective: String,
    pub experiment: String,
    pub materials: Vec<String>,
    pub expected_impact: String,
}

#[derive(Debug, Clone)]
pub struct AntiObjectionView {
    pub hidden: Vec<HiddenObjectionView>,
    pub emergency: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct HiddenObjectionView {
    pub kind: String,
    pub objection: String,
    pub typical_profile: String,
    pub counter_attack: String,
}

#[derive(Debug, Clone)]
pub struct ForensicView {
    pub total_arguments: u64,
    pub logical_arguments: u64,
    pub emotional_arguments: u64,
    pub promise_proof_ratio: String,
    pub cialdini: Vec<Bar>,
    pub emotional: Vec<Bar>,
}

/// One horizontal gauge: label, fill percentage, raw value alongside.
#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    pub percent: f32,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct ResearchView {
    pub total_queries: String,
    pub unique_sources: String,
    pub total_content: String,
    pub average_quality: String,
}

#[derive(Debug, Clone)]
pub struct MetadataView {
    pub processing_time: String,
    pub engine: String,
    pub agents_used: String,
    pub persuasion_density: String,
    pub arsenal_complete: String,
    pub session_id: String,
}

const CIALDINI_LABELS: [(&str, &str); 6] = [
    ("RECIPROCIDADE", "reciprocity"),
    ("COMPROMISSO", "commitment"),
    ("PROVA SOCIAL", "social_proof"),
    ("AUTORIDADE", "authority"),
    ("ESCASSEZ", "scarcity"),
    ("AFINIDADE", "affinity"),
];

impl ReportView {
    pub fn build(report: &AnalysisReport) -> Self {
        Self {
            dna: build_dna(report),
            avatar: build_avatar(report),
            drivers: build_drivers(report),
            proofs: build_proofs(report),
            anti_objection: build_anti_objection(report),
            forensic: build_forensic(report),
            research: build_research(report),
            metadata: build_metadata(report),
        }
    }
}

fn build_dna(report: &AnalysisReport) -> DnaView {
    let dna = &report.conversion_dna;
    DnaView {
        formula: dna
            .formula
            .clone()
            .unwrap_or_else(|| DEFAULT_FORMULA.to_string()),
        triggers: dna.trigger_sequence.clone(),
        language_patterns: dna.language_patterns.clone(),
        optimal_timing: dna
            .optimal_timing
            .clone()
            .unwrap_or_else(|| "Análise de timing em andamento".to_string()),
    }
}

fn capped(items: &[String], cap: usize) -> Vec<String> {
    items.iter().take(cap).cloned().collect()
}

fn build_avatar(report: &AnalysisReport) -> AvatarView {
    let avatar = &report.avatar;
    AvatarView {
        name: avatar
            .name
            .clone()
            .unwrap_or_else(|| "Profissional em Transformação".to_string()),
        wound_count: avatar.wounds.len(),
        wounds: capped(&avatar.wounds, MAX_WOUNDS),
        dream_count: avatar.dreams.len(),
        dreams: capped(&avatar.dreams, MAX_DREAMS),
        demon_count: avatar.demons.len(),
        demons: capped(&avatar.demons, MAX_DEMONS),
        pain_phrases: avatar.dialect.pain_phrases.clone(),
        desire_phrases: avatar.dialect.desire_phrases.clone(),
        metaphors: avatar.dialect.metaphors.clone(),
    }
}

fn or_na(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NA.to_string())
}

fn build_drivers(report: &AnalysisReport) -> DriversView {
    let drivers: Vec<DriverView> = report
        .drivers
        .drivers()
        .iter()
        .enumerate()
        .map(|(i, d)| DriverView {
            title: format!(
                "Driver {}: {}",
                i + 1,
                d.name.as_deref().unwrap_or("Driver Mental")
            ),
            priority: d.priority.clone().unwrap_or_else(|| "ALTA".to_string()),
            central_trigger: or_na(&d.central_trigger),
            visceral_definition: or_na(&d.visceral_definition),
            opening_question: or_na(&d.activation_script.opening_question),
            story_analogy: or_na(&d.activation_script.story_analogy),
            action_command: or_na(&d.activation_script.action_command),
            anchor_phrases: d.anchor_phrases.clone(),
        })
        .collect();

    DriversView {
        created: drivers.len(),
        universal_available: 19,
        personalization: "95%".to_string(),
        drivers,
    }
}

fn build_proofs(report: &AnalysisReport) -> Vec<ProofView> {
    report
        .visual_proofs
        .iter()
        .enumerate()
        .map(|(i, p)| ProofView {
            name: p
                .name
                .clone()
                .unwrap_or_else(|| format!("PROVI {}", i + 1)),
            category: p
                .category
                .clone()
                .unwrap_or_else(|| "DEVASTADORA".to_string()),
            objective: or_na(&p.objective),
            experiment: or_na(&p.experiment),
            materials: if p.materials.is_empty() {
                vec!["Materiais não especificados".to_string()]
            } else {
                p.materials.iter().map(material_line).collect()
            },
            expected_impact: p
                .expected_impact
                .clone()
                .unwrap_or_else(|| "ALTO".to_string()),
        })
        .collect()
}

fn material_line(material: &Material) -> String {
    match material {
        Material::Plain(text) => text.clone(),
        Material::Detailed { item, spec } => format!(
            "{}: {}",
            item.as_deref().unwrap_or("Material"),
            spec.as_deref().unwrap_or(NA)
        ),
    }
}

fn build_anti_objection(report: &AnalysisReport) -> AntiObjectionView {
    let system = &report.anti_objection;
    AntiObjectionView {
        hidden: system
            .hidden_objections
            .iter()
            .map(|o| HiddenObjectionView {
                kind: o.kind.clone().unwrap_or_else(|| "Objeção Oculta".to_string()),
                objection: or_na(&o.objection),
                typical_profile: or_na(&o.typical_profile),
                counter_attack: or_na(&o.counter_attack),
            })
            .collect(),
        emergency: system.emergency_arsenal.clone(),
    }
}

fn build_forensic(report: &AnalysisReport) -> ForensicView {
    let metrics = &report.forensic_metrics;
    let density = &metrics.persuasion_density;
    let scores = &metrics.cialdini;

    let cialdini = CIALDINI_LABELS
        .iter()
        .map(|(label, field)| {
            let value = match *field {
                "reciprocity" => scores.reciprocity,
                "commitment" => scores.commitment,
                "social_proof" => scores.social_proof,
                "authority" => scores.authority,
                "scarcity" => scores.scarcity,
                _ => scores.affinity,
            };
            Bar {
                label: label.to_string(),
                percent: ((value * 20.0).min(100.0).max(0.0)) as f32,
                value: if value.fract() == 0.0 {
                    format!("{}", value as i64)
                } else {
                    format!("{}", value)
                },
            }
        })
        .collect();

    let emotional = metrics
        .emotional_intensity
        .iter()
        .map(|(emotion, intensity)| Bar {
            label: emotion.to_uppercase(),
            percent: intensity.percent(),
            value: intensity.label(),
        })
        .collect();

    ForensicView {
        total_arguments: density.total_arguments,
        logical_arguments: density.logical_arguments,
        emotional_arguments: density.emotional_arguments,
        promise_proof_ratio: density
            .promise_proof_ratio
            .clone()
            .unwrap_or_else(|| "1:1".to_string()),
        cialdini,
        emotional,
    }
}

fn build_research(report: &AnalysisReport) -> ResearchView {
    let stats = &report.research.statistics;
    ResearchView {
        total_queries: stats.total_queries.to_string(),
        unique_sources: stats.unique_sources.to_string(),
        total_content: thousands(stats.total_content),
        average_quality: percent1(stats.average_quality),
    }
}

fn build_metadata(report: &AnalysisReport) -> MetadataView {
    let metadata = &report.metadata;
    MetadataView {
        processing_time: or_na(&metadata.processing_time),
        engine: metadata
            .engine
            .clone()
            .unwrap_or_else(|| DEFAULT_ENGINE.to_string()),
        agents_used: metadata
            .agents_used
            .as_ref()
            .map(|a| a.len().to_string())
            .unwrap_or_else(|| "6".to_string()),
        persuasion_density: metadata
            .persuasion_density
            .clone()
            .unwrap_or_else(|| "ALTA".to_string()),
        arsenal_complete: match metadata.arsenal_complete {
            Some(true) => "SIM".to_string(),
            _ => "PARCIAL".to_string(),
        },
        session_id: or_na(&report.session_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnalysisOutcome;
    use serde_json::json;

    fn view_of(payload: serde_json::Value) -> ReportView {
        ReportView::build(&AnalysisOutcome::from_value(payload).report)
    }

    #[test]
    fn empty_report_shows_documented_defaults() {
        let view = view_of(json!({}));
        assert_eq!(view.dna.formula, DEFAULT_FORMULA);
        assert_eq!(view.forensic.total_arguments, 0);
        assert_eq!(view.forensic.promise_proof_ratio, "1:1");
        assert_eq!(view.metadata.processing_time, "N/A");
        assert_eq!(view.metadata.engine, DEFAULT_ENGINE);
        assert_eq!(view.metadata.agents_used, "6");
        assert_eq!(view.metadata.session_id, "N/A");
        assert_eq!(view.research.total_queries, "0");
        assert_eq!(view.research.average_quality, "0.0%");
    }

    #[test]
    fn empty_dna_section_still_gets_default_formula() {
        let view = view_of(json!({"dna_conversao_completo": {}}));
        assert_eq!(view.dna.formula, DEFAULT_FORMULA);
    }

    #[test]
    fn avatar_lists_are_capped_but_counts_are_full() {
        let twenty: Vec<String> = (0..20).map(|i| format!("item {}", i)).collect();
        let view = view_of(json!({
            "avatar_visceral_ultra": {
                "feridas_abertas_inconfessaveis": twenty,
                "sonhos_proibidos_ardentes": twenty,
                "demonios_internos_paralisantes": twenty,
            }
        }));
        assert_eq!(view.avatar.wounds.len(), 15);
        assert_eq!(view.avatar.dreams.len(), 15);
        assert_eq!(view.avatar.demons.len(), 10);
        assert_eq!(view.avatar.wound_count, 20);
        assert_eq!(view.avatar.demon_count, 20);
    }

    #[test]
    fn cialdini_bars_scale_and_cap() {
        let view = view_of(json!({
            "metricas_forenses_objetivas": {
                "gatilhos_cialdini": {"escassez": 4, "autoridade": 9}
            }
        }));
        let by_label = |label: &str| {
            view.forensic
                .cialdini
                .iter()
                .find(|b| b.label == label)
                .unwrap()
                .clone()
        };
        assert_eq!(by_label("ESCASSEZ").percent, 80.0);
        assert_eq!(by_label("AUTORIDADE").percent, 100.0);
        assert_eq!(by_label("RECIPROCIDADE").percent, 0.0);
        assert_eq!(view.forensic.cialdini.len(), 6);
    }

    #[test]
    fn emotional_bars_follow_intensity_parsing() {
        let view = view_of(json!({
            "metricas_forenses_objetivas": {
                "intensidade_emocional": {"medo": "8/10", "raiva": "garbage"}
            }
        }));
        let medo = view
            .forensic
            .emotional
            .iter()
            .find(|b| b.label == "MEDO")
            .unwrap();
        assert_eq!(medo.percent, 80.0);
        let raiva = view
            .forensic
            .emotional
            .iter()
            .find(|b| b.label == "RAIVA")
            .unwrap();
        assert_eq!(raiva.percent, 50.0);
    }

    #[test]
    fn proofs_default_name_and_materials() {
        let view = view_of(json!({
            "provas_visuais_sugeridas": [{}]
        }));
        assert_eq!(view.proofs[0].name, "PROVI 1");
        assert_eq!(view.proofs[0].category, "DEVASTADORA");
        assert_eq!(view.proofs[0].materials, vec!["Materiais não especificados"]);
    }

    #[test]
    fn driver_titles_are_numbered() {
        let view = view_of(json!({
            "drivers_mentais_customizados": [
                {"nome": "Diagnóstico Brutal"},
                {}
            ]
        }));
        assert_eq!(view.drivers.created, 2);
        assert_eq!(view.drivers.drivers[0].title, "Driver 1: Diagnóstico Brutal");
        assert_eq!(view.drivers.drivers[1].title, "Driver 2: Driver Mental");
    }

    #[test]
    fn research_formats_content_and_quality() {
        let view = view_of(json!({
            "pesquisa_web_massiva": {
                "estatisticas": {
                    "total_queries": 42,
                    "fontes_unicas": 17,
                    "total_conteudo": 1234567,
                    "qualidade_media": 93.44
                }
            }
        }));
        assert_eq!(view.research.total_queries, "42");
        assert_eq!(view.research.total_content, "1.234.567");
        assert_eq!(view.research.average_quality, "93.4%");
    }
}
