// src/model/report.rs
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Typed view of the backend's loosely-structured analysis payload.
///
/// The browser client walked the raw JSON with `a.b || a.c || {}` fallback
/// chains at every render site. Here all legacy key variants are mapped to
/// one canonical shape in a single pass right after parsing: per section,
/// the first key present wins, and a missing or malformed section falls
/// back to its empty default without dragging the rest of the report down.
/// The raw `Value` is kept alongside in `AnalysisOutcome` because export
/// and PDF generation resend the payload untouched, unknown fields included.
#[derive(Debug, Clone, Default)]
pub struct AnalysisReport {
    pub conversion_dna: ConversionDna,
    pub avatar: VisceralAvatar,
    pub drivers: DriverArsenal,
    pub visual_proofs: Vec<VisualProof>,
    pub anti_objection: AntiObjectionSystem,
    pub forensic_metrics: ForensicMetrics,
    pub research: WebResearch,
    pub metadata: ReportMetadata,
    pub session_id: Option<String>,
}

impl AnalysisReport {
    pub fn from_value(raw: &Value) -> Self {
        Self {
            conversion_dna: section(raw, &["dna_conversao_completo"]),
            avatar: section(raw, &["avatar_visceral_ultra", "avatar_ultra_detalhado"]),
            drivers: section(
                raw,
                &[
                    "drivers_mentais_arsenal_completo",
                    "drivers_mentais_customizados",
                ],
            ),
            visual_proofs: section(
                raw,
                &[
                    "provas_visuais_arsenal_completo",
                    "provas_visuais_sugeridas",
                ],
            ),
            anti_objection: section(
                raw,
                &["sistema_anti_objecao_ultra", "sistema_anti_objecao"],
            ),
            forensic_metrics: section(
                raw,
                &[
                    "metricas_forenses_objetivas",
                    "metricas_forenses_detalhadas",
                ],
            ),
            research: section(raw, &["pesquisa_web_massiva"]),
            metadata: section(raw, &["metadata_ultra_enhanced", "metadata"]),
            session_id: raw
                .get("session_id")
                .and_then(Value::as_str)
                .map(String::from),
        }
    }
}

fn section<T: Default + DeserializeOwned>(raw: &Value, keys: &[&str]) -> T {
    keys.iter()
        .find_map(|key| raw.get(key))
        .map(|value| serde_json::from_value(value.clone()).unwrap_or_default())
        .unwrap_or_default()
}

/// Parsed report plus the untouched wire payload.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub raw: Value,
    pub report: AnalysisReport,
}

impl AnalysisOutcome {
    pub fn from_value(raw: Value) -> Self {
        let report = AnalysisReport::from_value(&raw);
        Self { raw, report }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConversionDna {
    #[serde(rename = "formula_estrutural", default)]
    pub formula: Option<String>,
    #[serde(rename = "sequencia_gatilhos", default)]
    pub trigger_sequence: Vec<String>,
    #[serde(rename = "padroes_linguagem", default)]
    pub language_patterns: Vec<String>,
    #[serde(rename = "timing_otimo", default)]
    pub optimal_timing: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisceralAvatar {
    #[serde(rename = "nome_ficticio", default)]
    pub name: Option<String>,
    #[serde(rename = "feridas_abertas_inconfessaveis", default)]
    pub wounds: Vec<String>,
    #[serde(rename = "sonhos_proibidos_ardentes", default)]
    pub dreams: Vec<String>,
    #[serde(rename = "demonios_internos_paralisantes", default)]
    pub demons: Vec<String>,
    #[serde(rename = "dialeto_alma_linguagem_interna", default)]
    pub dialect: SoulDialect,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SoulDialect {
    #[serde(rename = "frases_tipicas_dores", default)]
    pub pain_phrases: Vec<String>,
    #[serde(rename = "frases_tipicas_desejos", default)]
    pub desire_phrases: Vec<String>,
    #[serde(rename = "metaforas_comuns_vida", default)]
    pub metaphors: Vec<String>,
}

/// The driver arsenal arrives either as a bare array or wrapped in an
/// object under `drivers_customizados`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DriverArsenal {
    List(Vec<MentalDriver>),
    Wrapped {
        #[serde(default)]
        drivers_customizados: Vec<MentalDriver>,
    },
}

impl Default for DriverArsenal {
    fn default() -> Self {
        DriverArsenal::List(Vec::new())
    }
}

impl DriverArsenal {
    pub fn drivers(&self) -> &[MentalDriver] {
        match self {
            DriverArsenal::List(drivers) => drivers,
            DriverArsenal::Wrapped {
                drivers_customizados,
            } => drivers_customizados,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MentalDriver {
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(rename = "prioridade", default)]
    pub priority: Option<String>,
    #[serde(rename = "gatilho_central", default)]
    pub central_trigger: Option<String>,
    #[serde(rename = "definicao_visceral", default)]
    pub visceral_definition: Option<String>,
    #[serde(rename = "roteiro_ativacao", default)]
    pub activation_script: ActivationScript,
    #[serde(rename = "frases_ancoragem", default)]
    pub anchor_phrases: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivationScript {
    #[serde(rename = "pergunta_abertura", default)]
    pub opening_question: Option<String>,
    #[serde(rename = "historia_analogia", default)]
    pub story_analogy: Option<String>,
    #[serde(rename = "comando_acao", default)]
    pub action_command: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisualProof {
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    #[serde(
        rename = "objetivo_psicologico",
        alias = "conceito_alvo",
        default
    )]
    pub objective: Option<String>,
    #[serde(
        rename = "experimento_escolhido",
        alias = "experimento",
        default
    )]
    pub experiment: Option<String>,
    #[serde(rename = "materiais_especificos", alias = "materiais", default)]
    pub materials: Vec<Material>,
    #[serde(rename = "impacto_esperado", default)]
    pub expected_impact: Option<String>,
}

/// Materials come as plain strings or as `{item|nome, especificacao|descricao}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Material {
    Plain(String),
    Detailed {
        #[serde(rename = "item", alias = "nome", default)]
        item: Option<String>,
        #[serde(rename = "especificacao", alias = "descricao", default)]
        spec: Option<String>,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AntiObjectionSystem {
    #[serde(rename = "objecoes_ocultas", default)]
    pub hidden_objections: Vec<HiddenObjection>,
    #[serde(rename = "arsenal_emergencia", default)]
    pub emergency_arsenal: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HiddenObjection {
    #[serde(rename = "tipo", default)]
    pub kind: Option<String>,
    #[serde(rename = "objecao_oculta", default)]
    pub objection: Option<String>,
    #[serde(rename = "perfil_tipico", default)]
    pub typical_profile: Option<String>,
    #[serde(rename = "contra_ataque", default)]
    pub counter_attack: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForensicMetrics {
    #[serde(rename = "densidade_persuasiva", default)]
    pub persuasion_density: PersuasionDensity,
    #[serde(rename = "gatilhos_cialdini", default)]
    pub cialdini: CialdiniScores,
    #[serde(rename = "intensidade_emocional", default)]
    pub emotional_intensity: BTreeMap<String, Intensity>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersuasionDensity {
    #[serde(rename = "argumentos_totais", default)]
    pub total_arguments: u64,
    #[serde(rename = "argumentos_logicos", default)]
    pub logical_arguments: u64,
    #[serde(rename = "argumentos_emocionais", default)]
    pub emotional_arguments: u64,
    #[serde(rename = "ratio_promessa_prova", default)]
    pub promise_proof_ratio: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CialdiniScores {
    #[serde(rename = "reciprocidade", default)]
    pub reciprocity: f64,
    #[serde(rename = "compromisso", default)]
    pub commitment: f64,
    #[serde(rename = "prova_social", default)]
    pub social_proof: f64,
    #[serde(rename = "autoridade", default)]
    pub authority: f64,
    #[serde(rename = "escassez", default)]
    pub scarcity: f64,
    #[serde(rename = "afinidade", default)]
    pub affinity: f64,
}

/// Free-form intensity: a bare number or a `"x/10"` style string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Intensity {
    Number(f64),
    Text(String),
}

impl Intensity {
    /// Bar width in percent. `"8/10"` -> 80, `7` -> 70, malformed -> 50.
    pub fn percent(&self) -> f32 {
        let scale = match self {
            Intensity::Number(n) => Some(n.trunc()),
            Intensity::Text(s) => {
                let head = s.split('/').next().unwrap_or("").trim();
                head.parse::<f64>().ok().map(f64::trunc)
            }
        };
        match scale {
            Some(v) => (v * 10.0).clamp(0.0, 100.0) as f32,
            None => 50.0,
        }
    }

    /// Raw value as displayed next to the bar.
    pub fn label(&self) -> String {
        match self {
            Intensity::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            Intensity::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebResearch {
    #[serde(rename = "estatisticas", default)]
    pub statistics: ResearchStatistics,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResearchStatistics {
    #[serde(rename = "total_queries", default)]
    pub total_queries: u64,
    #[serde(rename = "fontes_unicas", default)]
    pub unique_sources: u64,
    #[serde(rename = "total_conteudo", default)]
    pub total_content: u64,
    #[serde(rename = "qualidade_media", default)]
    pub average_quality: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportMetadata {
    #[serde(rename = "processing_time_formatted", default)]
    pub processing_time: Option<String>,
    #[serde(rename = "analysis_engine", default)]
    pub engine: Option<String>,
    #[serde(rename = "agentes_psicologicos_utilizados", default)]
    pub agents_used: Option<Vec<String>>,
    #[serde(rename = "densidade_persuasiva", default)]
    pub persuasion_density: Option<String>,
    #[serde(rename = "arsenal_completo", default)]
    pub arsenal_complete: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_payload_deserializes_to_defaults() {
        let outcome = AnalysisOutcome::from_value(json!({}));
        let report = &outcome.report;
        assert!(report.conversion_dna.formula.is_none());
        assert!(report.avatar.wounds.is_empty());
        assert!(report.drivers.drivers().is_empty());
        assert!(report.visual_proofs.is_empty());
        assert_eq!(report.forensic_metrics.persuasion_density.total_arguments, 0);
        assert!(report.session_id.is_none());
    }

    #[test]
    fn malformed_payload_falls_back_to_defaults() {
        let outcome = AnalysisOutcome::from_value(json!([1, 2, 3]));
        assert!(outcome.report.avatar.dreams.is_empty());
        assert_eq!(outcome.raw, json!([1, 2, 3]));
    }

    #[test]
    fn one_bad_section_does_not_sink_the_others() {
        let outcome = AnalysisOutcome::from_value(json!({
            "dna_conversao_completo": "not an object",
            "avatar_visceral_ultra": {"nome_ficticio": "Ana"}
        }));
        assert!(outcome.report.conversion_dna.formula.is_none());
        assert_eq!(outcome.report.avatar.name.as_deref(), Some("Ana"));
    }

    #[test]
    fn legacy_avatar_key_is_canonicalized() {
        let outcome = AnalysisOutcome::from_value(json!({
            "avatar_ultra_detalhado": {
                "nome_ficticio": "Carlos",
                "feridas_abertas_inconfessaveis": ["medo de falhar"]
            }
        }));
        assert_eq!(outcome.report.avatar.name.as_deref(), Some("Carlos"));
        assert_eq!(outcome.report.avatar.wounds.len(), 1);
    }

    #[test]
    fn drivers_accept_bare_array_and_wrapped_object() {
        let bare = AnalysisOutcome::from_value(json!({
            "drivers_mentais_customizados": [{"nome": "Diagnóstico Brutal"}]
        }));
        assert_eq!(bare.report.drivers.drivers().len(), 1);

        let wrapped = AnalysisOutcome::from_value(json!({
            "drivers_mentais_arsenal_completo": {
                "drivers_customizados": [{"nome": "A"}, {"nome": "B"}]
            }
        }));
        assert_eq!(wrapped.report.drivers.drivers().len(), 2);
        assert_eq!(
            wrapped.report.drivers.drivers()[1].name.as_deref(),
            Some("B")
        );
    }

    #[test]
    fn materials_accept_both_shapes() {
        let outcome = AnalysisOutcome::from_value(json!({
            "provas_visuais_sugeridas": [
                {"nome": "P1", "materiais": ["corda", "balde"]},
                {"nome": "P2", "materiais_especificos": [
                    {"nome": "ímã", "descricao": "neodímio 5cm"}
                ]}
            ]
        }));
        let proofs = &outcome.report.visual_proofs;
        assert_eq!(proofs.len(), 2);
        assert!(matches!(proofs[0].materials[0], Material::Plain(_)));
        match &proofs[1].materials[0] {
            Material::Detailed { item, spec } => {
                assert_eq!(item.as_deref(), Some("ímã"));
                assert_eq!(spec.as_deref(), Some("neodímio 5cm"));
            }
            other => panic!("expected detailed material, got {:?}", other),
        }
    }

    #[test]
    fn intensity_parses_fraction_number_and_garbage() {
        assert_eq!(Intensity::Text("8/10".into()).percent(), 80.0);
        assert_eq!(Intensity::Number(7.0).percent(), 70.0);
        assert_eq!(Intensity::Text("garbage".into()).percent(), 50.0);
        assert_eq!(Intensity::Text(" 9 / 10".into()).percent(), 90.0);
        assert_eq!(Intensity::Number(15.0).percent(), 100.0);
    }

    #[test]
    fn intensity_from_json_payload() {
        let outcome = AnalysisOutcome::from_value(json!({
            "metricas_forenses_detalhadas": {
                "intensidade_emocional": {"medo": "8/10", "desejo": 7, "culpa": "???"}
            }
        }));
        let intensity = &outcome.report.forensic_metrics.emotional_intensity;
        assert_eq!(intensity["medo"].percent(), 80.0);
        assert_eq!(intensity["desejo"].percent(), 70.0);
        assert_eq!(intensity["culpa"].percent(), 50.0);
    }

    #[test]
    fn cialdini_missing_triggers_default_to_zero() {
        let outcome = AnalysisOutcome::from_value(json!({
            "metricas_forenses_objetivas": {"gatilhos_cialdini": {"escassez": 4}}
        }));
        let cialdini = &outcome.report.forensic_metrics.cialdini;
        assert_eq!(cialdini.scarcity, 4.0);
        assert_eq!(cialdini.reciprocity, 0.0);
    }
}
