// src/model/request.rs
use serde::Serialize;
use thiserror::Error;

/// Raw form fields as typed into the UI. Numbers stay text until submit,
/// mirroring the free-form inputs of the web form.
#[derive(Debug, Clone, Default)]
pub struct AnalysisForm {
    pub segment: String,
    pub product: String,
    pub audience: String,
    pub price: String,
    pub revenue_goal: String,
    pub marketing_budget: String,
    pub launch_deadline: String,
    pub competitors: String,
    pub query: String,
    pub notes: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Segmento é obrigatório para análise arqueológica")]
    SegmentMissing,
    #[error("Segmento deve ter pelo menos 3 caracteres")]
    SegmentTooShort,
}

/// One analysis submission, serialized with the backend's wire keys.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    #[serde(rename = "segmento")]
    pub segment: String,
    #[serde(rename = "produto")]
    pub product: String,
    #[serde(rename = "publico")]
    pub audience: String,
    #[serde(rename = "preco")]
    pub price: Option<f64>,
    #[serde(rename = "objetivo_receita")]
    pub revenue_goal: Option<f64>,
    #[serde(rename = "orcamento_marketing")]
    pub marketing_budget: Option<f64>,
    #[serde(rename = "prazo_lancamento")]
    pub launch_deadline: String,
    #[serde(rename = "concorrentes")]
    pub competitors: String,
    pub query: String,
    #[serde(rename = "dados_adicionais")]
    pub notes: String,
    pub session_id: String,
}

impl AnalysisForm {
    pub fn validate(&self) -> Result<(), FormError> {
        let segment = self.segment.trim();
        if segment.is_empty() {
            return Err(FormError::SegmentMissing);
        }
        if segment.chars().count() < 3 {
            return Err(FormError::SegmentTooShort);
        }
        Ok(())
    }

    /// Build the request for one submission. Validation must have passed.
    pub fn to_request(&self, session_id: String) -> AnalysisRequest {
        let segment = self.segment.trim().to_string();
        let query = {
            let typed = self.query.trim();
            if typed.is_empty() {
                auto_query(&segment)
            } else {
                typed.to_string()
            }
        };

        AnalysisRequest {
            segment,
            product: self.product.trim().to_string(),
            audience: self.audience.trim().to_string(),
            price: parse_amount(&self.price),
            revenue_goal: parse_amount(&self.revenue_goal),
            marketing_budget: parse_amount(&self.marketing_budget),
            launch_deadline: self.launch_deadline.trim().to_string(),
            competitors: self.competitors.trim().to_string(),
            query,
            notes: self.notes.trim().to_string(),
            session_id,
        }
    }
}

fn auto_query(segment: &str) -> String {
    format!(
        "mercado {} Brasil 2024 tendências oportunidades análise",
        segment
    )
}

// Lenient like the original form: anything unparseable becomes null.
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_segment(segment: &str) -> AnalysisForm {
        AnalysisForm {
            segment: segment.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_segment_is_rejected() {
        assert_eq!(
            form_with_segment("   ").validate(),
            Err(FormError::SegmentMissing)
        );
    }

    #[test]
    fn two_char_segment_is_rejected() {
        assert_eq!(
            form_with_segment("ai").validate(),
            Err(FormError::SegmentTooShort)
        );
        assert_eq!(form_with_segment(" ai ").validate(), Err(FormError::SegmentTooShort));
    }

    #[test]
    fn three_char_segment_passes() {
        assert_eq!(form_with_segment("fit").validate(), Ok(()));
    }

    #[test]
    fn blank_query_is_derived_from_segment() {
        let request = form_with_segment("fitness").to_request("enhanced_1_abc".into());
        assert!(request.query.contains("fitness"));
        assert_eq!(
            request.query,
            "mercado fitness Brasil 2024 tendências oportunidades análise"
        );
    }

    #[test]
    fn typed_query_is_kept_verbatim() {
        let mut form = form_with_segment("fitness");
        form.query = "academias low cost".to_string();
        let request = form.to_request("enhanced_1_abc".into());
        assert_eq!(request.query, "academias low cost");
    }

    #[test]
    fn amounts_parse_leniently() {
        assert_eq!(parse_amount("1997.50"), Some(1997.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("R$ 100"), None);
    }

    #[test]
    fn wire_keys_are_the_backend_names() {
        let mut form = form_with_segment("fitness");
        form.price = "97".to_string();
        let request = form.to_request("enhanced_1_abc".into());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["segmento"], "fitness");
        assert_eq!(value["preco"], 97.0);
        assert_eq!(value["session_id"], "enhanced_1_abc");
        assert!(value.get("segment").is_none());
    }
}
