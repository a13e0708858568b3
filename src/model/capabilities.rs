// src/model/capabilities.rs
use serde::Deserialize;
use std::collections::BTreeMap;

/// `GET /api/get_agent_capabilities` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CapabilitiesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub agents: BTreeMap<String, AgentCapability>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentCapability {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mission: String,
    #[serde(default)]
    pub specialties: Vec<String>,
}

/// `GET /api/app_status` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppStatus {
    #[serde(default)]
    pub services: Services,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Services {
    #[serde(default)]
    pub search_providers: ProviderCount,
    // Older backends omit this block; treat it as one provider available.
    #[serde(default)]
    pub ai_providers: Option<ProviderCount>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderCount {
    #[serde(default)]
    pub available: i64,
}

impl AppStatus {
    pub fn search_available(&self) -> i64 {
        self.services.search_providers.available
    }

    pub fn ai_available(&self) -> i64 {
        self.services
            .ai_providers
            .as_ref()
            .map(|p| p.available)
            .unwrap_or(1)
    }

    pub fn is_online(&self) -> bool {
        self.search_available() > 0 && self.ai_available() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_ai_block_counts_as_one_provider() {
        let status: AppStatus = serde_json::from_value(serde_json::json!({
            "services": {"search_providers": {"available": 3}}
        }))
        .unwrap();
        assert_eq!(status.search_available(), 3);
        assert_eq!(status.ai_available(), 1);
        assert!(status.is_online());
    }

    #[test]
    fn zero_search_providers_is_degraded() {
        let status: AppStatus = serde_json::from_value(serde_json::json!({
            "services": {
                "search_providers": {"available": 0},
                "ai_providers": {"available": 2}
            }
        }))
        .unwrap();
        assert!(!status.is_online());
    }
}
