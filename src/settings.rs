// src/settings.rs
use anyhow::Result;
use serde::Deserialize;

/// Client settings, layered: built-in defaults, then an optional
/// `arqv.toml` next to the binary, then `ARQV_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub base_url: String,
    /// 0 leaves the transport's own default in place (no client timeout).
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: 0,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let defaults = Settings::default();
        let settings = config::Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("request_timeout_secs", defaults.request_timeout_secs)?
            .add_source(config::File::with_name("arqv").required(false))
            .add_source(config::Environment::with_prefix("ARQV"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let settings = Settings::default();
        assert_eq!(settings.base_url, "http://127.0.0.1:5000");
        assert_eq!(settings.request_timeout_secs, 0);
    }

    #[test]
    fn load_without_file_or_env_yields_defaults() {
        let settings = Settings::load().unwrap();
        assert_eq!(settings.base_url, Settings::default().base_url);
    }
}
