// src/export.rs
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Exports default to the user's download directory, like the browser did.
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn json_file_name() -> String {
    format!(
        "analise_arqueologica_{}.json",
        chrono::Utc::now().timestamp_millis()
    )
}

pub fn pdf_file_name() -> String {
    format!(
        "analise_arqueologica_{}.pdf",
        chrono::Utc::now().timestamp_millis()
    )
}

/// Pretty-printed dump of the raw analysis payload.
pub fn save_json(analysis: &Value, path: &Path) -> Result<()> {
    let pretty = serde_json::to_string_pretty(analysis)?;
    fs::write(path, pretty)
        .with_context(|| format!("Falha ao escrever {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn file_names_are_timestamped() {
        let name = json_file_name();
        assert!(name.starts_with("analise_arqueologica_"));
        assert!(name.ends_with(".json"));
        assert!(pdf_file_name().ends_with(".pdf"));
    }

    #[test]
    fn save_json_round_trips() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("arqv_test_{}.json", std::process::id()));
        let payload = json!({"dna_conversao_completo": {"formula_estrutural": "A → B"}});

        save_json(&payload, &path).unwrap();
        let read_back: Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(read_back, payload);
        let _ = fs::remove_file(&path);
    }
}
