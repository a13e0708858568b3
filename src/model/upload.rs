// src/model/upload.rs
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024; // 50MB

// Extension/MIME pairs accepted by the backend.
const ALLOWED_TYPES: [(&str, &str); 10] = [
    ("pdf", "application/pdf"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("doc", "application/msword"),
    ("txt", "text/plain"),
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("Arquivo \"{0}\" é muito grande. Máximo: 50MB")]
    TooLarge(String),
    #[error("Tipo de arquivo \"{0}\" não permitido")]
    DisallowedType(String),
}

/// Gate-keeping before any network call; rejecting one file never affects
/// its siblings.
pub fn validate_file(name: &str, size: u64) -> Result<(), UploadRejection> {
    if size > MAX_FILE_SIZE {
        return Err(UploadRejection::TooLarge(name.to_string()));
    }
    let ext = extension_of(name);
    if !ALLOWED_TYPES.iter().any(|(e, _)| *e == ext) {
        return Err(UploadRejection::DisallowedType(format!(".{}", ext)));
    }
    Ok(())
}

pub fn mime_for(name: &str) -> &'static str {
    let ext = extension_of(name);
    ALLOWED_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or("application/octet-stream")
}

fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

pub fn picker_extensions() -> Vec<&'static str> {
    ALLOWED_TYPES.iter().map(|(e, _)| *e).collect()
}

/// 1024-based size with two decimals, as the web client showed it.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exp = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exp = exp.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exp as i32);
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{} {}", rounded as u64, UNITS[exp])
    } else {
        format!("{} {}", rounded, UNITS[exp])
    }
}

/// Backend-confirmed attachment, shown in the uploaded list.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_id: String,
    pub name: String,
    pub size: u64,
}

/// `POST /api/upload_attachment` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub file_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `DELETE /api/remove_attachment/{id}` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_file_is_rejected() {
        let result = validate_file("dossie.pdf", 51 * 1024 * 1024);
        assert_eq!(result, Err(UploadRejection::TooLarge("dossie.pdf".into())));
    }

    #[test]
    fn executable_is_rejected() {
        let result = validate_file("setup.exe", 1024);
        assert_eq!(
            result,
            Err(UploadRejection::DisallowedType(".exe".into()))
        );
    }

    #[test]
    fn ten_mib_pdf_passes() {
        assert_eq!(validate_file("relatorio.pdf", 10 * 1024 * 1024), Ok(()));
    }

    #[test]
    fn exactly_at_ceiling_passes() {
        assert_eq!(validate_file("a.txt", MAX_FILE_SIZE), Ok(()));
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert_eq!(validate_file("FOTO.JPG", 10), Ok(()));
        assert_eq!(mime_for("FOTO.JPG"), "image/jpeg");
    }

    #[test]
    fn missing_extension_is_rejected() {
        assert_eq!(
            validate_file("README", 10),
            Err(UploadRejection::DisallowedType(".".into()))
        );
    }

    #[test]
    fn size_formatting() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(10 * 1024 * 1024), "10 MB");
    }
}
