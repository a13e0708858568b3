// src/api/mod.rs
use reqwest::multipart;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::model::capabilities::{AppStatus, CapabilitiesResponse};
use crate::model::upload::{mime_for, RemoveResponse, UploadResponse, UploadedFile};
use crate::model::AnalysisRequest;
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx with (when present) the backend's own message field.
    #[error("{message}")]
    Backend {
        status: StatusCode,
        message: String,
    },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Thin client over the analysis backend. One call per operation, no
/// retries, no client-side cancellation.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if settings.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(settings.request_timeout_secs));
        }
        Ok(Self {
            http: builder.build()?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /api/analyze_ultra_enhanced`. Returns the raw payload; typing
    /// happens at the model boundary so export can resend it untouched.
    pub async fn analyze(&self, request: &AnalysisRequest) -> ApiResult<Value> {
        let response = self
            .http
            .post(self.url("/api/analyze_ultra_enhanced"))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            return Err(ApiError::Backend {
                status,
                message: envelope_message(&body, "Erro na análise"),
            });
        }
        Ok(response.json().await?)
    }

    pub async fn agent_capabilities(&self) -> ApiResult<CapabilitiesResponse> {
        let response = self
            .http
            .get(self.url("/api/get_agent_capabilities"))
            .send()
            .await?;
        Ok(response.json().await?)
    }

    pub async fn app_status(&self) -> ApiResult<AppStatus> {
        let response = self.http.get(self.url("/api/app_status")).send().await?;
        Ok(response.json().await?)
    }

    /// `POST /api/generate_pdf` with the raw analysis payload; returns the
    /// rendered document bytes.
    pub async fn generate_pdf(&self, analysis: &Value) -> ApiResult<Vec<u8>> {
        let response = self
            .http
            .post(self.url("/api/generate_pdf"))
            .json(analysis)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Backend {
                status,
                message: "Erro ao gerar PDF".to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// One multipart request per file: the content plus the session token.
    pub async fn upload_attachment(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        session_id: &str,
    ) -> ApiResult<UploadedFile> {
        let size = bytes.len() as u64;
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_for(file_name))
            .map_err(ApiError::Transport)?;
        let form = multipart::Form::new()
            .part("file", part)
            .text("session_id", session_id.to_string());

        let response = self
            .http
            .post(self.url("/api/upload_attachment"))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body: UploadResponse = response.json().await?;
        if !body.success {
            return Err(ApiError::Backend {
                status,
                message: body.error.unwrap_or_else(|| "Erro no upload".to_string()),
            });
        }
        Ok(UploadedFile {
            file_id: body.file_id.unwrap_or_default(),
            name: body.file_name.unwrap_or_else(|| file_name.to_string()),
            size: body.file_size.unwrap_or(size),
        })
    }

    pub async fn remove_attachment(&self, file_id: &str) -> ApiResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/remove_attachment/{}", file_id)))
            .send()
            .await?;

        let status = response.status();
        let body: RemoveResponse = response.json().await?;
        if !body.success {
            return Err(ApiError::Backend {
                status,
                message: body
                    .error
                    .unwrap_or_else(|| "Erro ao remover arquivo".to_string()),
            });
        }
        Ok(())
    }
}

fn envelope_message(body: &Value, fallback: &str) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_message_prefers_backend_text() {
        let body = json!({"message": "Segmento inválido"});
        assert_eq!(envelope_message(&body, "Erro na análise"), "Segmento inválido");
    }

    #[test]
    fn envelope_message_falls_back_when_absent_or_empty() {
        assert_eq!(envelope_message(&json!({}), "Erro na análise"), "Erro na análise");
        assert_eq!(
            envelope_message(&json!({"message": ""}), "Erro na análise"),
            "Erro na análise"
        );
        assert_eq!(envelope_message(&Value::Null, "Erro na análise"), "Erro na análise");
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let settings = Settings {
            base_url: "http://localhost:5000/".to_string(),
            request_timeout_secs: 0,
        };
        let client = ApiClient::new(&settings).unwrap();
        assert_eq!(
            client.url("/api/app_status"),
            "http://localhost:5000/api/app_status"
        );
    }
}
