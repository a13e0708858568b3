// src/tasks.rs
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use uuid::Uuid;

use crate::api::ApiClient;
use crate::model::capabilities::{AppStatus, CapabilitiesResponse};
use crate::model::{AnalysisRequest, UploadedFile};

/// Completed background work, delivered to the frame loop. Errors arrive as
/// display strings; the taxonomy was already applied at the API layer.
#[derive(Debug)]
pub enum TaskOutcome {
    Analysis(Result<Value, String>),
    Capabilities(Result<CapabilitiesResponse, String>),
    Status(Result<AppStatus, String>),
    Pdf(Result<PathBuf, String>),
    Upload {
        row_id: Uuid,
        file_name: String,
        result: Result<UploadedFile, String>,
    },
    Removed {
        file_id: String,
        result: Result<(), String>,
    },
}

/// Tokio runtime owned by the app plus the channel its workers report on.
/// The GUI thread never blocks: it spawns here and drains `poll` each frame.
pub struct Tasks {
    runtime: tokio::runtime::Runtime,
    tx: Sender<TaskOutcome>,
    rx: Receiver<TaskOutcome>,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("Failed to create tokio runtime")?;
        let (tx, rx) = channel();
        Ok(Self { runtime, tx, rx })
    }

    pub fn poll(&self) -> Vec<TaskOutcome> {
        self.rx.try_iter().collect()
    }

    pub fn spawn_analysis(&self, api: ApiClient, request: AnalysisRequest) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = api.analyze(&request).await.map_err(|e| e.to_string());
            let _ = tx.send(TaskOutcome::Analysis(result));
        });
    }

    pub fn spawn_capabilities(&self, api: ApiClient) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = api.agent_capabilities().await.map_err(|e| e.to_string());
            let _ = tx.send(TaskOutcome::Capabilities(result));
        });
    }

    pub fn spawn_status(&self, api: ApiClient) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = api.app_status().await.map_err(|e| e.to_string());
            let _ = tx.send(TaskOutcome::Status(result));
        });
    }

    /// Render the cached analysis to PDF and write it where the user chose.
    pub fn spawn_pdf(&self, api: ApiClient, analysis: Value, path: PathBuf) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = async {
                let bytes = api.generate_pdf(&analysis).await.map_err(|e| e.to_string())?;
                tokio::fs::write(&path, bytes)
                    .await
                    .map_err(|e| e.to_string())?;
                Ok(path)
            }
            .await;
            let _ = tx.send(TaskOutcome::Pdf(result));
        });
    }

    /// One independent transfer per file; siblings neither queue nor wait.
    pub fn spawn_upload(
        &self,
        api: ApiClient,
        row_id: Uuid,
        path: PathBuf,
        file_name: String,
        session_id: String,
    ) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = async {
                let bytes = tokio::fs::read(&path).await.map_err(|e| e.to_string())?;
                api.upload_attachment(&file_name, bytes, &session_id)
                    .await
                    .map_err(|e| e.to_string())
            }
            .await;
            let _ = tx.send(TaskOutcome::Upload {
                row_id,
                file_name,
                result,
            });
        });
    }

    pub fn spawn_remove(&self, api: ApiClient, file_id: String) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = api
                .remove_attachment(&file_id)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(TaskOutcome::Removed { file_id, result });
        });
    }
}
