// src/state/mod.rs
use serde_json::Value;
use std::time::Instant;
use thiserror::Error;

use crate::model::capabilities::{AppStatus, CapabilitiesResponse};
use crate::model::{AnalysisForm, AnalysisOutcome, AnalysisRequest, FormError};
use crate::notify::Notifications;
use crate::progress::ProgressSim;
use crate::session::SessionIds;
use crate::state::upload::UploadState;
use crate::view::ReportView;

pub mod upload;

/// Avatar card tabs; exactly one active at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AvatarTab {
    Wounds,
    Dreams,
    Demons,
    Dialect,
}

/// Analysis request lifecycle. Replaces the ambient `isAnalyzing` flag of
/// the web client with one explicit field; re-entrant submits bounce off
/// `InFlight` without touching the network.
#[derive(Debug)]
pub enum AnalysisPhase {
    Idle,
    InFlight { sim: ProgressSim },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Análise já em andamento")]
    AlreadyRunning,
    #[error("{0}")]
    Invalid(#[from] FormError),
}

// Core application state
pub struct AppState {
    // Analysis lifecycle
    pub form: AnalysisForm,
    pub phase: AnalysisPhase,
    pub current: Option<AnalysisOutcome>,
    pub report_view: Option<ReportView>,

    // Upload lifecycle
    pub uploads: UploadState,

    // Shared services
    pub notifications: Notifications,
    pub session_ids: SessionIds,

    // Backend-reported context
    pub capabilities: Option<CapabilitiesResponse>,
    pub status: Option<AppStatus>,

    // Minimal UI state
    pub avatar_tab: AvatarTab,
    pub show_capabilities: bool,
    pub focus_segment: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            form: AnalysisForm::default(),
            phase: AnalysisPhase::Idle,
            current: None,
            report_view: None,
            uploads: UploadState::new(),
            notifications: Notifications::new(),
            session_ids: SessionIds::new(),
            capabilities: None,
            status: None,
            avatar_tab: AvatarTab::Wounds,
            show_capabilities: false,
            focus_segment: false,
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.phase, AnalysisPhase::InFlight { .. })
    }

    /// Validate the form and flip to `InFlight`, handing back the request
    /// to be spawned. No network call happens here, and none may happen
    /// when this returns an error.
    pub fn try_begin_analysis(&mut self, now: Instant) -> Result<AnalysisRequest, SubmitError> {
        if self.is_analyzing() {
            return Err(SubmitError::AlreadyRunning);
        }
        self.form.validate()?;

        let request = self.form.to_request(self.session_ids.submission_id());
        self.phase = AnalysisPhase::InFlight {
            sim: ProgressSim::start(now),
        };
        Ok(request)
    }

    pub fn complete_analysis(&mut self, raw: Value) {
        if let AnalysisPhase::InFlight { sim } = &mut self.phase {
            sim.finish();
        }
        let outcome = AnalysisOutcome::from_value(raw);
        self.report_view = Some(ReportView::build(&outcome.report));
        self.current = Some(outcome);
        self.avatar_tab = AvatarTab::Wounds;
        self.phase = AnalysisPhase::Idle;
        self.notifications
            .success("Análise arqueológica concluída com sucesso!");
    }

    /// Any failure path: simulator stops, the form comes back, nothing is
    /// retried and the submission id is discarded with the request.
    pub fn fail_analysis(&mut self, message: &str) {
        self.phase = AnalysisPhase::Idle;
        self.notifications
            .error(format!("Erro na análise: {}", message));
    }

    /// "Nova Análise": back to a pristine form, like the page reload the
    /// web client performed.
    pub fn reset_for_new_analysis(&mut self) {
        self.form = AnalysisForm::default();
        self.current = None;
        self.report_view = None;
        self.uploads.clear();
        self.phase = AnalysisPhase::Idle;
        self.focus_segment = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FormError;

    fn state_with_segment(segment: &str) -> AppState {
        let mut state = AppState::new();
        state.form.segment = segment.to_string();
        state
    }

    #[test]
    fn short_segment_never_reaches_in_flight() {
        let mut state = state_with_segment("ai");
        let result = state.try_begin_analysis(Instant::now());
        assert_eq!(
            result.unwrap_err(),
            SubmitError::Invalid(FormError::SegmentTooShort)
        );
        assert!(!state.is_analyzing());
    }

    #[test]
    fn resubmit_while_in_flight_is_rejected() {
        let mut state = state_with_segment("fitness");
        let first = state.try_begin_analysis(Instant::now());
        assert!(first.is_ok());
        assert!(state.is_analyzing());

        let second = state.try_begin_analysis(Instant::now());
        assert_eq!(second.unwrap_err(), SubmitError::AlreadyRunning);
    }

    #[test]
    fn submission_ids_differ_between_runs() {
        let mut state = state_with_segment("fitness");
        let a = state.try_begin_analysis(Instant::now()).unwrap();
        state.fail_analysis("backend down");
        let b = state.try_begin_analysis(Instant::now()).unwrap();
        assert_ne!(a.session_id, b.session_id);
    }

    #[test]
    fn success_caches_report_and_returns_to_idle() {
        let mut state = state_with_segment("fitness");
        state.try_begin_analysis(Instant::now()).unwrap();
        state.complete_analysis(serde_json::json!({"dna_conversao_completo": {}}));

        assert!(!state.is_analyzing());
        assert!(state.current.is_some());
        let view = state.report_view.as_ref().unwrap();
        assert_eq!(view.dna.formula, crate::view::DEFAULT_FORMULA);
    }

    #[test]
    fn failure_restores_idle_without_report() {
        let mut state = state_with_segment("fitness");
        state.try_begin_analysis(Instant::now()).unwrap();
        state.fail_analysis("timeout");
        assert!(!state.is_analyzing());
        assert!(state.current.is_none());
    }
}
