// src/model/mod.rs
pub mod capabilities;
pub mod report;
pub mod request;
pub mod upload;

// Re-export commonly used types
pub use capabilities::{AppStatus, CapabilitiesResponse};
pub use report::{AnalysisOutcome, AnalysisReport};
pub use request::{AnalysisForm, AnalysisRequest, FormError};
pub use upload::{UploadedFile, UploadRejection};
