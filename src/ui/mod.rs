// src/ui/mod.rs
pub mod capabilities;
pub mod form;
pub mod progress;
pub mod results;
pub mod toast;
pub mod upload;

pub use results::ResultsAction;
pub use upload::UploadAction;
