//! Savings Circle Library
//!
//! Collects the parameters of a rotating savings group, validates them and
//! hands a typed creation request to a submission client.

pub mod collaborators;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod services;
pub mod submitter;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use form::{FormDraft, FormField, FormState};
pub use services::{GroupRequestBuilder, SubmissionOutcome, SubmissionPhase};
