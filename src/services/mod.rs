pub mod group_builder;
pub mod validation;

pub use group_builder::{GroupRequestBuilder, SubmissionOutcome, SubmissionPhase};
pub use validation::check_form;
