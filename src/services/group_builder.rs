use crate::collaborators::{GroupSubmitter, Navigator, Notifier};
use crate::error::{AppError, AppResult, SubmissionError, ValidationError};
use crate::form::FormState;
use crate::models::{
    GroupCreationRequest, GroupType, Notification, PrivateGroupRequest, PublicGroupRequest,
};
use crate::services::validation;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Delay between a confirmed creation and the redirect to the group list
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Page shown after a group is created
pub const DEFAULT_LISTING_PATH: &str = "/groups";

/// Message used when the submission client fails without a reason
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to create group. Please try again.";

/// Where a form instance is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// Editable; initial state and the state after any failure
    Idle,
    Validating,
    /// A request is outstanding
    Submitting,
    /// Terminal for this form instance
    Succeeded,
}

/// Result of a settled submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The client returned a transaction identifier
    Success { tx_id: String },
    /// The client settled without a transaction identifier
    Unconfirmed,
}

/// Validates a form, builds the matching creation request and drives its
/// submission
pub struct GroupRequestBuilder {
    form_id: Uuid,
    submitter: Arc<dyn GroupSubmitter>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    redirect_delay: Duration,
    listing_path: String,
    phase: SubmissionPhase,
    redirect: Option<JoinHandle<()>>,
    created_at: Option<DateTime<Utc>>,
}

impl GroupRequestBuilder {
    pub fn new(
        submitter: Arc<dyn GroupSubmitter>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            form_id: Uuid::new_v4(),
            submitter,
            notifier,
            navigator,
            redirect_delay: DEFAULT_REDIRECT_DELAY,
            listing_path: DEFAULT_LISTING_PATH.to_string(),
            phase: SubmissionPhase::Idle,
            redirect: None,
            created_at: None,
        }
    }

    /// Set redirect delay
    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    /// Set the page to open after creation
    pub fn with_listing_path(mut self, path: impl Into<String>) -> Self {
        self.listing_path = path.into();
        self
    }

    pub fn form_id(&self) -> Uuid {
        self.form_id
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// True while a request is outstanding; callers disable re-submission.
    ///
    /// `submit` and `create_group` borrow the builder mutably, so one form
    /// cannot have two requests outstanding at once.
    pub fn is_creating(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// When the group was confirmed, if it has been
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Take the pending redirect task, if one was scheduled
    pub fn take_redirect(&mut self) -> Option<JoinHandle<()>> {
        self.redirect.take()
    }

    /// Check the form against every business rule without changing it
    pub fn validate(&self, form: &FormState) -> Result<(), ValidationError> {
        validation::check_form(form).map(|_| ())
    }

    /// Build the request for the form's group type.
    ///
    /// Public requests never carry the invite list, whatever the form holds.
    pub fn build_request(&self, form: &FormState) -> Result<GroupCreationRequest, ValidationError> {
        let params = validation::check_form(form)?;

        Ok(match form.group_type() {
            GroupType::Public => GroupCreationRequest::Public(PublicGroupRequest { params }),
            GroupType::Private => GroupCreationRequest::Private(PrivateGroupRequest {
                params,
                invited_members: form.invited_members().to_vec(),
            }),
        })
    }

    fn ensure_connected(&self) -> Result<String, SubmissionError> {
        match self.submitter.account() {
            Some(account) if self.submitter.is_connected() => Ok(account),
            _ => Err(SubmissionError::NotConnected),
        }
    }

    /// Send a request to the submission client.
    ///
    /// Fails with [`SubmissionError::NotConnected`] before touching the client
    /// when no wallet session exists.
    pub async fn submit(
        &mut self,
        request: &GroupCreationRequest,
    ) -> Result<SubmissionOutcome, SubmissionError> {
        if self.phase == SubmissionPhase::Succeeded {
            return Err(SubmissionError::AlreadySubmitted);
        }

        let account = match self.ensure_connected() {
            Ok(account) => account,
            Err(e) => {
                self.phase = SubmissionPhase::Idle;
                return Err(e);
            }
        };

        self.submitter.reset_state();
        self.phase = SubmissionPhase::Submitting;
        info!(
            "Submitting {} group '{}' for {} (form {})",
            request.group_type().as_str(),
            request.params().group_name,
            account,
            self.form_id
        );

        let result = match request {
            GroupCreationRequest::Public(req) => self.submitter.create_public_group(req).await,
            GroupCreationRequest::Private(req) => self.submitter.create_private_group(req).await,
        };

        match result {
            Ok(receipt) => match receipt.transaction_hash {
                Some(tx_id) => {
                    self.phase = SubmissionPhase::Succeeded;
                    self.created_at = Some(Utc::now());
                    info!("Group created, transaction {}", tx_id);
                    Ok(SubmissionOutcome::Success { tx_id })
                }
                None => {
                    self.phase = SubmissionPhase::Idle;
                    warn!("Submission settled without a transaction hash (form {})", self.form_id);
                    Ok(SubmissionOutcome::Unconfirmed)
                }
            },
            Err(e) => {
                self.phase = SubmissionPhase::Idle;
                let message = e
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
                error!("Error creating group: {}", message);
                Err(SubmissionError::Failed(message))
            }
        }
    }

    /// Full create flow: connection check, validation, request construction,
    /// submission, notifications and the delayed redirect on success.
    ///
    /// The form is never modified, so it can be corrected and resubmitted
    /// after any failure.
    pub async fn create_group(&mut self, form: &FormState) -> AppResult<SubmissionOutcome> {
        if self.phase == SubmissionPhase::Succeeded {
            return Err(SubmissionError::AlreadySubmitted.into());
        }

        if let Err(e) = self.ensure_connected() {
            self.notifier
                .notify(Notification::error("Wallet Connection Error", e.to_string()));
            return Err(e.into());
        }

        self.phase = SubmissionPhase::Validating;
        let request = match self.build_request(form) {
            Ok(request) => request,
            Err(e) => {
                self.phase = SubmissionPhase::Idle;
                warn!("Form rejected on {}: {}", e.field(), e);
                self.notifier.notify(Notification::error(e.title(), e.to_string()));
                return Err(e.into());
            }
        };

        match self.submit(&request).await {
            Ok(SubmissionOutcome::Success { tx_id }) => {
                let short: String = tx_id.chars().take(10).collect();
                self.notifier.notify(Notification::success(
                    "Success!",
                    format!("Group created successfully! Transaction: {}...", short),
                ));
                self.schedule_redirect();
                Ok(SubmissionOutcome::Success { tx_id })
            }
            Ok(SubmissionOutcome::Unconfirmed) => Ok(SubmissionOutcome::Unconfirmed),
            Err(e) => {
                let title = match e {
                    SubmissionError::NotConnected => "Wallet Connection Error",
                    _ => "Error",
                };
                self.notifier.notify(Notification::error(title, e.to_string()));
                Err(AppError::Submission(e))
            }
        }
    }

    fn schedule_redirect(&mut self) {
        let navigator = self.navigator.clone();
        let path = self.listing_path.clone();
        let delay = self.redirect_delay;

        info!("Redirecting to {} in {:?}", path, delay);
        self.redirect = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            navigator.navigate_to(&path);
        }));
    }
}
