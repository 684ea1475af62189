//! Interfaces to the services that surround group creation.
//!
//! The wallet/submission client, the notification sink and the navigator are
//! injected into [`crate::services::GroupRequestBuilder`] so each can be
//! replaced in tests.

use crate::models::{Notification, PrivateGroupRequest, PublicGroupRequest, SubmissionReceipt};
use async_trait::async_trait;
use tracing::{info, warn};

/// Failure reported by the submission client.
///
/// `message` is `None` when the client gives no reason.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitterError {
    pub message: Option<String>,
}

impl SubmitterError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn without_message() -> Self {
        Self { message: None }
    }
}

/// Wallet session plus the client that turns a request into a signed call
#[async_trait]
pub trait GroupSubmitter: Send + Sync {
    fn is_connected(&self) -> bool;

    /// Connected account address, if any
    fn account(&self) -> Option<String>;

    async fn create_public_group(
        &self,
        request: &PublicGroupRequest,
    ) -> Result<SubmissionReceipt, SubmitterError>;

    async fn create_private_group(
        &self,
        request: &PrivateGroupRequest,
    ) -> Result<SubmissionReceipt, SubmitterError>;

    /// Clear transient state left by an earlier attempt
    fn reset_state(&self);
}

/// Sink for user-facing notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Page navigation
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, path: &str);
}

/// Notifier that writes notifications to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        if notification.is_destructive() {
            warn!("{}: {}", notification.title, notification.description);
        } else {
            info!("{}: {}", notification.title, notification.description);
        }
    }
}

/// Navigator that only records the destination in the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate_to(&self, path: &str) {
        info!("Navigating to {}", path);
    }
}
