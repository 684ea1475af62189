#![allow(dead_code)]

use async_trait::async_trait;
use savings_circle::collaborators::{GroupSubmitter, Navigator, Notifier, SubmitterError};
use savings_circle::models::{
    GroupType, Notification, PrivateGroupRequest, PublicGroupRequest, SubmissionReceipt,
};
use savings_circle::{FormField, FormState, GroupRequestBuilder};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const INVITEE: &str = "0x0123456789abcdef";
pub const TX_HASH: &str = "0xabc1234567890def";

/// Submission client that records every call
pub struct MockSubmitter {
    connected: bool,
    response: Mutex<Result<SubmissionReceipt, SubmitterError>>,
    delay: Mutex<Duration>,
    pub public_calls: Mutex<Vec<PublicGroupRequest>>,
    pub private_calls: Mutex<Vec<PrivateGroupRequest>>,
    pub resets: AtomicUsize,
}

impl MockSubmitter {
    pub fn connected() -> Arc<Self> {
        Self::build(true, Ok(SubmissionReceipt::with_hash(TX_HASH)))
    }

    pub fn disconnected() -> Arc<Self> {
        Self::build(false, Ok(SubmissionReceipt::with_hash(TX_HASH)))
    }

    pub fn failing(error: SubmitterError) -> Arc<Self> {
        Self::build(true, Err(error))
    }

    pub fn without_hash() -> Arc<Self> {
        Self::build(true, Ok(SubmissionReceipt::default()))
    }

    /// Connected client that takes `delay` to answer
    pub fn slow(delay: Duration) -> Arc<Self> {
        let submitter = Self::connected();
        submitter.set_delay(delay);
        submitter
    }

    fn build(connected: bool, response: Result<SubmissionReceipt, SubmitterError>) -> Arc<Self> {
        Arc::new(Self {
            connected,
            response: Mutex::new(response),
            delay: Mutex::new(Duration::ZERO),
            public_calls: Mutex::new(Vec::new()),
            private_calls: Mutex::new(Vec::new()),
            resets: AtomicUsize::new(0),
        })
    }

    pub fn respond_with(&self, response: Result<SubmissionReceipt, SubmitterError>) {
        *self.response.lock().unwrap() = response;
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = delay;
    }

    async fn wait(&self) {
        let delay = *self.delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    pub fn call_count(&self) -> usize {
        self.public_calls.lock().unwrap().len() + self.private_calls.lock().unwrap().len()
    }

    pub fn reset_count(&self) -> usize {
        self.resets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GroupSubmitter for MockSubmitter {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn account(&self) -> Option<String> {
        self.connected.then(|| "0xfeedfacecafebeef".to_string())
    }

    async fn create_public_group(
        &self,
        request: &PublicGroupRequest,
    ) -> Result<SubmissionReceipt, SubmitterError> {
        self.public_calls.lock().unwrap().push(request.clone());
        self.wait().await;
        self.response.lock().unwrap().clone()
    }

    async fn create_private_group(
        &self,
        request: &PrivateGroupRequest,
    ) -> Result<SubmissionReceipt, SubmitterError> {
        self.private_calls.lock().unwrap().push(request.clone());
        self.wait().await;
        self.response.lock().unwrap().clone()
    }

    fn reset_state(&self) {
        self.resets.fetch_add(1, Ordering::SeqCst);
    }
}

/// Notifier that keeps every notification
#[derive(Default)]
pub struct RecordingNotifier {
    pub notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn all(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

/// Navigator that keeps every destination
#[derive(Default)]
pub struct RecordingNavigator {
    pub paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

/// Builder wired to recording collaborators
pub struct TestHarness {
    pub submitter: Arc<MockSubmitter>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
    pub builder: GroupRequestBuilder,
}

impl TestHarness {
    pub fn new(submitter: Arc<MockSubmitter>) -> Self {
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let builder = GroupRequestBuilder::new(
            submitter.clone(),
            notifier.clone(),
            navigator.clone(),
        );

        Self {
            submitter,
            notifier,
            navigator,
            builder,
        }
    }
}

/// Scenario A form: valid public group
pub fn public_form() -> FormState {
    let mut form = FormState::new();
    form.set_field(FormField::GroupName, "Friends Fund");
    form.set_field(FormField::MaxMembers, "10");
    form.set_field(FormField::ContributionAmount, "50");
    form.set_field(FormField::CycleDuration, "1");
    form.set_field(FormField::CycleUnit, "days");
    form
}

/// Valid private group with a single invitee
pub fn private_form() -> FormState {
    let mut form = public_form();
    form.set_group_type(GroupType::Private);
    form.add_invited_member(INVITEE)
        .expect("Failed to add invitee");
    form
}
