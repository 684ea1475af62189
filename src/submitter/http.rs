//! HTTP submission client.
//!
//! Posts creation payloads to a relay that signs and sends the on-chain call
//! on behalf of the connected wallet.

use crate::collaborators::{GroupSubmitter, SubmitterError};
use crate::config::SubmitterConfig;
use crate::error::AppResult;
use crate::models::{PrivateGroupRequest, PublicGroupRequest, SubmissionReceipt};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::{debug, error};

/// Error body returned by the relay
#[derive(Debug, Deserialize)]
struct RelayError {
    message: Option<String>,
}

/// Submission client backed by a JSON relay
pub struct HttpGroupSubmitter {
    client: reqwest::Client,
    base_url: String,
    account: Option<String>,
    last_error: Mutex<Option<String>>,
}

impl HttpGroupSubmitter {
    /// Create a new submitter from configuration
    pub fn new(config: &SubmitterConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.clone(),
            account: config.wallet_address.clone(),
            last_error: Mutex::new(None),
        })
    }

    /// Last failure seen since the most recent reset
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().ok().and_then(|e| e.clone())
    }

    fn endpoint(&self, kind: &str) -> String {
        format!("{}/groups/{}", self.base_url, kind)
    }

    fn record_error(&self, message: &str) {
        if let Ok(mut last) = self.last_error.lock() {
            *last = Some(message.to_string());
        }
    }

    async fn post<T: Serialize + Sync>(
        &self,
        kind: &str,
        payload: &T,
    ) -> Result<SubmissionReceipt, SubmitterError> {
        let url = self.endpoint(kind);
        debug!("POST {}", url);

        let mut request = self.client.post(&url).json(payload);
        if let Some(account) = &self.account {
            request = request.header("X-Wallet-Address", account);
        }

        let response = request.send().await.map_err(|e| {
            error!("Relay request failed: {}", e);
            self.record_error(&e.to_string());
            SubmitterError::new(format!("Relay unreachable: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body: Option<RelayError> = response.json().await.ok();
            let message = body.and_then(|b| b.message);
            error!("Relay returned {}: {:?}", status, message);
            self.record_error(message.as_deref().unwrap_or(status.as_str()));
            return Err(SubmitterError { message });
        }

        response.json::<SubmissionReceipt>().await.map_err(|e| {
            self.record_error(&e.to_string());
            SubmitterError::new(format!("Invalid relay response: {}", e))
        })
    }
}

#[async_trait]
impl GroupSubmitter for HttpGroupSubmitter {
    fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    fn account(&self) -> Option<String> {
        self.account.clone()
    }

    async fn create_public_group(
        &self,
        request: &PublicGroupRequest,
    ) -> Result<SubmissionReceipt, SubmitterError> {
        self.post("public", request).await
    }

    async fn create_private_group(
        &self,
        request: &PrivateGroupRequest,
    ) -> Result<SubmissionReceipt, SubmitterError> {
        self.post("private", request).await
    }

    fn reset_state(&self) {
        if let Ok(mut last) = self.last_error.lock() {
            *last = None;
        }
    }
}
