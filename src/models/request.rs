use crate::models::{CycleUnit, GroupType, SupportedToken};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters shared by public and private group creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupParams {
    pub group_name: String,
    pub description: String,
    pub max_members: u32,
    pub contribution_amount: Decimal,
    pub cycle_duration: u32,
    pub cycle_unit: CycleUnit,
    pub lock_enabled: bool,
    /// Zero when the lock is disabled
    pub lock_amount: Decimal,
    pub selected_token: SupportedToken,
    pub min_reputation: u64,
}

/// Creation payload for a public group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicGroupRequest {
    #[serde(flatten)]
    pub params: GroupParams,
}

/// Creation payload for a private group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateGroupRequest {
    #[serde(flatten)]
    pub params: GroupParams,
    pub invited_members: Vec<String>,
}

/// Group creation request, tagged by group type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "groupType", rename_all = "lowercase")]
pub enum GroupCreationRequest {
    Public(PublicGroupRequest),
    Private(PrivateGroupRequest),
}

impl GroupCreationRequest {
    pub fn group_type(&self) -> GroupType {
        match self {
            GroupCreationRequest::Public(_) => GroupType::Public,
            GroupCreationRequest::Private(_) => GroupType::Private,
        }
    }

    pub fn params(&self) -> &GroupParams {
        match self {
            GroupCreationRequest::Public(req) => &req.params,
            GroupCreationRequest::Private(req) => &req.params,
        }
    }

    /// Invitees attached to the request; always empty for public groups
    pub fn invited_members(&self) -> &[String] {
        match self {
            GroupCreationRequest::Public(_) => &[],
            GroupCreationRequest::Private(req) => &req.invited_members,
        }
    }
}

/// Response from the submission client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
}

impl SubmissionReceipt {
    pub fn with_hash(hash: impl Into<String>) -> Self {
        Self {
            transaction_hash: Some(hash.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> GroupParams {
        GroupParams {
            group_name: "Friends Fund".to_string(),
            description: String::new(),
            max_members: 10,
            contribution_amount: Decimal::new(50, 0),
            cycle_duration: 1,
            cycle_unit: CycleUnit::Days,
            lock_enabled: false,
            lock_amount: Decimal::ZERO,
            selected_token: SupportedToken::Usdc,
            min_reputation: 0,
        }
    }

    #[test]
    fn test_public_payload_has_no_invitees() {
        let request = GroupCreationRequest::Public(PublicGroupRequest { params: params() });
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["groupType"], "public");
        assert_eq!(json["groupName"], "Friends Fund");
        assert_eq!(json["contributionAmount"], "50");
        assert!(json.get("invitedMembers").is_none());
        assert!(request.invited_members().is_empty());
    }

    #[test]
    fn test_private_payload_carries_invitees() {
        let request = GroupCreationRequest::Private(PrivateGroupRequest {
            params: params(),
            invited_members: vec!["0x0123456789abcdef".to_string()],
        });
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["groupType"], "private");
        assert_eq!(json["invitedMembers"][0], "0x0123456789abcdef");
        assert_eq!(request.group_type(), GroupType::Private);
    }

    #[test]
    fn test_receipt_without_hash() {
        let receipt: SubmissionReceipt = serde_json::from_str("{}").unwrap();
        assert_eq!(receipt.transaction_hash, None);

        let receipt: SubmissionReceipt =
            serde_json::from_str(r#"{"transaction_hash":"0xabc"}"#).unwrap();
        assert_eq!(receipt, SubmissionReceipt::with_hash("0xabc"));
    }
}
