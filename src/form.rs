//! Mutable form state for a group being assembled.
//!
//! Nothing here validates business rules; values are stored as typed in and
//! checked as a whole by the validation service at submit time. The only
//! check performed on edit is the syntactic shape of invitee addresses.

use crate::error::AddressError;
use crate::models::{GroupType, SupportedToken};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Required prefix of a chain address
pub const ADDRESS_PREFIX: &str = "0x";

/// Shortest accepted invitee address, prefix included
pub const MIN_ADDRESS_LEN: usize = 10;

/// Text fields of the form, addressable by key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    GroupName,
    Description,
    MaxMembers,
    ContributionAmount,
    CycleDuration,
    CycleUnit,
    MinReputation,
}

impl FormField {
    /// Convert from form key
    pub fn from_key(key: &str) -> Result<Self, String> {
        match key {
            "groupName" => Ok(FormField::GroupName),
            "description" => Ok(FormField::Description),
            "maxMembers" => Ok(FormField::MaxMembers),
            "contributionAmount" => Ok(FormField::ContributionAmount),
            "cycleDuration" => Ok(FormField::CycleDuration),
            "cycleUnit" => Ok(FormField::CycleUnit),
            "minReputation" => Ok(FormField::MinReputation),
            _ => Err(format!("Unknown form field: {}", key)),
        }
    }

    /// Convert to form key
    pub fn key(&self) -> &'static str {
        match self {
            FormField::GroupName => "groupName",
            FormField::Description => "description",
            FormField::MaxMembers => "maxMembers",
            FormField::ContributionAmount => "contributionAmount",
            FormField::CycleDuration => "cycleDuration",
            FormField::CycleUnit => "cycleUnit",
            FormField::MinReputation => "minReputation",
        }
    }
}

/// Raw user-entered values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormData {
    pub group_name: String,
    pub description: String,
    pub max_members: String,
    pub contribution_amount: String,
    pub cycle_duration: String,
    pub cycle_unit: String,
    pub min_reputation: String,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            group_name: String::new(),
            description: String::new(),
            max_members: String::new(),
            contribution_amount: String::new(),
            cycle_duration: "1".to_string(),
            cycle_unit: "days".to_string(),
            min_reputation: "0".to_string(),
        }
    }
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::GroupName => &self.group_name,
            FormField::Description => &self.description,
            FormField::MaxMembers => &self.max_members,
            FormField::ContributionAmount => &self.contribution_amount,
            FormField::CycleDuration => &self.cycle_duration,
            FormField::CycleUnit => &self.cycle_unit,
            FormField::MinReputation => &self.min_reputation,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::GroupName => &mut self.group_name,
            FormField::Description => &mut self.description,
            FormField::MaxMembers => &mut self.max_members,
            FormField::ContributionAmount => &mut self.contribution_amount,
            FormField::CycleDuration => &mut self.cycle_duration,
            FormField::CycleUnit => &mut self.cycle_unit,
            FormField::MinReputation => &mut self.min_reputation,
        }
    }
}

/// Optional fund lock
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LockSettings {
    pub lock_enabled: bool,
    /// Only meaningful while `lock_enabled` is set
    pub lock_amount: String,
}

/// Everything the user has entered for one group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    data: FormData,
    group_type: GroupType,
    lock: LockSettings,
    selected_token: SupportedToken,
    invited_members: Vec<String>,
    current_address: String,
}

/// Serialized form contents, as saved by a client or written by hand
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormDraft {
    #[serde(flatten)]
    pub data: FormData,
    pub group_type: GroupType,
    #[serde(flatten)]
    pub lock: LockSettings,
    pub selected_token: SupportedToken,
    pub invited_members: Vec<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild form state from a draft, replaying every invitee through
    /// [`FormState::add_invited_member`]
    pub fn from_draft(draft: FormDraft) -> Result<Self, AddressError> {
        let mut form = Self {
            data: draft.data,
            group_type: draft.group_type,
            lock: draft.lock,
            selected_token: draft.selected_token,
            ..Self::default()
        };
        for address in &draft.invited_members {
            form.add_invited_member(address)?;
        }
        Ok(form)
    }

    /// Snapshot of the form as a draft; the staging field is not saved
    pub fn to_draft(&self) -> FormDraft {
        FormDraft {
            data: self.data.clone(),
            group_type: self.group_type,
            lock: self.lock.clone(),
            selected_token: self.selected_token,
            invited_members: self.invited_members.clone(),
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn group_type(&self) -> GroupType {
        self.group_type
    }

    pub fn lock(&self) -> &LockSettings {
        &self.lock
    }

    pub fn selected_token(&self) -> SupportedToken {
        self.selected_token
    }

    pub fn invited_members(&self) -> &[String] {
        &self.invited_members
    }

    pub fn current_address(&self) -> &str {
        &self.current_address
    }

    /// Store a raw value for one field
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        debug!("Form field {} updated", field.key());
        *self.data.slot(field) = value;
    }

    /// Store a raw value for the field named by `key`
    pub fn set_field_by_key(&mut self, key: &str, value: impl Into<String>) -> Result<(), String> {
        let field = FormField::from_key(key)?;
        self.set_field(field, value);
        Ok(())
    }

    /// Switch group type; shared fields are kept as-is
    pub fn set_group_type(&mut self, group_type: GroupType) {
        debug!("Group type set to {}", group_type.as_str());
        self.group_type = group_type;
    }

    pub fn set_lock(&mut self, enabled: bool, amount: impl Into<String>) {
        self.lock = LockSettings {
            lock_enabled: enabled,
            lock_amount: amount.into(),
        };
    }

    pub fn set_token(&mut self, token: SupportedToken) {
        self.selected_token = token;
    }

    pub fn set_current_address(&mut self, address: impl Into<String>) {
        self.current_address = address.into();
    }

    /// Add an invitee after checking its shape.
    ///
    /// Returns `Ok(false)` when the address was already invited. On success
    /// the staging field is cleared; on failure nothing changes.
    pub fn add_invited_member(&mut self, candidate: &str) -> Result<bool, AddressError> {
        if !is_valid_address(candidate) {
            warn!("Rejected invitee address: {}", candidate);
            return Err(AddressError::InvalidAddress(candidate.to_string()));
        }

        let added = if self.invited_members.iter().any(|a| a == candidate) {
            false
        } else {
            self.invited_members.push(candidate.to_string());
            info!("Invited {} ({} total)", candidate, self.invited_members.len());
            true
        };

        self.current_address.clear();
        Ok(added)
    }

    /// Commit the staging field; an empty staging field is a no-op
    pub fn add_current_address(&mut self) -> Result<bool, AddressError> {
        if self.current_address.is_empty() {
            return Ok(false);
        }
        let candidate = self.current_address.clone();
        self.add_invited_member(&candidate)
    }

    /// Remove an invitee by exact match
    pub fn remove_invited_member(&mut self, address: &str) -> bool {
        let before = self.invited_members.len();
        self.invited_members.retain(|a| a != address);
        let removed = self.invited_members.len() != before;
        if removed {
            info!("Removed invitee {}", address);
        }
        removed
    }
}

/// Syntactic check for a chain address
pub fn is_valid_address(candidate: &str) -> bool {
    candidate.starts_with(ADDRESS_PREFIX) && candidate.len() >= MIN_ADDRESS_LEN
}
