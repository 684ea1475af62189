use serde::{Deserialize, Serialize};

/// Visibility of a savings group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    #[default]
    Public,
    Private,
}

impl GroupType {
    /// Largest member count accepted for this group type
    pub fn member_ceiling(&self) -> u32 {
        match self {
            GroupType::Public => 100,
            GroupType::Private => 50,
        }
    }

    /// Whether creation requires at least one invitee
    pub fn requires_invitations(&self) -> bool {
        matches!(self, GroupType::Private)
    }

    /// Convert from form string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "public" => Ok(GroupType::Public),
            "private" => Ok(GroupType::Private),
            _ => Err(format!("Invalid group type: {}", s)),
        }
    }

    /// Convert to form string
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupType::Public => "public",
            GroupType::Private => "private",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_ceiling() {
        assert_eq!(GroupType::Public.member_ceiling(), 100);
        assert_eq!(GroupType::Private.member_ceiling(), 50);
    }

    #[test]
    fn test_group_type_conversion() {
        assert_eq!(GroupType::from_str("PRIVATE").unwrap(), GroupType::Private);
        assert_eq!(GroupType::Public.as_str(), "public");
        assert!(GroupType::from_str("secret").is_err());
    }
}
