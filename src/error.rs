use thiserror::Error;

/// Form validation failures, one per rule, in evaluation order.
///
/// The `Display` text is the exact message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Group name is required")]
    GroupNameRequired,

    #[error("Minimum 2 members required")]
    TooFewMembers,

    #[error("Maximum 100 members for public groups")]
    PublicMemberCeiling,

    #[error("Maximum 50 members for private groups")]
    PrivateMemberCeiling,

    #[error("Valid contribution amount is required")]
    InvalidContribution,

    #[error("Cycle duration must be at least 1")]
    InvalidCycleDuration,

    #[error("Cycle duration is too large")]
    CycleDurationTooLarge,

    #[error("Cycle unit is required")]
    CycleUnitRequired,

    #[error("Please invite at least one member to your private group.")]
    InvitationsRequired,

    #[error("Valid lock amount is required")]
    InvalidLockAmount,

    #[error("Minimum reputation must be a non-negative whole number")]
    InvalidReputation,
}

impl ValidationError {
    /// Form key of the field that failed
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::GroupNameRequired => "groupName",
            ValidationError::TooFewMembers
            | ValidationError::PublicMemberCeiling
            | ValidationError::PrivateMemberCeiling => "maxMembers",
            ValidationError::InvalidContribution => "contributionAmount",
            ValidationError::InvalidCycleDuration
            | ValidationError::CycleDurationTooLarge => "cycleDuration",
            ValidationError::CycleUnitRequired => "cycleUnit",
            ValidationError::InvitationsRequired => "invitedMembers",
            ValidationError::InvalidLockAmount => "lockAmount",
            ValidationError::InvalidReputation => "minReputation",
        }
    }

    /// Notification title for this failure
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::InvitationsRequired => "Missing invitations",
            _ => "Error",
        }
    }
}

/// Invitee address failures raised while editing the invite list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Please enter a valid Starknet wallet address starting with 0x")]
    InvalidAddress(String),
}

/// Submission lifecycle failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// No wallet session is available
    #[error("Please ensure your wallet is properly connected and try again.")]
    NotConnected,

    /// This form already produced a group
    #[error("Group has already been created from this form")]
    AlreadySubmitted,

    /// The submission client rejected the request
    #[error("{0}")]
    Failed(String),
}

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Form validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Invitee address errors
    #[error("Invalid address: {0}")]
    Address(#[from] AddressError),

    /// Submission errors
    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Check if the user can fix this by editing the form
    pub fn is_correctable(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::Address(_))
    }

    /// Process exit code for the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) | AppError::Address(_) => 2,
            AppError::Submission(SubmissionError::NotConnected) => 3,
            AppError::Config(_) => 78,
            _ => 1,
        }
    }
}
