//! Domain models for savings group creation.
//!
//! Fixed lookup tables (group types, cycle units, the token catalog) and the
//! request payloads handed to the submission client.

pub mod cycle_unit;
pub mod group_type;
pub mod notification;
pub mod request;
pub mod token;

// Re-export all models for convenient access
pub use cycle_unit::CycleUnit;
pub use group_type::GroupType;
pub use notification::{Notification, NotificationVariant};
pub use request::{
    GroupCreationRequest, GroupParams, PrivateGroupRequest, PublicGroupRequest,
    SubmissionReceipt,
};
pub use token::SupportedToken;
