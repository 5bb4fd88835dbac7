//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Roles serialize in the lowercase form expected by chat-completion APIs.
///
/// # Examples
///
/// ```
/// use fabula_core::Role;
///
/// let user_role = Role::User;
/// let assistant_role = Role::Assistant;
/// assert_ne!(user_role, assistant_role);
///
/// // Display implementation
/// assert_eq!(format!("{}", Role::User), "user");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System messages provide context and instructions
    #[display("system")]
    System,
    /// User messages are from the human
    #[display("user")]
    User,
    /// Assistant messages are from the AI
    #[display("assistant")]
    Assistant,
}

impl Role {
    /// The wire-format name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}
