//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Author of a message in an LLM conversation.
///
/// Serializes in lowercase, matching chat-completions wire formats.
///
/// # Examples
///
/// ```
/// use presenter_core::Role;
///
/// assert_eq!(format!("{}", Role::System), "System");
/// assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages carry the task
    User,
    /// Assistant messages are model output
    Assistant,
}
