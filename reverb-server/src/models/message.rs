//! Message model and text validation

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use super::ValidationError;

/// Maximum number of messages returned by a listing.
pub const MESSAGE_LIST_LIMIT: i64 = 50;

/// Persisted message.
///
/// `created_at` serializes as RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Message {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Validated, trimmed message text. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    /// Create message text from a raw string.
    ///
    /// # Rules
    /// - Leading and trailing whitespace is removed
    /// - The trimmed result must not be empty
    ///
    /// # Example
    /// ```
    /// use reverb_server::models::MessageText;
    ///
    /// assert_eq!(MessageText::new("  hi  ").unwrap().as_str(), "hi");
    /// assert!(MessageText::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankString { field: "text" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Extract message text from a request body.
    ///
    /// Anything other than an object with a non-blank string `text` is
    /// rejected with the same error.
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        match body.get("text") {
            Some(Value::String(s)) => Self::new(s),
            _ => Err(ValidationError::BlankString { field: "text" }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for MessageText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
