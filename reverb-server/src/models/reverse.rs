//! String reversal

use serde_json::Value;

use super::ValidationError;

/// Validated input for the reverse endpoint. Empty text is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseInput(String);

impl ReverseInput {
    /// Extract the `text` field from a request body.
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        match body.get("text") {
            Some(Value::String(s)) => Ok(Self(s.clone())),
            _ => Err(ValidationError::NotAString { field: "text" }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reverse the input by code point.
    pub fn reversed(&self) -> String {
        reverse_code_points(&self.0)
    }
}

/// Reverse a string by Unicode scalar value.
///
/// Combining marks are not kept with their base character.
pub fn reverse_code_points(s: &str) -> String {
    s.chars().rev().collect()
}
