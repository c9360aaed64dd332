//! Per-field messages from API validation failures.
//!
//! The backend reports validation errors as `{"field": ["msg", ...]}`, or
//! nests one level deeper (`{"field": {"key": ["msg", ...]}}`) for
//! multi-value fields. Forms want one display string per field.

#[cfg(test)]
#[path = "form_errors_test.rs"]
mod form_errors_test;

use std::collections::BTreeMap;

use serde_json::Value;

use crate::net::types::ApiError;

const MESSAGE_SEPARATOR: &str = ". ";

/// Flatten a validation payload into `field -> message`.
///
/// Fields whose value isn't a message list (or a map whose first entry is
/// one) are skipped.
pub fn field_error_messages(errors: &Value) -> BTreeMap<String, String> {
    let Some(fields) = errors.as_object() else {
        return BTreeMap::new();
    };
    fields
        .iter()
        .filter_map(|(field, value)| {
            let messages = match value {
                Value::Array(_) => value,
                Value::Object(nested) => nested.values().next()?,
                _ => return None,
            };
            Some((field.clone(), join_messages(messages)?))
        })
        .collect()
}

fn join_messages(messages: &Value) -> Option<String> {
    let parts: Vec<String> = messages
        .as_array()?
        .iter()
        .map(|m| match m {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();
    Some(parts.join(MESSAGE_SEPARATOR))
}

impl ApiError {
    /// Field messages from a rejected request's JSON body.
    ///
    /// Empty when the error has no body or the body isn't a validation payload.
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        self.body()
            .and_then(|body| serde_json::from_str::<Value>(body).ok())
            .map(|value| field_error_messages(&value))
            .unwrap_or_default()
    }
}
