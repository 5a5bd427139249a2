use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A deployment output joined with its blueprint-provided description.
///
/// `description` is only present when the blueprint documents the output
/// with a non-empty description.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AnnotatedOutput {
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AnnotatedOutput {
    pub fn new(value: Value) -> Self {
        AnnotatedOutput {
            value,
            description: None,
        }
    }

    pub fn with_description(value: Value, description: impl Into<String>) -> Self {
        AnnotatedOutput {
            value,
            description: Some(description.into()),
        }
    }
}
