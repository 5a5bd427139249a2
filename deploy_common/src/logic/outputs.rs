use std::collections::BTreeMap;

use deploy_defs::{AnnotatedOutput, NormalizedError};
use deploy_utils::{parse_content, ParsedContent};
use serde_json::{Map, Value};

use crate::errors::normalize_fault;
use crate::interface::OrchestratorHandler;

const API_INVALID_RESPONSE: &str = "API_INVALID_RESPONSE";

/// Join raw deployment outputs with the descriptions the blueprint
/// declares for them.
///
/// An empty raw-outputs mapping resolves immediately without touching the
/// backend. Otherwise the descriptions are fetched and each output keeps
/// its value, gaining a `description` only when the blueprint documents
/// that output with a non-empty description.
pub async fn annotate_outputs(
    handler: &impl OrchestratorHandler,
    id: &str,
    raw_outputs: &Map<String, Value>,
) -> Result<BTreeMap<String, AnnotatedOutput>, NormalizedError> {
    if raw_outputs.is_empty() {
        return Ok(BTreeMap::new());
    }

    let response = handler
        .get_output_descriptions(id)
        .await
        .map_err(normalize_fault)?;

    // The descriptions payload must be structured and carry an `outputs`
    // mapping; anything else is a malformed backend answer.
    let descriptions = response
        .body
        .as_deref()
        .map(parse_content)
        .and_then(ParsedContent::into_structured)
        .and_then(|content| content.get("outputs").cloned())
        .filter(|outputs| !outputs.is_null())
        .ok_or_else(|| {
            NormalizedError::with_code(
                "Invalid response for output descriptions query",
                API_INVALID_RESPONSE,
            )
        })?;

    let mut annotated = BTreeMap::new();
    for (name, value) in raw_outputs {
        let description = descriptions
            .get(name.as_str())
            .and_then(|entry| entry.get("description"))
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_string);
        annotated.insert(
            name.clone(),
            AnnotatedOutput {
                value: value.clone(),
                description,
            },
        );
    }

    Ok(annotated)
}
