use std::collections::BTreeMap;

use deploy_defs::{AnnotatedOutput, Blueprint, NormalizedError};
use deploy_utils::{parse_content, ParsedContent};
use log::{debug, info};
use serde_json::{Map, Value};
use tokio::time::sleep;

use crate::errors::normalize_fault;
use crate::interface::OrchestratorHandler;
use crate::logic::outputs::annotate_outputs;
use crate::logic::pacing::Pacing;

const INSTALL_WORKFLOW: &str = "install";

/// Run the full deployment sequence for a blueprint: upload, instantiate,
/// install, then collect and annotate the outputs.
///
/// The steps run strictly in order with the configured pauses in between;
/// the first failure aborts the rest of the sequence and is returned
/// normalized. Nothing is retried and nothing is rolled back, so a failure
/// mid-sequence can leave a partially created deployment behind on the
/// backend.
pub async fn deploy_blueprint(
    handler: &impl OrchestratorHandler,
    pacing: &Pacing,
    id: &str,
    blueprint: &Blueprint,
    inputs: &Value,
) -> Result<BTreeMap<String, AnnotatedOutput>, NormalizedError> {
    debug!("deployment {}: starting blueprint upload", id);
    handler
        .upload_blueprint(id, blueprint)
        .await
        .map_err(normalize_fault)?;
    debug!("deployment {}: blueprint uploaded", id);

    // The identifier doubles as blueprint id and deployment id.
    handler
        .create_deployment(id, id, inputs)
        .await
        .map_err(normalize_fault)?;
    debug!("deployment {}: deployment created", id);

    sleep(pacing.install_workflow).await;
    handler
        .execute_workflow(id, INSTALL_WORKFLOW, None)
        .await
        .map_err(normalize_fault)?;
    debug!("deployment {}: install workflow executed", id);

    sleep(pacing.retrieve_outputs).await;
    let response = handler.get_outputs(id).await.map_err(normalize_fault)?;

    let raw_outputs = raw_outputs_from_body(response.body.as_deref());
    debug!("deployment {}: retrieved {} outputs", id, raw_outputs.len());
    info!("deployment {} successfully deployed", id);

    annotate_outputs(handler, id, &raw_outputs).await
}

// A body without a structured `outputs` object is not an error here; the
// deployment simply exposes no outputs.
fn raw_outputs_from_body(body: Option<&str>) -> Map<String, Value> {
    body.map(parse_content)
        .and_then(ParsedContent::into_structured)
        .and_then(|content| content.get("outputs").and_then(Value::as_object).cloned())
        .unwrap_or_default()
}
