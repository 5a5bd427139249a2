use deploy_defs::{ApiResponse, NormalizedError};
use log::{debug, info};
use tokio::time::sleep;

use crate::errors::normalize_fault;
use crate::interface::OrchestratorHandler;
use crate::logic::pacing::Pacing;

const UNINSTALL_WORKFLOW: &str = "uninstall";

/// Tear down a deployment created by `deploy_blueprint`: uninstall, delete
/// the deployment record, delete the blueprint record.
///
/// Success resolves with the raw response of the final deletion. Like the
/// deploy sequence there is no retry and no compensation; a failure after
/// the uninstall workflow leaves the deployment half-deleted.
pub async fn undeploy_deployment(
    handler: &impl OrchestratorHandler,
    pacing: &Pacing,
    id: &str,
) -> Result<ApiResponse, NormalizedError> {
    debug!("deployment {}: starting uninstall workflow", id);
    handler
        .execute_workflow(id, UNINSTALL_WORKFLOW, None)
        .await
        .map_err(normalize_fault)?;
    debug!("deployment {}: uninstall workflow completed", id);

    sleep(pacing.delete_deployment).await;
    handler
        .delete_deployment(id)
        .await
        .map_err(normalize_fault)?;
    debug!("deployment {}: deployment deleted", id);

    sleep(pacing.delete_blueprint).await;
    let response = handler
        .delete_blueprint(id)
        .await
        .map_err(normalize_fault)?;
    info!("deployment {} successfully undeployed", id);

    Ok(response)
}
