use async_trait::async_trait;
use deploy_defs::{ApiFault, ApiResponse, Blueprint};
use serde_json::Value;

/// The orchestration backend as consumed by the sequencers.
///
/// Implementations own the wire protocol, the backend address and the
/// credentials (see `deploy_defs::OrchestratorConfig`); this crate only
/// sequences the calls.
#[async_trait]
pub trait OrchestratorHandler {
    async fn upload_blueprint(
        &self,
        id: &str,
        blueprint: &Blueprint,
    ) -> Result<ApiResponse, ApiFault>;

    async fn create_deployment(
        &self,
        deployment_id: &str,
        blueprint_id: &str,
        inputs: &Value,
    ) -> Result<ApiResponse, ApiFault>;

    async fn execute_workflow(
        &self,
        id: &str,
        workflow: &str,
        parameters: Option<Value>,
    ) -> Result<ApiResponse, ApiFault>;

    async fn get_outputs(&self, id: &str) -> Result<ApiResponse, ApiFault>;

    async fn get_output_descriptions(&self, id: &str) -> Result<ApiResponse, ApiFault>;

    async fn delete_deployment(&self, id: &str) -> Result<ApiResponse, ApiFault>;

    async fn delete_blueprint(&self, id: &str) -> Result<ApiResponse, ApiFault>;
}
