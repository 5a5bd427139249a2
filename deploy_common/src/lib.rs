pub mod errors;
pub mod interface;
pub mod logic;

pub use errors::normalize_fault;
pub use interface::OrchestratorHandler;
pub use logic::{annotate_outputs, deploy_blueprint, undeploy_deployment, Pacing};
