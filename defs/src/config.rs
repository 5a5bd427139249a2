use serde::{Deserialize, Serialize};

/// Connection settings for the orchestration backend.
///
/// Loaded once at process start and handed to whichever
/// `OrchestratorHandler` implementation talks to the wire; the deployment
/// logic itself never reads these.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct OrchestratorConfig {
    pub url: String,
    pub user: String,
    pub password: String,
}
