mod api;
mod blueprint;
mod config;
mod deployment;
mod errors;

pub use api::ApiResponse;
pub use blueprint::Blueprint;
pub use config::OrchestratorConfig;
pub use deployment::AnnotatedOutput;
pub use errors::{ApiFault, NormalizedError};
