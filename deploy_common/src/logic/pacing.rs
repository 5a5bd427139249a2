use std::time::Duration;

/// Fixed pauses between sequencer steps. The sequencers sleep these
/// durations instead of polling the backend for readiness; the defaults
/// give the backend time to settle after each asynchronous step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// Between deployment creation and the install workflow.
    pub install_workflow: Duration,
    /// Between the install workflow and the outputs query.
    pub retrieve_outputs: Duration,
    /// Between the uninstall workflow and deployment deletion.
    pub delete_deployment: Duration,
    /// Between deployment deletion and blueprint deletion.
    pub delete_blueprint: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing {
            install_workflow: Duration::from_secs(30),
            retrieve_outputs: Duration::from_secs(5),
            delete_deployment: Duration::from_secs(30),
            delete_blueprint: Duration::from_secs(10),
        }
    }
}

impl Pacing {
    /// All pauses zeroed.
    pub fn immediate() -> Self {
        Pacing {
            install_workflow: Duration::ZERO,
            retrieve_outputs: Duration::ZERO,
            delete_deployment: Duration::ZERO,
            delete_blueprint: Duration::ZERO,
        }
    }
}
