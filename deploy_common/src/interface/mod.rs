mod orchestrator;

pub use orchestrator::OrchestratorHandler;

#[cfg(test)]
pub(crate) use orchestrator::testing::MockOrchestrator;
