pub mod command_processor;
pub mod orchestrator;

pub use command_processor::CommandProcessor;
pub use orchestrator::{Orchestrator, OrchestratorConfig};
