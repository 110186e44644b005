/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - Process execution (running git and capturing its output)
/// - File system operations (project root discovery, registry file)
pub mod filesystem;
pub mod process;

// Re-export commonly used types
pub use filesystem::{RegistryStore, REGISTRY_FILE_NAME};
pub use process::{CapturedOutput, GitInvocation, GitInvoker, ProcessInvoker};
