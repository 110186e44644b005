pub mod execution_context;
pub mod repository;

pub use execution_context::ExecutionContext;
pub use repository::{Repository, RepositoryKind};
