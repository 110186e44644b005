pub mod input;
pub mod repository_output;

pub use input::Input;
pub use repository_output::RepositoryOutput;
