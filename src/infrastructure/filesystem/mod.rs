pub mod registry_store;

pub use registry_store::{RegistryStore, REGISTRY_FILE_NAME};
