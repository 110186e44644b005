//! Domain layer: repositories, the per-run execution context and parsed input

pub mod entities;
pub mod value_objects;
