//! Shared error handling used by every layer

pub mod error;
pub mod result;
