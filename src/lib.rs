//! # gitslave - Multi-repository git runner
//!
//! `gitslave` runs a git command against a *master* repository and every *slave*
//! repository declared in its `.gitslave` registry file, then merges the outputs so
//! that repositories in the same state show up as a single block.
//!
//! ## Quick Start
//!
//! 1. List the slave repositories in `.gitslave` at the project root:
//!
//! ```text
//! https://github.com/example/frontend
//! https://github.com/example/backend
//! ```
//!
//! 2. Clone the ones that are missing:
//!
//! ```bash
//! gitslave clone
//! ```
//!
//! 3. Run any git command everywhere:
//!
//! ```bash
//! gitslave status
//! ```
//!
//! ## Architecture
//!
//! - [`domain`]: repositories, the per-run execution context and parsed input
//! - [`application`]: command parsing, output aggregation and execution strategies
//! - [`infrastructure`]: running git and reading the registry file
//! - [`presentation`]: CLI bootstrap and report coloring
//! - [`common`]: shared error handling
//!
//! ## Examples
//!
//! ```rust,no_run
//! use gitslave::application::use_cases::Orchestrator;
//! use gitslave::infrastructure::{GitInvoker, RegistryStore};
//! use std::path::Path;
//!
//! # async fn example() -> gitslave::Result<()> {
//! let context = RegistryStore::new().load_context(Path::new(".")).await?;
//! let orchestrator = Orchestrator::new(context, GitInvoker::default());
//!
//! let report = orchestrator.run(&["status", "--short"]).await?;
//! print!("{}", report);
//! # Ok(())
//! # }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::GitslaveError;
pub use crate::common::result::GitslaveResult as Result;
