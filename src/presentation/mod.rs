//! Presentation layer: command line bootstrap and report coloring

pub mod cli;
pub mod ui;
