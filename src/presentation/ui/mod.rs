pub mod colorizer;

pub use colorizer::{ColorChoice, Colorizer};
