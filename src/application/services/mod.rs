pub mod command_parser;
pub mod output_aggregator;

pub use command_parser::{CommandParser, RECOGNIZED_COMMANDS};
pub use output_aggregator::OutputAggregator;
