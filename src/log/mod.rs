//! Log parsing for the BFS benchmark result logs.

pub mod labels;
pub mod parse;
pub mod record;

pub use parse::{ParseError, parse_log_file};
pub use record::{LogRecord, RunMetadata};
