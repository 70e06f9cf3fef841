pub mod format;
pub mod parser;

pub use format::format_output;
pub use parser::{is_integer_literal, parse_unique_sorted, MAX_VALUE, MIN_VALUE};
