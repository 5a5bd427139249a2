mod json;
mod logging;

pub use json::{parse_content, ParsedContent};
pub use logging::setup_logging;
