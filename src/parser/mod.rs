pub mod query;

// Re-export parsing entry points
pub use query::{parse, parse_bytes, parse_json, parse_with, parse_with_settings};
