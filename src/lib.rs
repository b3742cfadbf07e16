//! Parse URL query strings into ordered key/value maps and stringify them
//! back.
//!
//! ```rust
//! use query_string::{parse, stringify};
//!
//! let params = parse("https://example.com/search?q=rust%20lang&tag=a&tag=b#results");
//! assert_eq!(stringify(&params), "?q=rust%20lang&tag=a&tag=b");
//! ```

pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;

// Re-export the entry points and model types for easier access
pub use error::{QueryStringError, Result};
pub use generator::{stringify, stringify_json, stringify_with, stringify_with_settings};
pub use models::{QueryMap, QueryValue};
pub use parser::{parse, parse_bytes, parse_json, parse_with, parse_with_settings};
pub use settings::{ParseSettings, Settings, StringifySettings};
