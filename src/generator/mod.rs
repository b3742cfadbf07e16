pub mod query;

// Re-export query string writers
pub use query::{stringify, stringify_json, stringify_with, stringify_with_settings};
