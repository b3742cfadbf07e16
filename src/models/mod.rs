//! Core data models for the library
//!
//! A parsed query string is a [`QueryMap`]: an insertion-ordered map from
//! key to [`QueryValue`].
//!
//! ```rust
//! use query_string::{QueryMap, QueryValue};
//!
//! let mut params = QueryMap::new();
//! params.append("tag", "a");
//! params.append("tag", "b");
//! params.append("page", "2");
//!
//! assert_eq!(params.get("tag"), Some(&QueryValue::from(vec!["a", "b"])));
//! assert_eq!(params.get("page").and_then(QueryValue::as_single), Some("2"));
//! ```

mod query_map;

pub use query_map::*;
