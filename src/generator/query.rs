use log::trace;
use serde_json::Value;

use crate::error::Result;
use crate::models::QueryMap;
use crate::settings::StringifySettings;
use crate::utils::url::{form_encode, url_encode};

/// Convert a map into a query string
///
/// List values are written as one `key=value` entry per element. The result
/// starts with `?` when at least one entry was written and is empty
/// otherwise; `None` counts as a map with no keys.
///
/// # Examples
/// ```
/// use query_string::{stringify, QueryMap};
///
/// let mut params = QueryMap::new();
/// params.insert("list", vec!["a", "b"]);
/// params.insert("special", "a:1");
/// assert_eq!(stringify(&params), "?list=a&list=b&special=a%3A1");
/// assert_eq!(stringify(None), "");
/// ```
pub fn stringify<'a>(params: impl Into<Option<&'a QueryMap>>) -> String {
    stringify_with_settings(params, &StringifySettings::default())
}

/// Convert a map into a query string using the given settings
pub fn stringify_with_settings<'a>(
    params: impl Into<Option<&'a QueryMap>>,
    settings: &StringifySettings,
) -> String {
    let encode = if settings.form_encoded {
        form_encode
    } else {
        url_encode
    };
    stringify_with(params, encode)
}

/// Convert a map into a query string, encoding every key and value with
/// `encode`
pub fn stringify_with<'a, F>(params: impl Into<Option<&'a QueryMap>>, encode: F) -> String
where
    F: Fn(&str) -> String,
{
    let Some(params) = params.into() else {
        return String::new();
    };

    let mut pairs = Vec::new();
    for (key, value) in params.iter() {
        let encoded_key = encode(key);
        for each in value.iter() {
            pairs.push(format!("{}={}", encoded_key, encode(each)));
        }
    }

    if pairs.is_empty() {
        return String::new();
    }

    trace!("Wrote {} pairs for {} keys", pairs.len(), params.len());
    format!("?{}", pairs.join("&"))
}

/// Convert a JSON object (or `null`) into a query string
///
/// Members may be strings, numbers, booleans, `null` or arrays of those.
/// Fails with `InvalidArgument` for any other top-level value or for nested
/// objects and arrays.
pub fn stringify_json(params: &Value) -> Result<String> {
    let params = QueryMap::try_from(params)?;
    Ok(stringify(&params))
}
