use log::{debug, trace};
use serde_json::Value;

use crate::error::{QueryStringError, Result};
use crate::models::QueryMap;
use crate::settings::ParseSettings;
use crate::utils::url::{form_decode, query_segment, url_decode};

/// Parse the query string of a URL into an ordered map
///
/// Keys that occur more than once are collected into a
/// [`QueryValue::Multiple`](crate::QueryValue::Multiple) in order of
/// appearance. A URL without `?` gives an empty map, and anything after a
/// `#` is ignored.
///
/// # Examples
/// ```
/// use query_string::{parse, QueryValue};
///
/// let params = parse("http://example.com?list=a&list=b#top");
/// assert_eq!(params.get("list"), Some(&QueryValue::from(vec!["a", "b"])));
/// ```
pub fn parse(url: &str) -> QueryMap {
    parse_with_settings(url, &ParseSettings::default())
}

/// Parse a URL using the given settings
pub fn parse_with_settings(url: &str, settings: &ParseSettings) -> QueryMap {
    let decode = if settings.form_encoded {
        form_decode
    } else {
        url_decode
    };
    collect_pairs(url, decode, settings.skip_empty_pairs)
}

/// Parse a URL, decoding every key and value with `decode`
///
/// Empty `&` segments are skipped as in [`parse`].
pub fn parse_with<F>(url: &str, decode: F) -> QueryMap
where
    F: Fn(&str) -> String,
{
    collect_pairs(url, decode, true)
}

/// Parse a URL given as raw bytes
///
/// Fails with `InvalidArgument` if the bytes are not UTF-8.
pub fn parse_bytes(url: &[u8]) -> Result<QueryMap> {
    let url = std::str::from_utf8(url).map_err(|err| {
        QueryStringError::invalid_argument("parse", format!("\"url\" must be a string: {}", err))
    })?;
    Ok(parse(url))
}

/// Parse a URL held in a JSON value
///
/// Fails with `InvalidArgument` unless the value is a JSON string.
pub fn parse_json(url: &Value) -> Result<QueryMap> {
    match url {
        Value::String(url) => Ok(parse(url)),
        _ => Err(QueryStringError::invalid_argument(
            "parse",
            "\"url\" must be a string",
        )),
    }
}

fn collect_pairs<F>(url: &str, decode: F, skip_empty_pairs: bool) -> QueryMap
where
    F: Fn(&str) -> String,
{
    let mut params = QueryMap::new();

    let Some(query) = query_segment(url) else {
        trace!("No query string in {:?}", url);
        return params;
    };

    for pair in query.split('&') {
        if pair.is_empty() && skip_empty_pairs {
            continue;
        }

        // Only the text between the first and second '=' is the value
        let mut parts = pair.split('=');
        let key = parts.next().unwrap_or_default();
        let value = parts.next().unwrap_or_default();
        if parts.next().is_some() {
            debug!("Dropping text after the second '=' in {:?}", pair);
        }

        params.append(decode(key), decode(value));
    }

    trace!("Parsed {} keys from {:?}", params.len(), query);
    params
}
