//! URL encoding/decoding utilities

use log::warn;

/// Encodes a string as a URI component
///
/// Everything except the unreserved set (`A-Z a-z 0-9 - _ . ~`) is
/// percent-encoded, so a space becomes `%20`.
///
/// # Arguments
/// * `input` - The string to encode
///
/// # Returns
/// * String containing the URL-encoded input
///
/// # Examples
/// ```
/// use query_string::utils::url::url_encode;
///
/// let encoded = url_encode("Hello World!");
/// assert_eq!(encoded, "Hello%20World%21");
/// ```
pub fn url_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Decodes a URL-encoded string
///
/// # Arguments
/// * `input` - The URL-encoded string to decode
///
/// # Returns
/// * String containing the decoded input
/// * Returns the original string if the decoded bytes are not valid UTF-8
///
/// # Examples
/// ```
/// use query_string::utils::url::url_decode;
///
/// let decoded = url_decode("Hello%20World%21");
/// assert_eq!(decoded, "Hello World!");
/// ```
pub fn url_decode(input: &str) -> String {
    urlencoding::decode(input)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|err| {
            warn!("Keeping undecodable component {:?}: {}", input, err);
            input.to_string()
        })
}

/// Encodes a string for an `application/x-www-form-urlencoded` body
///
/// Same as [`url_encode`] except that a space is written as `+`.
///
/// # Examples
/// ```
/// use query_string::utils::url::form_encode;
///
/// assert_eq!(form_encode("a b+c"), "a+b%2Bc");
/// ```
pub fn form_encode(input: &str) -> String {
    url_encode(input).replace("%20", "+")
}

/// Decodes a form-encoded string, treating `+` as a space
///
/// # Examples
/// ```
/// use query_string::utils::url::form_decode;
///
/// assert_eq!(form_decode("a+b%2Bc"), "a b+c");
/// ```
pub fn form_decode(input: &str) -> String {
    url_decode(&input.replace('+', " "))
}

/// Returns the query segment of a URL
///
/// The segment starts right after the first `?` and ends before the first
/// `#` that follows it, or at the end of the input.
///
/// # Returns
/// * `None` if the URL has no `?`
pub fn query_segment(url: &str) -> Option<&str> {
    let start = url.find('?')? + 1;
    let rest = &url[start..];
    Some(rest.find('#').map_or(rest, |end| &rest[..end]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encode_reserved() {
        assert_eq!(url_encode("a:1"), "a%3A1");
        assert_eq!(url_encode("a b"), "a%20b");
        assert_eq!(url_encode("-_.~"), "-_.~");
        assert_eq!(url_encode("k=v&x"), "k%3Dv%26x");
        assert_eq!(url_encode("ü"), "%C3%BC");
    }

    #[test]
    fn test_url_decode() {
        assert_eq!(url_decode("a%3A1"), "a:1");
        assert_eq!(url_decode("%C3%BC"), "ü");
        // `+` is literal outside of form encoding
        assert_eq!(url_decode("a+b"), "a+b");
    }

    #[test]
    fn test_url_decode_keeps_invalid_input() {
        assert_eq!(url_decode("%FF"), "%FF");
        assert_eq!(url_decode("100%"), "100%");
    }

    #[test]
    fn test_form_codec() {
        assert_eq!(form_encode("hello world"), "hello+world");
        assert_eq!(form_decode("hello+world%21"), "hello world!");
    }

    #[test]
    fn test_query_segment() {
        assert_eq!(query_segment("http://example.com"), None);
        assert_eq!(query_segment("http://example.com?"), Some(""));
        assert_eq!(query_segment("http://x?key=value#frag"), Some("key=value"));
        assert_eq!(query_segment("http://x?a=1?b=2"), Some("a=1?b=2"));
        assert_eq!(query_segment("http://x/#top?a=1"), Some("a=1"));
        assert_eq!(query_segment("?a=1#x#y"), Some("a=1"));
    }
}
