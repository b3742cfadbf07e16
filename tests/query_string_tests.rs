use query_string::{
    parse, parse_with_settings, stringify, stringify_json, stringify_with_settings, ParseSettings,
    QueryMap, QueryStringError, QueryValue, Settings,
};
use serde_json::json;

#[cfg(test)]
mod query_string_tests {
    use super::*;

    fn sample_map() -> QueryMap {
        let mut params = QueryMap::new();
        params.insert("name", "Ada Lovelace");
        params.insert("list", vec!["a", "b", "c"]);
        params.insert("path", "/usr/local/bin");
        params.insert("symbols", "!*'();:@&=+$,/?#[]");
        params.insert("tilde", "~-_.");
        params.insert("empty", "");
        params
    }

    #[test]
    fn test_url_without_query_is_empty() {
        for url in ["http://example.com", "example.com/path", "#frag", ""] {
            assert!(parse(url).is_empty(), "expected no keys for {:?}", url);
        }
    }

    #[test]
    fn test_fragment_is_excluded() {
        let params = parse("http://x?key=value#frag");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("key"), Some(&QueryValue::from("value")));
    }

    #[test]
    fn test_repeated_keys_keep_order() {
        let params = parse("http://x?list=a&list=b&list=c");
        assert_eq!(params.get_all("list"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_stringify_properties() {
        let mut params = QueryMap::new();
        params.insert("list", vec!["a", "b", "c"]);
        assert!(stringify(&params).contains("list=a&list=b&list=c"));

        assert_eq!(stringify(&QueryMap::new()), "");

        let mut params = QueryMap::new();
        params.insert("foo", "bar");
        assert!(stringify(&params).starts_with('?'));

        let mut params = QueryMap::new();
        params.insert("special", "a:1");
        assert!(stringify(&params).contains("special=a%3A1"));
    }

    #[test]
    fn test_round_trip() {
        let params = sample_map();
        let encoded = stringify(&params);
        assert_eq!(parse(&encoded), params);

        let url = format!("https://example.com/page{}#section", encoded);
        assert_eq!(parse(&url), params);
    }

    #[test]
    fn test_round_trip_single_element_list_becomes_scalar() {
        let mut params = QueryMap::new();
        params.insert("one", vec!["only"]);

        let decoded = parse(&stringify(&params));
        assert_eq!(decoded.get("one"), Some(&QueryValue::from("only")));
        assert_ne!(decoded, params);
    }

    #[test]
    fn test_reparse_is_stable() {
        let url = "http://x?b=2&a=1&b=3&c=%20x%20&flag";
        let first = parse(url);
        let second = parse(&stringify(&first));
        assert_eq!(first, second);
        assert_eq!(stringify(&first), stringify(&second));
    }

    #[test]
    fn test_form_settings_round_trip() {
        let settings = Settings::from_toml_str(
            "[parse]\nform_encoded = true\n\n[stringify]\nform_encoded = true\n",
        )
        .unwrap();

        let params = sample_map();
        let encoded = stringify_with_settings(&params, &settings.stringify);
        assert!(encoded.contains("name=Ada+Lovelace"));
        assert_eq!(parse_with_settings(&encoded, &settings.parse), params);

        // Without form decoding the '+' stays literal
        let plain = parse_with_settings(&encoded, &ParseSettings::default());
        assert_eq!(plain.get("name"), Some(&QueryValue::from("Ada+Lovelace")));
    }

    #[test]
    fn test_json_entry_points() {
        let params = parse("?tag=x&tag=y&page=2");
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, json!({"tag": ["x", "y"], "page": "2"}));
        assert_eq!(stringify_json(&value).unwrap(), "?tag=x&tag=y&page=2");

        match stringify_json(&json!(true)) {
            Err(QueryStringError::InvalidArgument { operation, reason }) => {
                assert_eq!(operation, "stringify");
                assert!(reason.contains("must be an object"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
