//! Tests for the HTTP parser.

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::parser::{parse_request, Error, Method, Request};

    fn parse(bytes: &[u8]) -> Request {
        parse_request(bytes).unwrap()
    }

    #[test]
    fn test_parse_simple_get_request() {
        let result = parse(b"GET /path?a=1&b=2 HTTP/1.1\r\nHost: example.com\r\n\r\n");
        assert_eq!(result.method, Method::GET);
        assert_eq!(result.path, "/path");
        assert_eq!(result.raw_url, "/path?a=1&b=2");
        assert_eq!(
            result.params,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_parse_post_request() {
        let result = parse(b"POST /submit HTTP/1.1\r\n\r\n");
        assert_eq!(result.method, Method::POST);
        assert_eq!(result.path, "/submit");
    }

    #[test]
    fn test_url_without_query_string() {
        let result = parse(b"GET /index.html HTTP/1.1\r\n\r\n");
        assert_eq!(result.path, "/index.html");
        assert_eq!(result.raw_url, "/index.html");
        assert!(result.params.is_empty());
    }

    #[test]
    fn test_trailing_pair_without_ampersand() {
        // The final key=value pair is captured even without a trailing '&'.
        let result = parse(b"GET /p?k=v HTTP/1.1\r\n\r\n");
        assert_eq!(result.path, "/p");
        assert_eq!(result.raw_url, "/p?k=v");
        assert_eq!(result.params, vec![("k".to_string(), "v".to_string())]);
    }

    #[test]
    fn test_bare_key_without_equals_yields_no_pair() {
        let result = parse(b"GET /p?flag HTTP/1.1\r\n\r\n");
        assert_eq!(result.path, "/p");
        assert_eq!(result.raw_url, "/p?flag");
        assert!(result.params.is_empty());
    }

    #[test]
    fn test_empty_key_is_dropped() {
        let result = parse(b"GET /p?=v&a=1 HTTP/1.1\r\n\r\n");
        assert_eq!(result.params, vec![("a".to_string(), "1".to_string())]);
    }

    #[test]
    fn test_empty_value_is_kept() {
        let result = parse(b"GET /p?a=&b=2 HTTP/1.1\r\n\r\n");
        assert_eq!(
            result.params,
            vec![
                ("a".to_string(), String::new()),
                ("b".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_duplicate_keys_preserved_in_order() {
        let result = parse(b"GET /p?a=1&a=2&a=3 HTTP/1.1\r\n\r\n");
        assert_eq!(
            result.params,
            vec![
                ("a".to_string(), "1".to_string()),
                ("a".to_string(), "2".to_string()),
                ("a".to_string(), "3".to_string())
            ]
        );
    }

    #[test]
    fn test_ampersand_without_pending_key() {
        let result = parse(b"GET /p?a&b=1 HTTP/1.1\r\n\r\n");
        assert_eq!(result.params, vec![("b".to_string(), "1".to_string())]);
    }

    #[test]
    fn test_second_question_mark_is_ordinary() {
        // Only the first '?' separates path from query; later ones are plain
        // query-string characters.
        let result = parse(b"GET /p?a=1?b HTTP/1.1\r\n\r\n");
        assert_eq!(result.path, "/p");
        assert_eq!(result.raw_url, "/p?a=1?b");
        assert_eq!(result.params, vec![("a".to_string(), "1?b".to_string())]);
    }

    #[test]
    fn test_second_equals_recaptures_key() {
        let result = parse(b"GET /p?a=b=c HTTP/1.1\r\n\r\n");
        assert_eq!(result.params, vec![("b".to_string(), "c".to_string())]);
    }

    #[test]
    fn test_scan_stops_at_space_after_url() {
        let result = parse(b"GET /p?a=1 HTTP/1.1\r\nX-Ignored: a=b&c=d\r\n\r\n");
        assert_eq!(result.raw_url, "/p?a=1");
        assert_eq!(result.params, vec![("a".to_string(), "1".to_string())]);
    }

    #[test]
    fn test_url_terminated_by_end_of_buffer() {
        // No trailing version token at all; the scan ends at the buffer end.
        let result = parse(b"GET /p?k=v");
        assert_eq!(result.path, "/p");
        assert_eq!(result.raw_url, "/p?k=v");
        assert_eq!(result.params, vec![("k".to_string(), "v".to_string())]);
    }

    #[test]
    fn test_incomplete_request() {
        let result = parse_request(b"GET");
        assert!(matches!(result, Err(Error::Incomplete(ref s)) if s == "GET"));
    }

    #[test]
    fn test_empty_request_is_incomplete() {
        let result = parse_request(b"");
        assert!(matches!(result, Err(Error::Incomplete(ref s)) if s.is_empty()));
    }

    #[test]
    fn test_unsupported_method() {
        let result = parse_request(b"PUT /index.html HTTP/1.1\r\n\r\n");
        assert!(matches!(result, Err(Error::UnsupportedMethod(ref m)) if m == "PUT"));
    }

    #[test]
    fn test_error_messages_name_the_offender() {
        assert_eq!(
            parse_request(b"DELETE / HTTP/1.1").unwrap_err().to_string(),
            "Unsupported method: 'DELETE'"
        );
        assert_eq!(
            parse_request(b"GE").unwrap_err().to_string(),
            "Incomplete request: 'GE'"
        );
    }

    #[test]
    fn test_param_lookup_returns_first_match() {
        let result = parse(b"GET /p?a=1&a=2 HTTP/1.1\r\n\r\n");
        assert_eq!(result.param("a"), Some("1"));
        assert_eq!(result.param("missing"), None);
    }

    #[test]
    fn test_params_json_last_duplicate_wins() {
        let result = parse(b"GET /p?a=1&b=2&a=3 HTTP/1.1\r\n\r\n");
        let object = result.params_json();
        assert_eq!(object.len(), 2);
        assert_eq!(object.get("a"), Some(&Value::String("3".to_string())));
        assert_eq!(object.get("b"), Some(&Value::String("2".to_string())));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::GET.to_string(), "GET");
        assert_eq!(Method::POST.to_string(), "POST");
    }
}
