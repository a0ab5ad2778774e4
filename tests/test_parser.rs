use sstt::http::parser::{ParseError, parse_http_request};
use sstt::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = "GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.headers, vec!["Host: example.com".to_string()]);
}

#[test]
fn test_parse_keeps_header_lines_in_order() {
    let req = "GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(
        parsed.headers,
        vec!["Host: example.com", "User-Agent: test-client", "Accept: */*"]
    );
}

#[test]
fn test_parse_stops_at_blank_line() {
    let req = "GET / HTTP/1.1\r\nHost: a\r\n\r\nnot-a-header: x";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers, vec!["Host: a"]);
}

#[test]
fn test_parse_request_line_only() {
    let parsed = parse_http_request("GET /index.html HTTP/1.1").unwrap();

    assert_eq!(parsed.path, "/index.html");
    assert!(parsed.headers.is_empty());
}

#[test]
fn test_parse_splits_query_string() {
    let req = "GET /search.html?q=rust&x=1 HTTP/1.1\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/search.html");
    assert_eq!(parsed.query.as_deref(), Some("q=rust&x=1"));
}

#[test]
fn test_parse_various_http_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("HEAD", Method::HEAD),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
    ];

    for (text, expected) in methods {
        let req = format!("{} /resource HTTP/1.1\r\n\r\n", text);
        let parsed = parse_http_request(&req).unwrap();
        assert_eq!(parsed.method, expected);
    }
}

#[test]
fn test_parse_unknown_method() {
    let result = parse_http_request("PATCH / HTTP/1.1\r\n\r\n");
    assert_eq!(result.unwrap_err(), ParseError::InvalidMethod);

    let result = parse_http_request("get / HTTP/1.1\r\n\r\n");
    assert_eq!(result.unwrap_err(), ParseError::InvalidMethod);
}

#[test]
fn test_parse_other_versions_pass_the_grammar() {
    let parsed = parse_http_request("GET / HTTP/1.0\r\n\r\n").unwrap();
    assert_eq!(parsed.version, "HTTP/1.0");
    assert!(!parsed.is_http11());
}

#[test]
fn test_parse_malformed_version() {
    for line in ["GET / HTTP/11", "GET / HTTPS/1.1", "GET / HTTP/1.1.1", "GET / 1.1"] {
        let result = parse_http_request(line);
        assert_eq!(result.unwrap_err(), ParseError::InvalidVersion, "{}", line);
    }
}

#[test]
fn test_parse_target_must_be_absolute_path() {
    let result = parse_http_request("GET index.html HTTP/1.1\r\n\r\n");
    assert_eq!(result.unwrap_err(), ParseError::InvalidTarget);
}

#[test]
fn test_parse_garbage() {
    assert_eq!(
        parse_http_request("hello\r\n\r\n").unwrap_err(),
        ParseError::InvalidRequest
    );
    assert_eq!(parse_http_request("").unwrap_err(), ParseError::InvalidRequest);
    assert_eq!(
        parse_http_request("GET /\r\n\r\n").unwrap_err(),
        ParseError::InvalidRequest
    );
}
