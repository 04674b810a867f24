use cloth::http::parser::parse;

#[test]
fn test_parse_simple_get_request() {
    let parsed = parse(b"GET /index.html HTTP/1.0\r\nHost: example.com\r\nUser-Agent: curl/8.0\r\n\r\n");

    assert_eq!(parsed.resource.as_deref(), Some("GET /index.html HTTP/1.0"));
    assert_eq!(parsed.host.as_deref(), Some("example.com"));
    assert_eq!(parsed.agent.as_deref(), Some("curl/8.0"));
}

#[test]
fn test_parse_resource_keeps_method_prefix() {
    let parsed = parse(b"GET / HTTP/1.0\r\n\r\n");

    assert_eq!(parsed.resource.as_deref(), Some("GET / HTTP/1.0"));
}

#[test]
fn test_parse_lowercase_method_is_captured() {
    let parsed = parse(b"get /a.html HTTP/1.0\r\n\r\n");

    assert_eq!(parsed.resource.as_deref(), Some("get /a.html HTTP/1.0"));
}

#[test]
fn test_parse_missing_headers_stay_empty() {
    let parsed = parse(b"GET /index.html HTTP/1.0\r\n\r\n");

    assert_eq!(parsed.host, None);
    assert_eq!(parsed.agent, None);
}

#[test]
fn test_parse_non_get_request_has_no_resource() {
    let parsed = parse(b"POST /index.html HTTP/1.0\r\nHost: example.com\r\n\r\n");

    assert_eq!(parsed.resource, None);
    assert_eq!(parsed.host.as_deref(), Some("example.com"));
}

#[test]
fn test_first_matching_header_wins() {
    let parsed = parse(b"GET / HTTP/1.0\r\nHost: first\r\nHost: second\r\n\r\n");

    assert_eq!(parsed.host.as_deref(), Some("first"));
}

#[test]
fn test_parse_ignores_unknown_headers() {
    let parsed = parse(b"GET / HTTP/1.0\r\nAccept: */*\r\nConnection: close\r\n\r\n");

    assert_eq!(parsed.resource.as_deref(), Some("GET / HTTP/1.0"));
    assert_eq!(parsed.host, None);
}

#[test]
fn test_parse_tolerates_bare_line_feeds() {
    let parsed = parse(b"GET / HTTP/1.0\nHost: example.com\n\n");

    assert_eq!(parsed.resource.as_deref(), Some("GET / HTTP/1.0"));
    assert_eq!(parsed.host.as_deref(), Some("example.com"));
}

#[test]
fn test_parse_tolerates_invalid_utf8() {
    let parsed = parse(b"GET /\xff\xfe.html HTTP/1.0\r\n\r\n");

    assert!(parsed.resource.is_some());
}

#[test]
fn test_parse_empty_buffer() {
    let parsed = parse(b"");

    assert_eq!(parsed.resource, None);
    assert_eq!(parsed.host, None);
    assert_eq!(parsed.agent, None);
}
