const RESOURCE_INTRODUCER: &str = "GET ";
const HOST_INTRODUCER: &str = "Host: ";
const AGENT_INTRODUCER: &str = "User-Agent: ";

/// Fields extracted from one raw request.
///
/// The resource keeps its method prefix (`GET /index.html HTTP/1.0`);
/// the gates downstream consume it. Host and user-agent hold only the
/// value after the header name.
#[derive(Debug, Default, PartialEq)]
pub struct ParsedRequest {
    pub resource: Option<String>,
    pub host: Option<String>,
    pub agent: Option<String>,
}

/// Tokenize the request buffer into header lines and pick out the three
/// the server understands. The first line matching an introducer wins;
/// repeats are ignored. Bytes that are not valid UTF-8 are decoded
/// lossily rather than rejected.
pub fn parse(raw: &[u8]) -> ParsedRequest {
    let text = String::from_utf8_lossy(raw);
    let mut parsed = ParsedRequest::default();

    for line in text.lines() {
        if parsed.resource.is_none()
            && line
                .get(..RESOURCE_INTRODUCER.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(RESOURCE_INTRODUCER))
        {
            parsed.resource = Some(line.to_string());
            continue;
        }

        if let Some(rest) = line.strip_prefix(HOST_INTRODUCER) {
            if parsed.host.is_none() {
                parsed.host = Some(rest.to_string());
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix(AGENT_INTRODUCER) {
            if parsed.agent.is_none() {
                parsed.agent = Some(rest.to_string());
            }
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let parsed = parse(b"GET / HTTP/1.0\r\nHost: example.com\r\n\r\n");

        assert_eq!(parsed.resource.as_deref(), Some("GET / HTTP/1.0"));
        assert_eq!(parsed.host.as_deref(), Some("example.com"));
        assert_eq!(parsed.agent, None);
    }
}
