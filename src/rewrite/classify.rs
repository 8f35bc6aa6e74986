//! URL classification predicates.

use std::sync::LazyLock;

use regex::Regex;
use url::Host;

/// Matches absolute URLs: an optional alphabetic scheme followed by `//`.
/// Protocol-relative URLs (`//host/path`) count as absolute.
static EXTERNAL_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:[a-z]+:)?//").unwrap());

/// Returns true if `src` is an absolute or protocol-relative URL.
pub fn is_external_url(src: &str) -> bool {
    EXTERNAL_URL_RE.is_match(src)
}

/// Returns true if `host` refers to the local machine: `localhost`, any
/// 127.0.0.0/8 address, or the IPv6 loopback `::1`.
///
/// Operates on the parsed host so dotted shorthand (`127.1`) and bracketed
/// IPv6 forms are already normalized by the URL parser.
pub fn is_loopback_host(host: &Host<&str>) -> bool {
    match host {
        Host::Domain(name) => *name == "localhost",
        Host::Ipv4(addr) => addr.is_loopback(),
        Host::Ipv6(addr) => addr.is_loopback(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn host_of(input: &str) -> bool {
        let url = Url::parse(input).unwrap();
        is_loopback_host(&url.host().unwrap())
    }

    #[test]
    fn external_fully_qualified() {
        assert!(is_external_url("https://example.com/a.png"));
        assert!(is_external_url("http://example.com"));
        assert!(is_external_url("ftp://example.com/file"));
        assert!(is_external_url("HTTPS://EXAMPLE.COM"));
    }

    #[test]
    fn external_protocol_relative() {
        assert!(is_external_url("//example.com/a.png"));
        assert!(is_external_url("//google.com"));
    }

    #[test]
    fn not_external() {
        assert!(!is_external_url("/image.png"));
        assert!(!is_external_url("image.png"));
        assert!(!is_external_url("data:image/png;base64,AAAA"));
        assert!(!is_external_url(""));
    }

    #[test]
    fn loopback_hosts() {
        assert!(host_of("http://localhost:3000/x.png"));
        assert!(host_of("http://127.0.0.1/x.png"));
        // The URL parser expands dotted shorthand to a full IPv4 address.
        assert!(host_of("http://127.1/x.png"));
        assert!(host_of("http://127.255.255.254/x.png"));
        assert!(host_of("http://[::1]:8080/x.png"));
        assert!(host_of("http://[0:0:0:0:0:0:0:1]/x.png"));
    }

    #[test]
    fn non_loopback_hosts() {
        assert!(!host_of("http://example.com/x.png"));
        assert!(!host_of("http://128.0.0.1/x.png"));
        assert!(!host_of("http://[2001:db8::1]/x.png"));
        assert!(!host_of("http://localhost.example.com/x.png"));
    }
}
