//! Host header matching against the allowed-hosts list

/// Hosts allowed when debugging with an empty list
const DEBUG_LOCAL_HOSTS: [&str; 3] = [".localhost", "127.0.0.1", "[::1]"];

/// Ordered list of allowed host patterns.
///
/// A pattern is `*` (anything), `.example.com` (the domain and every
/// subdomain) or an exact host name. Matching is case-insensitive and
/// ignores the port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedHosts(Vec<String>);

impl AllowedHosts {
    pub fn new(patterns: Vec<String>) -> Self {
        Self(patterns)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Check a `Host` header value.
    ///
    /// With `debug` set and no patterns configured, local hosts are allowed.
    pub fn is_allowed(&self, host: &str, debug: bool) -> bool {
        let domain = match split_domain_port(host) {
            Some(domain) => domain,
            None => return false,
        };

        if debug && self.0.is_empty() {
            return DEBUG_LOCAL_HOSTS
                .iter()
                .any(|pattern| pattern_matches(pattern, &domain));
        }

        self.0.iter().any(|pattern| pattern_matches(pattern, &domain))
    }
}

/// Lower-case the host, drop the port and one trailing dot.
///
/// Bracketed IPv6 literals keep their brackets. Returns `None` for an empty
/// domain.
fn split_domain_port(host: &str) -> Option<String> {
    let host = host.trim().to_ascii_lowercase();

    let domain = if host.ends_with(']') {
        host.as_str()
    } else if host.starts_with('[') {
        // "[::1]:8000"
        match host.rfind("]:") {
            Some(end) => &host[..=end],
            None => return None,
        }
    } else {
        match host.rsplit_once(':') {
            Some((domain, port)) if port.chars().all(|c| c.is_ascii_digit()) => domain,
            Some(_) => return None,
            None => host.as_str(),
        }
    };

    let domain = domain.strip_suffix('.').unwrap_or(domain);
    if domain.is_empty() {
        None
    } else {
        Some(domain.to_string())
    }
}

fn pattern_matches(pattern: &str, domain: &str) -> bool {
    let pattern = pattern.to_ascii_lowercase();
    if pattern == "*" {
        return true;
    }

    match pattern.strip_prefix('.') {
        Some(suffix) => domain == suffix || domain.ends_with(&pattern),
        None => domain == pattern,
    }
}
