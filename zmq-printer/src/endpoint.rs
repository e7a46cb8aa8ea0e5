use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const TCP_SCHEME: &str = "tcp://";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid endpoint {endpoint:?}: {reason}")]
pub struct ParseEndpointError {
    pub endpoint: String,
    pub reason: &'static str,
}

impl ParseEndpointError {
    fn new(endpoint: &str, reason: &'static str) -> ParseEndpointError {
        ParseEndpointError {
            endpoint: endpoint.to_string(),
            reason,
        }
    }
}

/// A publisher address of the form `tcp://<host>:<port>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    pub fn new(host: &str, port: u16) -> Result<Endpoint, ParseEndpointError> {
        format!("{}{}:{}", TCP_SCHEME, host, port).parse()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl FromStr for Endpoint {
    type Err = ParseEndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let address = s
            .strip_prefix(TCP_SCHEME)
            .ok_or_else(|| ParseEndpointError::new(s, "expected tcp:// scheme"))?;
        let (host, port) = address
            .rsplit_once(':')
            .ok_or_else(|| ParseEndpointError::new(s, "missing port"))?;

        if host.is_empty() {
            return Err(ParseEndpointError::new(s, "missing host"));
        }
        if host.starts_with('[') != host.ends_with(']') {
            return Err(ParseEndpointError::new(s, "unbalanced brackets in host"));
        }
        if !host.starts_with('[') && host.contains(':') {
            return Err(ParseEndpointError::new(s, "ipv6 hosts must be bracketed"));
        }
        if host.chars().any(char::is_whitespace) {
            return Err(ParseEndpointError::new(s, "whitespace in host"));
        }

        let port = match port.parse::<u16>() {
            Ok(0) => return Err(ParseEndpointError::new(s, "port must be non-zero")),
            Ok(port) => port,
            Err(_) => return Err(ParseEndpointError::new(s, "port is not a number in 1..=65535")),
        };

        Ok(Endpoint {
            host: host.to_string(),
            port,
        })
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}:{}", TCP_SCHEME, self.host, self.port)
    }
}
