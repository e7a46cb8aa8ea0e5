use crate::constants::{DEFAULT_HOST, DEFAULT_POLL_INTERVAL_MS, DEFAULT_PORTS, ENDPOINTS_ENV};
use crate::endpoint::{Endpoint, ParseEndpointError};
use crate::output::OutputFormat;
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "zmq-printer", about = "Print every message published on ZeroMQ endpoints")]
pub struct Cli {
    /// Full endpoints, e.g. tcp://127.0.0.1:1226. Overrides --host/--port
    #[arg(short, long, value_delimiter = ' ', num_args = 1.., env = ENDPOINTS_ENV)]
    pub endpoint: Vec<Endpoint>,
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,
    #[arg(short, long, value_delimiter = ' ', num_args = 1.., default_values_t = DEFAULT_PORTS)]
    pub port: Vec<u16>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Raw)]
    pub format: OutputFormat,
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_interval_ms: u64,
    #[arg(short, long, action)]
    pub debug: bool,
}

impl Cli {
    /// Explicit endpoints win, otherwise one endpoint per port on `host`.
    pub fn endpoints(&self) -> Result<Vec<Endpoint>, ParseEndpointError> {
        if !self.endpoint.is_empty() {
            return Ok(self.endpoint.clone());
        }
        self.port
            .iter()
            .map(|port| Endpoint::new(&self.host, *port))
            .collect()
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("zmq-printer").chain(args.iter().copied())).unwrap()
    }

    fn rendered(cli: &Cli) -> Vec<String> {
        cli.endpoints()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn defaults_to_four_local_ports() {
        let cli = parse(&[]);
        // the env var would override the defaults
        if std::env::var_os(ENDPOINTS_ENV).is_some() {
            return;
        }
        assert_eq!(
            rendered(&cli),
            vec![
                "tcp://127.0.0.1:1222",
                "tcp://127.0.0.1:1226",
                "tcp://127.0.0.1:7600",
                "tcp://127.0.0.1:1228",
            ]
        );
        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.poll_interval(), Duration::from_millis(100));
        assert!(!cli.debug);
    }

    #[test]
    fn single_port_presets() {
        let cli = parse(&["-p", "1226"]);
        assert_eq!(rendered(&cli), vec!["tcp://127.0.0.1:1226"]);

        let cli = parse(&["--host", "localhost", "--port", "28334"]);
        assert_eq!(rendered(&cli), vec!["tcp://localhost:28334"]);
    }

    #[test]
    fn space_delimited_ports() {
        let cli = parse(&["-p", "1222 1226"]);
        assert_eq!(
            rendered(&cli),
            vec!["tcp://127.0.0.1:1222", "tcp://127.0.0.1:1226"]
        );
    }

    #[test]
    fn explicit_endpoints_override_ports() {
        let cli = parse(&[
            "-e",
            "tcp://10.0.0.1:1226 tcp://10.0.0.2:28334",
            "-p",
            "9999",
            "-f",
            "bytes",
            "-d",
        ]);
        assert_eq!(
            rendered(&cli),
            vec!["tcp://10.0.0.1:1226", "tcp://10.0.0.2:28334"]
        );
        assert_eq!(cli.format, OutputFormat::Bytes);
        assert!(cli.debug);
    }

    #[test]
    fn rejects_bad_values() {
        let args = ["zmq-printer", "-e", "udp://127.0.0.1:1222"];
        assert!(Cli::try_parse_from(args).is_err());

        let args = ["zmq-printer", "--poll-interval-ms", "0"];
        assert!(Cli::try_parse_from(args).is_err());

        let args = ["zmq-printer", "-f", "xml"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn bad_host_surfaces_as_endpoint_error() {
        let cli = parse(&["--host", "::1", "-p", "1222"]);
        if std::env::var_os(ENDPOINTS_ENV).is_some() {
            return;
        }
        let err = cli.endpoints().unwrap_err();
        assert_eq!(err.reason, "ipv6 hosts must be bracketed");
    }
}
