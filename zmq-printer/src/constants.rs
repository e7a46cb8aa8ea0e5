pub const DEFAULT_HOST: &str = "127.0.0.1";

/// The four local publisher ports the listener connects to when no
/// endpoint is configured. Single-port setups use `-p 1226` or `-p 28334`.
pub const DEFAULT_PORTS: [u16; 4] = [1222, 1226, 7600, 1228];

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

pub const ENDPOINTS_ENV: &str = "ZMQ_PRINTER_ENDPOINTS";

// empty prefix, matches every message
pub const SUBSCRIBE_ALL: &[u8] = b"";
