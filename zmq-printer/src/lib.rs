//! Subscribe to every message published on a set of ZeroMQ endpoints and
//! print each frame as it arrives.

pub mod config;
pub mod constants;
pub mod endpoint;
pub mod error;
pub mod listener;
pub mod output;
pub mod socket;

pub use config::Cli;
pub use endpoint::{Endpoint, ParseEndpointError};
pub use error::{Error, Result};
pub use listener::Listener;
pub use output::{FramePrinter, OutputFormat};
pub use socket::{SubscriberSocket, ZmqSubscriber};
