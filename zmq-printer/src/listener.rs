use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use crate::output::FramePrinter;
use crate::socket::SubscriberSocket;
use log::debug;
use std::io::Write;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Connects one subscriber socket to every endpoint and prints whatever
/// arrives on it.
pub struct Listener<S, W: Write> {
    socket: S,
    printer: FramePrinter<W>,
    poll_interval: Duration,
}

impl<S: SubscriberSocket, W: Write> Listener<S, W> {
    pub fn new(socket: S, printer: FramePrinter<W>, poll_interval: Duration) -> Listener<S, W> {
        Listener {
            socket,
            printer,
            poll_interval,
        }
    }

    /// Subscribes to everything, then connects to each endpoint in order and
    /// announces it. Stops at the first endpoint that fails to connect.
    pub fn setup(&mut self, endpoints: &[Endpoint]) -> Result<()> {
        if endpoints.is_empty() {
            return Err(Error::NoEndpoints);
        }
        self.socket.subscribe_all()?;
        for endpoint in endpoints {
            self.socket.connect(endpoint)?;
            self.printer.announce(endpoint)?;
        }
        Ok(())
    }

    /// Prints frames until `shutdown` is cancelled and returns how many were
    /// printed. Never returns on its own otherwise.
    pub fn run(&mut self, shutdown: &CancellationToken) -> Result<u64> {
        while !shutdown.is_cancelled() {
            if let Some(frame) = self.socket.recv_frame(self.poll_interval)? {
                debug!("Received frame of {} bytes", frame.len());
                self.printer.print_frame(&frame)?;
            }
        }
        Ok(self.printer.printed())
    }

    pub fn into_parts(self) -> (S, FramePrinter<W>) {
        (self.socket, self.printer)
    }
}
