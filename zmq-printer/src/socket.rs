use crate::constants::SUBSCRIBE_ALL;
use crate::endpoint::Endpoint;
use crate::error::Result;
use log::debug;
use std::time::Duration;

/// The subscribe side of a publish/subscribe transport.
///
/// One socket multiplexes every connected publisher. Implementations keep
/// per-publisher ordering but make no promise across publishers.
pub trait SubscriberSocket {
    /// Registers the empty-prefix filter, so every message is delivered.
    fn subscribe_all(&mut self) -> Result<()>;

    /// Starts connecting to `endpoint`. Returning `Ok` does not mean a
    /// publisher is listening there.
    fn connect(&mut self, endpoint: &Endpoint) -> Result<()>;

    /// Waits at most `timeout` for the next frame. `Ok(None)` means the
    /// wait ended without a frame.
    fn recv_frame(&mut self, timeout: Duration) -> Result<Option<Vec<u8>>>;
}

pub struct ZmqSubscriber {
    socket: zmq::Socket,
}

impl ZmqSubscriber {
    pub fn open(ctx: &zmq::Context) -> Result<ZmqSubscriber> {
        let socket = ctx.socket(zmq::SUB)?;
        // pending frames are dropped on close instead of holding up context teardown
        socket.set_linger(0)?;
        debug!("Opened SUB socket");
        Ok(ZmqSubscriber { socket })
    }
}

impl SubscriberSocket for ZmqSubscriber {
    fn subscribe_all(&mut self) -> Result<()> {
        self.socket.set_subscribe(SUBSCRIBE_ALL)?;
        debug!("Subscribed to all topics");
        Ok(())
    }

    fn connect(&mut self, endpoint: &Endpoint) -> Result<()> {
        debug!("Connecting to {}", endpoint);
        self.socket.connect(&endpoint.to_string())?;
        Ok(())
    }

    fn recv_frame(&mut self, timeout: Duration) -> Result<Option<Vec<u8>>> {
        let timeout_ms = i64::try_from(timeout.as_millis()).unwrap_or(i64::MAX);
        let mut items = [self.socket.as_poll_item(zmq::POLLIN)];
        match zmq::poll(&mut items, timeout_ms) {
            Ok(_) => {}
            // a signal woke us up, let the caller look at its shutdown token
            Err(zmq::Error::EINTR) => return Ok(None),
            Err(err) => return Err(err.into()),
        }
        if !items[0].is_readable() {
            return Ok(None);
        }
        let frame = self.socket.recv_bytes(0)?;
        Ok(Some(frame))
    }
}
