//! Connection Manager
//!
//! Owns the stream to the daemon, redials it when a write finds the peer
//! gone, and bounds every write and line read by the configured timeout.

use std::io::{self, BufReader};
use std::time::{Duration, Instant};

use crate::config::Transport;
use crate::error::{RrdError, Result};
use crate::protocol::{self, Command, Reply};
use super::{DeadlineStream, Stream};

/// How a failed write should be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteFault {
    /// The peer closed its end (EPIPE)
    BrokenPipe,

    /// The peer reset the connection (ECONNRESET)
    ConnectionReset,

    /// Anything else, including timeouts
    Other,
}

impl WriteFault {
    /// Sort a write error into one of the classes above
    pub fn classify(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::BrokenPipe => WriteFault::BrokenPipe,
            io::ErrorKind::ConnectionReset => WriteFault::ConnectionReset,
            _ => WriteFault::Other,
        }
    }

    /// Only a dead peer is worth a redial; the write never reached it.
    pub fn is_reconnectable(self) -> bool {
        matches!(self, WriteFault::BrokenPipe | WriteFault::ConnectionReset)
    }
}

/// A single connection to rrdcached
pub struct Connection {
    /// Buffered read half (line-oriented)
    reader: BufReader<DeadlineStream>,

    /// Write half; commands are written in one call so it stays unbuffered
    writer: DeadlineStream,

    /// Address as dialed (default port already applied)
    address: String,

    transport: Transport,

    timeout: Duration,

    /// A read failed mid-reply; unread bytes may still be in flight
    desynced: bool,
}

impl Connection {
    /// Dial the daemon and set up a line reader over the stream
    pub fn connect(address: &str, transport: Transport, timeout: Duration) -> Result<Self> {
        let dial_err = |source: io::Error| RrdError::Connect {
            address: address.to_string(),
            source,
        };

        let stream = Stream::dial(address, transport, timeout).map_err(dial_err)?;
        let deadline = Instant::now() + timeout;
        let reader = DeadlineStream::new(stream.try_clone().map_err(dial_err)?, deadline);

        tracing::debug!("Connected to rrdcached at {} ({:?})", address, transport);

        Ok(Self {
            reader: BufReader::new(reader),
            writer: DeadlineStream::new(stream, deadline),
            address: address.to_string(),
            transport,
            timeout,
            desynced: false,
        })
    }

    /// Replace the stream with a freshly dialed one
    ///
    /// Any buffered but unread reply data is discarded with the old stream.
    pub fn reconnect(&mut self) -> Result<()> {
        *self = Self::connect(&self.address, self.transport, self.timeout)?;
        Ok(())
    }

    /// Push the deadline out to now + timeout
    pub fn refresh_deadline(&mut self) {
        let deadline = Instant::now() + self.timeout;
        self.writer.set_deadline(deadline);
        self.reader.get_mut().set_deadline(deadline);
    }

    /// Write a command, redialing while the peer turns out to be gone
    pub fn send(&mut self, command: &Command) -> Result<()> {
        loop {
            let write_error = match protocol::write_command(&mut self.writer, command) {
                Ok(()) => return Ok(()),
                Err(e) => e,
            };

            if !WriteFault::classify(&write_error).is_reconnectable() {
                // Part of the command may already be on the wire.
                self.desynced = true;
                return Err(RrdError::Write(write_error));
            }

            tracing::warn!(
                "write to {} caused [{}]; trying to reestablish connection",
                self.address,
                write_error
            );
            if let Err(e) = self.reconnect() {
                return Err(RrdError::Reconnect {
                    write_error,
                    source: Box::new(e),
                });
            }
            self.refresh_deadline();
        }
    }

    /// Read one framed reply, refreshing the deadline before every line
    pub fn receive(&mut self) -> Result<Reply> {
        let Self {
            reader, timeout, ..
        } = self;

        let reply = protocol::read_reply(|| {
            reader.get_mut().set_deadline(Instant::now() + *timeout);
            protocol::read_line(reader)
        });

        // A daemon error is a complete reply; anything else may leave part
        // of the reply unread.
        self.desynced = matches!(&reply, Err(e) if !matches!(e, RrdError::Protocol { .. }));
        reply
    }

    /// One request/response exchange
    ///
    /// If the previous reply was not read to its end, the stream is redialed
    /// first so its leftover lines cannot be taken for this reply.
    pub fn exchange(&mut self, command: &Command) -> Result<Reply> {
        if self.desynced {
            tracing::warn!(
                "previous reply from {} was not fully read; reestablishing connection",
                self.address
            );
            self.reconnect()?;
        }

        self.refresh_deadline();
        self.send(command)?;
        tracing::debug!("rrdcached command: [{}]", command);

        self.refresh_deadline();
        self.receive()
    }

    /// Send `quit` and close the stream
    ///
    /// The daemon does not acknowledge `quit`, so nothing is read back. A
    /// failed close wins over a failed `quit`.
    pub fn close(mut self) -> Result<()> {
        self.refresh_deadline();
        let quit = protocol::write_command(&mut self.writer, &Command::new("quit"));

        match self.writer.get_ref().shutdown() {
            // Peer already hung up; the descriptor is still released on drop.
            Err(e) if e.kind() == io::ErrorKind::NotConnected => {}
            Err(e) => return Err(RrdError::Io(e)),
            Ok(()) => {}
        }
        quit.map_err(RrdError::Write)
    }
}
