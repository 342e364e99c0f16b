//! Client Module
//!
//! Thread-safe front end over a single rrdcached connection.
//!
//! ## Concurrency Model: Single Flight
//!
//! Replies carry no request id, so two interleaved exchanges on one stream
//! could not be told apart. Every exchange (write, then read of the full
//! reply) runs under one mutex; concurrent callers queue on it.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::config::Config;
use crate::error::{RrdError, Result};
use crate::info::{self, InfoEntry, InfoValue};
use crate::network::Connection;
use crate::protocol::{Command, Reply};

/// A client connected to rrdcached
pub struct Client {
    /// Configuration the client was built from
    config: Config,

    /// The only connection; held for a whole exchange
    conn: Mutex<Connection>,
}

impl Client {
    /// Validate `config` and dial the daemon
    pub fn connect(config: Config) -> Result<Self> {
        config.validate()?;

        let address = config.resolved_address();
        let conn = Connection::connect(&address, config.transport, config.timeout)
            .map_err(|e| e.context("failed to establish initial connection"))?;

        Ok(Self {
            config,
            conn: Mutex::new(conn),
        })
    }

    /// Run a raw command line such as `"stats"` or `"pending /x.rrd"`
    pub fn exec(&self, line: &str) -> Result<Vec<String>> {
        let command = Command::parse(line).ok_or(RrdError::EmptyCommand)?;
        self.execute(&command)
    }

    /// Run a command and return its content lines
    ///
    /// After a failed read (short reply, timeout, malformed status line) the
    /// rest of that reply may still be on its way. The next call redials
    /// before writing so it never decodes those leftovers as its own reply.
    pub fn execute(&self, command: &Command) -> Result<Vec<String>> {
        self.execute_reply(command).map(Reply::into_lines)
    }

    /// Run a command and return the framed reply
    pub fn execute_reply(&self, command: &Command) -> Result<Reply> {
        self.conn.lock().exchange(command)
    }

    /// Configuration information for `filename`
    pub fn info(&self, filename: &str) -> Result<Vec<InfoEntry>> {
        let context = || format!("info for '{}'", filename);

        let lines = self
            .execute(&Command::new("info").arg(filename))
            .map_err(|e| e.context(context()))?;
        info::parse_info(&lines).map_err(|e| e.context(context()))
    }

    /// Like [`Client::info`], keyed by name
    pub fn info_map(&self, filename: &str) -> Result<HashMap<String, InfoValue>> {
        self.info(filename).map(info::into_map)
    }

    /// RRD files known to the daemon under `prefix`
    pub fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let lines = self.execute(&Command::new("list").arg(prefix))?;
        tracing::debug!("got list result: {:?}", lines);
        Ok(lines)
    }

    /// Configuration the client was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Say `quit` and close the connection
    pub fn close(self) -> Result<()> {
        self.conn.into_inner().close()
    }
}
