//! Configuration for rrdc clients
//!
//! Centralized configuration with sensible defaults.

use std::time::Duration;

use crate::error::{RrdError, Result};

/// Default rrdcached TCP port
pub const DEFAULT_PORT: u16 = 42217;

/// Default dial / read / write timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default daemon address
pub const DEFAULT_ADDRESS: &str = "127.0.0.1";

/// Transport used to reach the daemon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// TCP stream to `host:port`
    Tcp,

    /// Unix domain socket at a filesystem path
    Unix,
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Daemon address: `host[:port]` for TCP, a socket path for Unix
    pub address: String,

    /// Which transport to dial
    pub transport: Transport,

    /// Bound for every dial, write and line read
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            transport: Transport::Tcp,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the options before dialing
    pub fn validate(&self) -> Result<()> {
        if self.address.trim().is_empty() {
            return Err(RrdError::Config("address must not be empty".to_string()));
        }
        // std rejects a zero socket timeout
        if self.timeout.is_zero() {
            return Err(RrdError::Config("timeout must be non-zero".to_string()));
        }
        Ok(())
    }

    /// The address actually dialed.
    ///
    /// TCP addresses without a port get [`DEFAULT_PORT`].
    pub fn resolved_address(&self) -> String {
        match self.transport {
            Transport::Tcp if !self.address.contains(':') => {
                format!("{}:{}", self.address, DEFAULT_PORT)
            }
            _ => self.address.clone(),
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the daemon address
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.config.address = address.into();
        self
    }

    /// Set the transport
    pub fn transport(mut self, transport: Transport) -> Self {
        self.config.transport = transport;
        self
    }

    /// Use a Unix domain socket
    pub fn unix(self) -> Self {
        self.transport(Transport::Unix)
    }

    /// Set the dial / read / write timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
