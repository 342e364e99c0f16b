//! # rrdc
//!
//! A blocking client for rrdcached, the RRD caching daemon:
//! - TCP or Unix domain socket transport
//! - Per-operation timeouts on dial, write and every reply line
//! - Transparent redial when a write finds the daemon gone
//! - Typed decoding of `info` replies
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Client                                │
//! │              (one exchange at a time, Mutex)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Connection                               │
//! │          (deadlines, redial on broken pipe / reset)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Command   │          │ Reply codec │
//!   │  (encode)   │          │  (framing)  │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │    Info     │
//!                           │  (typed)    │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod info;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RrdError, Result};
pub use config::{Config, Transport, DEFAULT_PORT, DEFAULT_TIMEOUT};
pub use client::Client;
pub use info::{InfoEntry, InfoValue};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of rrdc
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
