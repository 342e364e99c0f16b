//! Network Module
//!
//! Transport streams and the managed connection to rrdcached.
//!
//! ## Architecture
//! - One stream per client, TCP or Unix domain socket
//! - Absolute deadline, pushed out before every write and line read
//! - Redial when a write hits a broken pipe or reset, or when the last
//!   reply was cut short

mod stream;
mod connection;

pub use stream::{DeadlineStream, Stream};
pub use connection::{Connection, WriteFault};
