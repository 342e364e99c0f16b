//! Protocol Module
//!
//! Defines the line protocol spoken by rrdcached.
//!
//! ## Request Format
//! ```text
//! <verb> <arg1> <arg2> ...\n
//! ```
//!
//! ## Reply Format
//! ```text
//! <status> <message>\n
//! [<status> content lines when status > 0]
//! ```
//!
//! ### Status Values
//! - `< 0`: error, the message describes it
//! - `0`:   the message is the only line of the reply
//! - `N`:   N content lines follow the status line

mod command;
mod reply;
mod codec;

pub use command::Command;
pub use reply::Reply;
pub use codec::{
    encode_error, encode_reply, parse_status_line, read_line, read_reply, read_reply_from,
    write_command,
};
