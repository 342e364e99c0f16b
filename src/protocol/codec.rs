//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Request
//! ```text
//! <verb> <arg1> <arg2> ...\n
//! ```
//!
//! ### Reply
//! ```text
//! <count> <message>\n        count == 0: the message is the reply
//! <line 1>\n                 count > 0: exactly `count` lines follow
//! ...
//! <line count>\n
//! ```
//!
//! A negative count is an error code; the message explains it.

use std::io::{self, BufRead, Write};

use crate::error::{RrdError, Result};
use super::{Command, Reply};

// =============================================================================
// Command Encoding
// =============================================================================

/// Write a command to a stream
///
/// Returns the raw I/O error so callers can decide whether it is retryable.
pub fn write_command<W: Write>(writer: &mut W, command: &Command) -> io::Result<()> {
    writer.write_all(command.encode().as_bytes())?;
    writer.flush()
}

// =============================================================================
// Reply Encoding
// =============================================================================

/// Encode a success reply exactly as the daemon frames it
pub fn encode_reply(reply: &Reply) -> String {
    let mut out = format!("{} {}\n", reply.count, reply.message);
    for line in &reply.lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Encode an error reply (`<negative code> <message>`)
pub fn encode_error(code: i64, message: &str) -> String {
    format!("{} {}\n", code, message)
}

// =============================================================================
// Reply Decoding
// =============================================================================

/// Read one line, without its `\n` or `\r\n` terminator
///
/// Returns `Ok(None)` when the stream is at its end.
pub fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// Split a status line of the form `<integer><whitespace><rest>`
pub fn parse_status_line(line: &str) -> Result<(i64, &str)> {
    let malformed = || RrdError::MalformedResponse {
        line: line.to_string(),
    };

    let digits_start = usize::from(line.starts_with('-'));
    let digits_len = line[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return Err(malformed());
    }

    let (number, tail) = line.split_at(digits_start + digits_len);
    let rest = tail.trim_start_matches(is_separator);
    if rest.len() == tail.len() {
        return Err(malformed());
    }

    let code = number.parse::<i64>().map_err(|_| malformed())?;
    Ok((code, rest))
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c')
}

/// Decode one framed reply from a line source
///
/// `next_line` is called once for the status line and once for every content
/// line, so a caller can refresh its I/O deadline before each read.
pub fn read_reply<F>(mut next_line: F) -> Result<Reply>
where
    F: FnMut() -> io::Result<Option<String>>,
{
    let header = next_line()?.ok_or(RrdError::ConnectionClosed)?;
    tracing::trace!("reply status: [{}]", header);

    let (code, rest) = parse_status_line(&header)?;
    if code < 0 {
        return Err(RrdError::Protocol {
            code,
            message: rest.to_string(),
        });
    }
    if code == 0 {
        return Ok(Reply::message(rest));
    }

    let expected = usize::try_from(code).map_err(|_| RrdError::MalformedResponse {
        line: header.clone(),
    })?;

    // The count comes from the peer; don't let it size the allocation.
    let mut lines = Vec::with_capacity(expected.min(1024));
    while lines.len() < expected {
        match next_line() {
            Ok(Some(line)) => {
                tracing::trace!("reply line: [{}]", line);
                lines.push(line);
            }
            Ok(None) => {
                return Err(RrdError::UnexpectedEof {
                    expected,
                    received: lines.len(),
                })
            }
            Err(source) => {
                return Err(RrdError::ShortResponse {
                    expected,
                    received: lines.len(),
                    source,
                })
            }
        }
    }

    Ok(Reply {
        count: expected,
        message: rest.to_string(),
        lines,
    })
}

/// Decode one framed reply from a buffered reader
pub fn read_reply_from<R: BufRead>(reader: &mut R) -> Result<Reply> {
    read_reply(|| read_line(reader))
}
