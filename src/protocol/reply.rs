//! Reply definitions
//!
//! Represents a decoded success reply from the daemon.

/// A framed success reply
///
/// `count` is the number announced in the status line, `message` is the text
/// that followed it. For `count == 0` the message is the whole reply; for
/// `count > 0` exactly `count` content lines follow the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub count: usize,
    pub message: String,
    pub lines: Vec<String>,
}

impl Reply {
    /// A single informational line (`0 <message>`)
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            count: 0,
            message: message.into(),
            lines: Vec::new(),
        }
    }

    /// A multi-line reply; the count is taken from `lines`
    pub fn with_lines(message: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            count: lines.len(),
            message: message.into(),
            lines,
        }
    }

    /// The payload handed to callers
    ///
    /// A zero-count reply yields its message as the only line.
    pub fn into_lines(self) -> Vec<String> {
        if self.count == 0 {
            vec![self.message]
        } else {
            self.lines
        }
    }
}
