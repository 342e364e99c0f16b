//! Info reply decoding
//!
//! Each line of an `info` reply carries a key, a type tag and a value:
//!
//! ```text
//! filename 2 /var/lib/rrd/x.rrd
//! step 1 300
//! ds[temp].min 0 NaN
//! ```
//!
//! Tags: `0` float, `1` integer, `2` string.

use std::collections::HashMap;
use std::fmt;

use crate::error::{RrdError, Result};

/// A typed info value
#[derive(Debug, Clone, PartialEq)]
pub enum InfoValue {
    /// Tag `2`
    String(String),

    /// Tag `1`
    Integer(i64),

    /// Tag `0`
    Float(f64),
}

impl InfoValue {
    /// The string value, if this came from a tag `2` line
    pub fn as_str(&self) -> Option<&str> {
        match self {
            InfoValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integer value, if this came from a tag `1` line
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            InfoValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// The float value, if this came from a tag `0` line
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            InfoValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for InfoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfoValue::String(s) => f.write_str(s),
            InfoValue::Integer(v) => write!(f, "{}", v),
            InfoValue::Float(v) => write!(f, "{}", v),
        }
    }
}

/// One key of an RRD's configuration
#[derive(Debug, Clone, PartialEq)]
pub struct InfoEntry {
    pub key: String,
    pub value: InfoValue,
}

/// Decode one info line
pub fn parse_info_line(line: &str) -> Result<InfoEntry> {
    // String values may contain spaces, so only the first two are separators.
    let mut parts = line.splitn(3, ' ');
    let (key, tag, raw) = match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(tag), Some(raw)) => (key, tag, raw),
        _ => {
            return Err(RrdError::MalformedResponse {
                line: line.to_string(),
            })
        }
    };

    let invalid = |reason: String| RrdError::InvalidResponse {
        reason,
        line: line.to_string(),
    };

    let value = match tag {
        "2" => InfoValue::String(raw.to_string()),
        "1" => raw
            .parse::<i64>()
            .map(InfoValue::Integer)
            .map_err(|_| invalid(format!("info: invalid int for key {}", key)))?,
        "0" => raw
            .parse::<f64>()
            .map(InfoValue::Float)
            .map_err(|_| invalid(format!("info: invalid float for key {}", key)))?,
        other => {
            return Err(invalid(format!(
                "info: unknown type {} for key {}",
                other, key
            )))
        }
    };

    Ok(InfoEntry {
        key: key.to_string(),
        value,
    })
}

/// Decode every line of an info reply, stopping at the first bad one
pub fn parse_info<S: AsRef<str>>(lines: &[S]) -> Result<Vec<InfoEntry>> {
    lines.iter().map(|l| parse_info_line(l.as_ref())).collect()
}

/// Collapse entries into a map; a repeated key keeps its last value
pub fn into_map(entries: Vec<InfoEntry>) -> HashMap<String, InfoValue> {
    entries.into_iter().map(|e| (e.key, e.value)).collect()
}
