use std::fmt;

use serde_json::Value;

/// A time endpoint exactly as the client sent it, before any unit conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawTime {
    Seconds(f64),
    Text(String),
    Unsupported(String),
}

impl From<Value> for RawTime {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(seconds) => Self::Seconds(seconds),
                None => Self::Unsupported(n.to_string()),
            },
            Value::String(s) => Self::Text(s),
            other => Self::Unsupported(other.to_string()),
        }
    }
}

impl From<f64> for RawTime {
    fn from(seconds: f64) -> Self {
        Self::Seconds(seconds)
    }
}

impl From<&str> for RawTime {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl fmt::Display for RawTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(s) => write!(f, "{}", s),
            Self::Text(t) | Self::Unsupported(t) => f.write_str(t),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimeParseError {
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),
    #[error(
        "Invalid time range (start must be non-negative, end must be after start): start={start}, end={end}"
    )]
    InvalidRange { start: f64, end: f64 },
}

/// Converts seconds, `H:MM:SS[.ms]`, `MM:SS[.ms]` or a bare numeric string
/// into seconds. Only the last field may be fractional.
pub fn parse_time(raw: &RawTime) -> Result<f64, TimeParseError> {
    let invalid = || TimeParseError::InvalidFormat(raw.to_string());

    let seconds = match raw {
        RawTime::Seconds(s) => *s,
        RawTime::Text(text) => {
            let fields: Vec<&str> = text.split(':').map(str::trim).collect();
            match fields.as_slice() {
                [h, m, s] => {
                    let h: i64 = h.parse().map_err(|_| invalid())?;
                    let m: i64 = m.parse().map_err(|_| invalid())?;
                    let s: f64 = s.parse().map_err(|_| invalid())?;
                    let whole = h
                        .checked_mul(3600)
                        .and_then(|h| m.checked_mul(60).and_then(|m| h.checked_add(m)))
                        .ok_or_else(invalid)?;
                    whole as f64 + s
                }
                [m, s] => {
                    let m: i64 = m.parse().map_err(|_| invalid())?;
                    let s: f64 = s.parse().map_err(|_| invalid())?;
                    m.checked_mul(60).ok_or_else(invalid)? as f64 + s
                }
                [s] => s.parse().map_err(|_| invalid())?,
                _ => return Err(invalid()),
            }
        }
        RawTime::Unsupported(_) => return Err(invalid()),
    };

    if !seconds.is_finite() {
        return Err(invalid());
    }

    Ok(seconds)
}

/// Validated interval in seconds: `start >= 0` and `end > start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    start: f64,
    end: f64,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> Result<Self, TimeParseError> {
        if start < 0.0 || end <= start {
            return Err(TimeParseError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Both endpoints are parsed before ordering is checked, so a malformed
    /// endpoint always surfaces as a format error.
    pub fn parse(start: &RawTime, end: &RawTime) -> Result<Self, TimeParseError> {
        let start = parse_time(start)?;
        let end = parse_time(end)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}
