// ---------------------------------------------------------------------------
// RosterError: why a city roster or config file was rejected
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors raised while building a [`crate::roster::CityRoster`] or reading a
/// hero config file. Callers log these and fall back to the built-in roster.
#[derive(Debug)]
pub enum RosterError {
    /// Config file could not be read.
    Io(std::io::Error),
    /// Config file is not valid JSON or has the wrong shape.
    Json(String),
    /// The roster has no cities, so there is nothing to hang fronds on.
    Empty,
    /// More cities than the crown can hold.
    TooManyCities { max: usize, found: usize },
    /// Two cities share a name.
    DuplicateName(String),
    /// Purchased share is NaN, infinite, or outside [0, 100].
    InvalidPercentage { name: String, value: f32 },
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::Io(e) => write!(f, "I/O error: {e}"),
            RosterError::Json(msg) => write!(f, "Invalid config: {msg}"),
            RosterError::Empty => write!(f, "City roster is empty"),
            RosterError::TooManyCities { max, found } => {
                write!(f, "Too many cities: {found} given, at most {max} supported")
            }
            RosterError::DuplicateName(name) => write!(f, "Duplicate city name: {name}"),
            RosterError::InvalidPercentage { name, value } => {
                write!(f, "Purchased share for {name} must be in 0..=100, got {value}")
            }
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RosterError {
    fn from(e: std::io::Error) -> Self {
        RosterError::Io(e)
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(e: serde_json::Error) -> Self {
        RosterError::Json(e.to_string())
    }
}
