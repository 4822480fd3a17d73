//! Bus line types.

use std::fmt;

/// Error returned when parsing an invalid line id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line id: {reason}")]
pub struct InvalidLineId {
    reason: &'static str,
}

/// An opaque bus line identifier.
///
/// Identity is distinct from the display label: two physical lines may
/// share a label (e.g. "10A" and "10B" both displayed as "10") but never
/// an id. Rules that must not confuse such lines (no riding a line twice
/// in one journey, duplicate-route removal) key on this type.
///
/// # Examples
///
/// ```
/// use bus_server::domain::LineId;
///
/// let id = LineId::parse("7").unwrap();
/// assert_eq!(id.as_str(), "7");
///
/// // Blank ids are rejected
/// assert!(LineId::parse("").is_err());
/// assert!(LineId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(String);

impl LineId {
    /// Parse a line id from a string.
    ///
    /// Leading and trailing whitespace is trimmed; the remainder must be
    /// non-empty.
    pub fn parse(s: &str) -> Result<Self, InvalidLineId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidLineId {
                reason: "must not be blank",
            });
        }
        Ok(LineId(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bus line: an ordered sequence of stops, ridden in either direction.
///
/// Lines are immutable once loaded and shared as `Arc<Line>` so that the
/// search can clone references cheaply. The stop list is taken as the
/// catalog provides it; degenerate lines (fewer than two stops, repeated
/// stop names) are tolerated here and simply fail hop extraction later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Opaque unique identifier.
    pub id: LineId,

    /// Display label, e.g. the bus number painted on the vehicle.
    pub label: String,

    /// Human-readable description of the service.
    pub description: String,

    /// The stops the line visits, in canonical order.
    pub stops: Vec<String>,
}

impl Line {
    /// Returns true if the line visits the given stop.
    pub fn serves(&self, stop: &str) -> bool {
        self.stops.iter().any(|s| s == stop)
    }

    /// Returns the position of the first occurrence of `stop`, if any.
    pub fn stop_position(&self, stop: &str) -> Option<usize> {
        self.stops.iter().position(|s| s == stop)
    }
}
