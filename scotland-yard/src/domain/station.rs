//! Station identifier and station record types.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A board station number.
///
/// Station numbers start at 1; zero is never a valid station. This type
/// guarantees that any `StationId` is non-zero by construction.
///
/// # Examples
///
/// ```
/// use scotland_yard::domain::StationId;
///
/// let id = StationId::parse("13").unwrap();
/// assert_eq!(id.get(), 13);
///
/// // Zero is rejected
/// assert!(StationId::parse("0").is_err());
///
/// // Non-numeric input is rejected
/// assert!(StationId::parse("x1").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(u32);

impl StationId {
    /// Create a station id from its number.
    pub fn new(n: u32) -> Result<Self, InvalidStationId> {
        if n == 0 {
            return Err(InvalidStationId {
                reason: "station numbers start at 1",
            });
        }
        Ok(Self(n))
    }

    /// Parse a station id from a decimal string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let n = s.trim().parse::<u32>().map_err(|_| InvalidStationId {
            reason: "must be a positive integer",
        })?;
        Self::new(n)
    }

    /// Returns the station number.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for StationId {
    type Err = InvalidStationId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A board station with its drawing coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Station {
    pub id: StationId,
    pub x: i32,
    pub y: i32,
}

impl Station {
    /// Create a station at the given display coordinate.
    pub fn new(id: StationId, x: i32, y: i32) -> Self {
        Self { id, x, y }
    }

    /// Returns the display coordinate as an `(x, y)` pair.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
