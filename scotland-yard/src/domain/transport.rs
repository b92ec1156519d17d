//! Transport modes and ticket names.

use std::fmt;
use std::str::FromStr;

/// Error returned when a ticket name does not name a transport mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ticket {name:?} (expected taxi, bus, subway, ferry, police or black)")]
pub struct InvalidTicket {
    name: String,
}

impl InvalidTicket {
    /// Returns the rejected ticket name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A means of moving between stations.
///
/// The first four are physical modes with their own edge lists. `Police` and
/// `Black` are derived: detectives may use taxi, bus and subway, while Mr. X's
/// black ticket additionally covers the ferry.
///
/// # Examples
///
/// ```
/// use scotland_yard::domain::TransportMode;
///
/// let mode: TransportMode = "bus".parse().unwrap();
/// assert_eq!(mode, TransportMode::Bus);
///
/// // Names are exact: no other spelling is a ticket
/// assert!("Bus".parse::<TransportMode>().is_err());
/// assert!("monorail".parse::<TransportMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransportMode {
    Taxi,
    Bus,
    Subway,
    Ferry,
    Police,
    Black,
}

impl TransportMode {
    /// Every mode, in table order.
    pub const ALL: [TransportMode; 6] = [
        TransportMode::Taxi,
        TransportMode::Bus,
        TransportMode::Subway,
        TransportMode::Ferry,
        TransportMode::Police,
        TransportMode::Black,
    ];

    /// The modes read from edge lists.
    pub const BASE: [TransportMode; 4] = [
        TransportMode::Taxi,
        TransportMode::Bus,
        TransportMode::Subway,
        TransportMode::Ferry,
    ];

    /// The modes making up the police graph.
    pub const POLICE: [TransportMode; 3] = [
        TransportMode::Taxi,
        TransportMode::Bus,
        TransportMode::Subway,
    ];

    /// Returns the lowercase ticket name.
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Taxi => "taxi",
            TransportMode::Bus => "bus",
            TransportMode::Subway => "subway",
            TransportMode::Ferry => "ferry",
            TransportMode::Police => "police",
            TransportMode::Black => "black",
        }
    }

    /// Position of this mode in `ALL`.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Parse a ticket name. Only the exact lowercase name is accepted.
    pub fn parse(name: &str) -> Result<Self, InvalidTicket> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == name)
            .ok_or_else(|| InvalidTicket {
                name: name.to_string(),
            })
    }
}

impl FromStr for TransportMode {
    type Err = InvalidTicket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
