//! The fixed set of board stations.
//!
//! Stations are numbered by their order in the station list: every non-empty
//! line `x y` takes the next number starting at 1, and empty lines are
//! skipped without consuming a number. A line holding only spaces is not
//! empty and is rejected. The registry is immutable once built
//! and is the node set shared by every transport graph.

use std::collections::BTreeMap;

use crate::domain::{Station, StationId};

/// Error for a station list line that is not two integers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {reason}")]
pub struct StationFormatError {
    /// 1-based line number in the station list.
    pub line: usize,
    reason: &'static str,
}

/// All stations on the board, indexed by station number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationRegistry {
    /// `stations[i]` has id `i + 1`.
    stations: Vec<Station>,
}

impl StationRegistry {
    /// Build a registry from station list text.
    ///
    /// # Examples
    ///
    /// ```
    /// use scotland_yard::registry::StationRegistry;
    ///
    /// let registry = StationRegistry::parse("10 20\n\n30 40\n").unwrap();
    /// assert_eq!(registry.len(), 2);
    ///
    /// // Anything but two integers is rejected
    /// assert!(StationRegistry::parse("10 20 30\n").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, StationFormatError> {
        let mut coordinates = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            if raw.is_empty() {
                continue;
            }

            let mut fields = raw.split_whitespace();
            let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
                return Err(StationFormatError {
                    line,
                    reason: "expected two integers `x y`",
                });
            };

            let parse = |field: &str| {
                field.parse::<i32>().map_err(|_| StationFormatError {
                    line,
                    reason: "coordinate is not an integer",
                })
            };
            coordinates.push((parse(x)?, parse(y)?));
        }

        Ok(Self::from_coordinates(coordinates))
    }

    /// Build a registry from coordinates, numbering stations from 1.
    pub fn from_coordinates(coordinates: impl IntoIterator<Item = (i32, i32)>) -> Self {
        let stations = coordinates
            .into_iter()
            .zip(1u32..)
            .filter_map(|((x, y), n)| StationId::new(n).ok().map(|id| Station::new(id, x, y)))
            .collect();
        Self { stations }
    }

    /// Look up a station by id.
    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.get() as usize - 1)
    }

    /// Check if a station is registered.
    pub fn contains(&self, id: StationId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the display coordinate of a station.
    pub fn position(&self, id: StationId) -> Option<(i32, i32)> {
        self.get(id).map(Station::position)
    }

    /// Returns the id → `(x, y)` lookup used for drawing the board.
    ///
    /// Computed from the registry on each call; there is no separate copy to
    /// keep in sync.
    pub fn positions(&self) -> BTreeMap<StationId, (i32, i32)> {
        self.stations.iter().map(|s| (s.id, s.position())).collect()
    }

    /// Iterate over all station ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = StationId> + '_ {
        self.stations.iter().map(|s| s.id)
    }

    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the board has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
