//! The engine's working value: a set of candidate stations.

use std::collections::BTreeSet;
use std::fmt;

use crate::domain::StationId;

/// Stations the hidden player could be at, in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PositionSet(BTreeSet<StationId>);

impl PositionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a station is a candidate.
    pub fn contains(&self, id: StationId) -> bool {
        self.0.contains(&id)
    }

    /// Check if every candidate here is also a candidate in `other`.
    pub fn is_subset(&self, other: &PositionSet) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Iterate over candidates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StationId> + '_ {
        self.0.iter().copied()
    }

    /// Returns the candidates as a sorted vector.
    pub fn to_vec(&self) -> Vec<StationId> {
        self.iter().collect()
    }

    /// Returns the number of candidates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there is nowhere the player could be.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<StationId> for PositionSet {
    fn from(id: StationId) -> Self {
        Self(BTreeSet::from([id]))
    }
}

impl FromIterator<StationId> for PositionSet {
    fn from_iter<I: IntoIterator<Item = StationId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<StationId> for PositionSet {
    fn extend<I: IntoIterator<Item = StationId>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for PositionSet {
    type Item = StationId;
    type IntoIter = std::collections::btree_set::IntoIter<StationId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Comma-separated station numbers, e.g. `13, 67, 89`.
impl fmt::Display for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}
