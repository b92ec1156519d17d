//! Which files make up a board.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::TransportMode;

/// File names of a board's station list and edge lists.
///
/// Relative names are resolved against the board's data directory. A data
/// directory may contain a `board.json` manifest overriding any of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Station list: one `x y` line per station.
    pub stations: PathBuf,

    /// Taxi edge list.
    pub taxi: PathBuf,

    /// Bus edge list.
    pub bus: PathBuf,

    /// Subway edge list.
    pub subway: PathBuf,

    /// Ferry edge list.
    pub ferry: PathBuf,
}

impl BoardConfig {
    /// Name of the optional manifest file in a data directory.
    pub const MANIFEST: &'static str = "board.json";

    /// Create a configuration with the given file names.
    pub fn new(
        stations: impl Into<PathBuf>,
        taxi: impl Into<PathBuf>,
        bus: impl Into<PathBuf>,
        subway: impl Into<PathBuf>,
        ferry: impl Into<PathBuf>,
    ) -> Self {
        Self {
            stations: stations.into(),
            taxi: taxi.into(),
            bus: bus.into(),
            subway: subway.into(),
            ferry: ferry.into(),
        }
    }

    /// Parse a manifest. Missing keys keep their default file names.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns the edge list file of a physical mode.
    ///
    /// Derived modes have no file of their own.
    pub fn edge_file(&self, mode: TransportMode) -> Option<&Path> {
        match mode {
            TransportMode::Taxi => Some(&self.taxi),
            TransportMode::Bus => Some(&self.bus),
            TransportMode::Subway => Some(&self.subway),
            TransportMode::Ferry => Some(&self.ferry),
            TransportMode::Police | TransportMode::Black => None,
        }
    }

    /// Returns the station list path inside the data directory `dir`.
    pub fn stations_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.stations)
    }

    /// Returns the edge list path of a physical mode inside `dir`.
    ///
    /// Absolute file names are kept as they are. Derived modes have no edge
    /// list and give `None`.
    pub fn path_for(&self, dir: &Path, mode: TransportMode) -> Option<PathBuf> {
        self.edge_file(mode).map(|file| dir.join(file))
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new("nodes.txt", "taxi.txt", "bus.txt", "subway.txt", "ferry.txt")
    }
}
