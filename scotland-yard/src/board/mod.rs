//! A complete game board: stations plus every transport graph.
//!
//! Loading happens once, in a fixed order: the station list first, then the
//! taxi, bus, subway and ferry edge lists on top of it, then the derived
//! police and black graphs. Only a fully loaded board is ever returned.

mod config;
mod error;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::{StationId, TransportMode};
use crate::graph::{Graph, GraphSet};
use crate::reach::{self, PositionSet, TraceError};
use crate::registry::StationRegistry;

pub use config::BoardConfig;
pub use error::LoadError;

/// The stations and transport graphs of one board.
///
/// Immutable after loading; share it by reference or `Arc` between queries.
#[derive(Debug, Clone)]
pub struct Board {
    stations: StationRegistry,
    graphs: GraphSet,
}

impl Board {
    /// Assemble a board from already built parts.
    pub fn new(stations: StationRegistry, graphs: GraphSet) -> Self {
        Self { stations, graphs }
    }

    /// Load the board in `dir`.
    ///
    /// Uses `board.json` in the directory when present, default file names
    /// otherwise.
    pub fn load(dir: &Path) -> Result<Self, LoadError> {
        let manifest = dir.join(BoardConfig::MANIFEST);
        let config = if manifest.is_file() {
            debug!(path = %manifest.display(), "Reading board manifest");
            let json = read(&manifest)?;
            BoardConfig::from_json(&json).map_err(|source| LoadError::Manifest {
                path: manifest,
                source,
            })?
        } else {
            BoardConfig::default()
        };

        Self::load_with(dir, &config)
    }

    /// Load a board from the files named by `config`, relative to `dir`.
    pub fn load_with(dir: &Path, config: &BoardConfig) -> Result<Self, LoadError> {
        let stations_path = config.stations_path(dir);
        let stations = StationRegistry::parse(&read(&stations_path)?).map_err(|source| {
            LoadError::Stations {
                path: stations_path.clone(),
                source,
            }
        })?;
        if stations.is_empty() {
            return Err(LoadError::NoStations {
                path: stations_path,
            });
        }
        debug!(path = %stations_path.display(), stations = stations.len(), "Loaded station list");

        let graphs = GraphSet::build(|mode| {
            let path = config
                .path_for(dir, mode)
                .ok_or(LoadError::NoEdgeList { mode })?;
            let text = read(&path)?;
            Graph::parse_edges(&stations, &text)
                .map_err(|source| LoadError::Edges { mode, path, source })
        })?;

        let board = Self::new(stations, graphs);
        info!(
            stations = board.stations.len(),
            taxi = board.graph(TransportMode::Taxi).edge_count(),
            bus = board.graph(TransportMode::Bus).edge_count(),
            subway = board.graph(TransportMode::Subway).edge_count(),
            ferry = board.graph(TransportMode::Ferry).edge_count(),
            "Loaded board"
        );
        Ok(board)
    }

    /// Returns the station registry.
    pub fn stations(&self) -> &StationRegistry {
        &self.stations
    }

    /// Returns the graph of one transport mode.
    pub fn graph(&self, mode: TransportMode) -> &Graph {
        self.graphs.get(mode)
    }

    /// Returns the id → `(x, y)` drawing lookup.
    pub fn positions(&self) -> BTreeMap<StationId, (i32, i32)> {
        self.stations.positions()
    }

    /// See [`reach::hop`].
    pub fn hop(
        &self,
        positions: impl IntoIterator<Item = StationId>,
        ticket: TransportMode,
    ) -> PositionSet {
        reach::hop(&self.graphs, positions, ticket)
    }

    /// See [`reach::trace`].
    pub fn trace(
        &self,
        start: impl IntoIterator<Item = StationId>,
        tickets: impl IntoIterator<Item = TransportMode>,
    ) -> PositionSet {
        reach::trace(&self.graphs, start, tickets)
    }

    /// See [`reach::trace_named`].
    pub fn trace_named<S: AsRef<str>>(
        &self,
        start: impl IntoIterator<Item = StationId>,
        tickets: impl IntoIterator<Item = S>,
    ) -> Result<PositionSet, TraceError> {
        reach::trace_named(&self.graphs, start, tickets)
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::graph::EdgeListError;

    use tempfile::TempDir;

    fn id(n: u32) -> StationId {
        StationId::new(n).unwrap()
    }

    fn numbers(positions: &PositionSet) -> Vec<u32> {
        positions.iter().map(StationId::get).collect()
    }

    /// Write the four-station board used throughout the tests.
    fn toy_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "nodes.txt", "0 0\n10 0\n\n10 10\n0 10\n");
        write(&dir, "taxi.txt", "1 2\n2 3\n");
        write(&dir, "bus.txt", "3 4\n\n");
        write(&dir, "subway.txt", "");
        write(&dir, "ferry.txt", "1 4\n");
        dir
    }

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    #[test]
    fn load_toy_board() {
        let dir = toy_dir();
        let board = Board::load(dir.path()).unwrap();

        assert_eq!(board.stations().len(), 4);
        assert_eq!(board.graph(TransportMode::Taxi).edge_count(), 2);
        assert_eq!(board.graph(TransportMode::Police).edge_count(), 3);
        assert_eq!(board.graph(TransportMode::Black).edge_count(), 4);
    }

    #[test]
    fn queries_on_loaded_board() {
        let board = Board::load(toy_dir().path()).unwrap();

        assert_eq!(numbers(&board.hop([id(1)], TransportMode::Taxi)), vec![2]);
        assert_eq!(numbers(&board.hop([id(1)], TransportMode::Black)), vec![2, 4]);
        assert!(board
            .trace([id(1)], [TransportMode::Taxi, TransportMode::Bus])
            .is_empty());
        assert_eq!(
            numbers(&board.trace_named([id(3)], ["bus", "black"]).unwrap()),
            vec![1, 3]
        );
        assert!(board.trace_named([id(1)], ["monorail"]).is_err());
    }

    #[test]
    fn positions_lookup() {
        let board = Board::load(toy_dir().path()).unwrap();
        let positions = board.positions();

        assert_eq!(positions.len(), 4);
        assert_eq!(positions[&id(3)], (10, 10));
        assert_eq!(positions[&id(4)], (0, 10));
    }

    #[test]
    fn manifest_renames_files() {
        let dir = toy_dir();
        write(&dir, "coords.txt", "0 0\n5 5\n");
        write(&dir, "boat.txt", "1 2\n");
        write(
            &dir,
            BoardConfig::MANIFEST,
            r#"{"stations": "coords.txt", "taxi": "boat.txt", "bus": "subway.txt", "ferry": "boat.txt"}"#,
        );

        // With only two stations the default taxi and bus lists would be rejected
        let board = Board::load(dir.path()).unwrap();
        assert_eq!(board.stations().len(), 2);
        assert!(board.graph(TransportMode::Taxi).contains_edge(id(1), id(2)));
        assert_eq!(board.graph(TransportMode::Bus).edge_count(), 0);
        assert!(board.graph(TransportMode::Ferry).contains_edge(id(1), id(2)));
    }

    #[test]
    fn load_with_nested_files() {
        let dir = toy_dir();
        fs::create_dir(dir.path().join("modes")).unwrap();
        write(&dir, "modes/taxi.txt", "1 3\n");
        let config = BoardConfig::new(
            "nodes.txt",
            "modes/taxi.txt",
            "bus.txt",
            "subway.txt",
            "ferry.txt",
        );

        let board = Board::load_with(dir.path(), &config).unwrap();
        assert_eq!(numbers(&board.hop([id(1)], TransportMode::Taxi)), vec![3]);
    }

    #[test]
    fn invalid_manifest() {
        let dir = toy_dir();
        write(&dir, BoardConfig::MANIFEST, "{not json");

        let err = Board::load(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Manifest { .. }));
    }

    #[test]
    fn missing_file() {
        let dir = toy_dir();
        fs::remove_file(dir.path().join("subway.txt")).unwrap();

        let err = Board::load(dir.path()).unwrap_err();
        match err {
            LoadError::Io { path, .. } => assert!(path.ends_with("subway.txt")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_station_list() {
        let dir = toy_dir();
        write(&dir, "nodes.txt", "0 0\n1\n");

        let err = Board::load(dir.path()).unwrap_err();
        match err {
            LoadError::Stations { source, .. } => assert_eq!(source.line, 2),
            other => panic!("expected Stations error, got {other:?}"),
        }
    }

    #[test]
    fn empty_station_list() {
        let dir = toy_dir();
        write(&dir, "nodes.txt", "\n\n");

        let err = Board::load(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::NoStations { .. }));
    }

    #[test]
    fn edge_to_unknown_station() {
        let dir = toy_dir();
        write(&dir, "ferry.txt", "1 4\n4 5\n");

        let err = Board::load(dir.path()).unwrap_err();
        match err {
            LoadError::Edges { mode, source, .. } => {
                assert_eq!(mode, TransportMode::Ferry);
                assert_eq!(
                    source,
                    EdgeListError::UnknownStation {
                        line: 2,
                        station: id(5)
                    }
                );
            }
            other => panic!("expected Edges error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_edge_list() {
        let dir = toy_dir();
        write(&dir, "bus.txt", "3 four\n");

        let err = Board::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Edges {
                mode: TransportMode::Bus,
                ..
            }
        ));
    }

    #[test]
    fn shared_between_threads() {
        let board = Arc::new(Board::load(toy_dir().path()).unwrap());

        let handles: Vec<_> = (1..=4)
            .map(|n| {
                let board = Arc::clone(&board);
                std::thread::spawn(move || board.hop([id(n)], TransportMode::Black))
            })
            .collect();

        let results: Vec<Vec<u32>> = handles
            .into_iter()
            .map(|h| numbers(&h.join().unwrap()))
            .collect();
        assert_eq!(results, vec![vec![2, 4], vec![1, 3], vec![2, 4], vec![1, 3]]);
    }
}
