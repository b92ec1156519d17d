//! Undirected transport graphs over the board's stations.
//!
//! Each physical transport mode gets its own graph, read from an edge list
//! where every line is `start end1 end2 ... endN`. The derived police and
//! black graphs are unions of the physical ones (see [`GraphSet`]).

mod set;

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::StationId;
use crate::registry::StationRegistry;

pub use set::GraphSet;

/// Error returned when an edge refers to a station that is not a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("station {0} is not on the board")]
pub struct UnknownStation(pub StationId);

/// Errors from reading an edge list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EdgeListError {
    /// A token is not a station number
    #[error("line {line}: {token:?} is not a station number")]
    Format { line: usize, token: String },

    /// An endpoint is not in the station registry
    #[error("line {line}: station {station} is not on the board")]
    UnknownStation { line: usize, station: StationId },
}

/// An undirected graph with station nodes.
///
/// Edges are stored in both directions, so neighbour lookup is a single map
/// access. Adding an edge that already exists is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// Node → sorted neighbours. Every node has an entry, even when isolated.
    adjacency: BTreeMap<StationId, BTreeSet<StationId>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph containing every registered station and no edges.
    pub fn with_stations(registry: &StationRegistry) -> Self {
        Self {
            adjacency: registry.ids().map(|id| (id, BTreeSet::new())).collect(),
        }
    }

    /// Read an edge list on top of the registry's stations.
    ///
    /// Lines with fewer than two tokens carry no edges and are skipped
    /// without being parsed. Endpoints must be registered stations.
    ///
    /// # Examples
    ///
    /// ```
    /// use scotland_yard::domain::StationId;
    /// use scotland_yard::graph::Graph;
    /// use scotland_yard::registry::StationRegistry;
    ///
    /// let registry = StationRegistry::from_coordinates([(0, 0); 3]);
    /// let graph = Graph::parse_edges(&registry, "1 2 3\n2\n").unwrap();
    ///
    /// let one = StationId::new(1).unwrap();
    /// assert_eq!(graph.neighbours(one).count(), 2);
    ///
    /// // Station 4 is not on this board
    /// assert!(Graph::parse_edges(&registry, "3 4\n").is_err());
    /// ```
    pub fn parse_edges(registry: &StationRegistry, text: &str) -> Result<Self, EdgeListError> {
        let mut graph = Self::with_stations(registry);

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let tokens: Vec<&str> = raw.split_whitespace().collect();
            if tokens.len() < 2 {
                continue;
            }

            let parse = |token: &str| {
                StationId::parse(token).map_err(|_| EdgeListError::Format {
                    line,
                    token: token.to_string(),
                })
            };

            let start = parse(tokens[0])?;
            for &token in &tokens[1..] {
                let end = parse(token)?;
                graph
                    .add_edge(start, end)
                    .map_err(|UnknownStation(station)| EdgeListError::UnknownStation {
                        line,
                        station,
                    })?;
            }
        }

        Ok(graph)
    }

    /// Add an undirected edge between two existing nodes.
    ///
    /// The node set never grows here: both endpoints must already be nodes.
    pub fn add_edge(&mut self, a: StationId, b: StationId) -> Result<(), UnknownStation> {
        for id in [a, b] {
            if !self.adjacency.contains_key(&id) {
                return Err(UnknownStation(id));
            }
        }
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        Ok(())
    }

    /// Merge another graph's nodes and edges into this one.
    pub fn union_with(&mut self, other: &Graph) {
        for (node, neighbours) in &other.adjacency {
            self.adjacency
                .entry(*node)
                .or_default()
                .extend(neighbours.iter().copied());
        }
    }

    /// Returns the union of several graphs.
    ///
    /// The result has every node and every edge of every input. Order of the
    /// inputs does not matter.
    pub fn union<'a>(graphs: impl IntoIterator<Item = &'a Graph>) -> Graph {
        let mut composed = Graph::new();
        for graph in graphs {
            composed.union_with(graph);
        }
        composed
    }

    /// Neighbours of a station in ascending order.
    ///
    /// A station that is not a node has no neighbours.
    pub fn neighbours(&self, id: StationId) -> impl Iterator<Item = StationId> + '_ {
        self.adjacency.get(&id).into_iter().flatten().copied()
    }

    /// Check if a station is a node of this graph.
    pub fn contains_node(&self, id: StationId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Check if two stations are joined by an edge (in either direction).
    pub fn contains_edge(&self, a: StationId, b: StationId) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|neighbours| neighbours.contains(&b))
    }

    /// Iterate over edges, each once, as `(low, high)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (StationId, StationId)> + '_ {
        self.adjacency.iter().flat_map(|(a, neighbours)| {
            neighbours.range(*a..).map(move |b| (*a, *b))
        })
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges (counting A-B and B-A as one).
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
