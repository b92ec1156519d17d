//! The table of per-mode graphs.

use tracing::debug;

use crate::domain::TransportMode;

use super::Graph;

/// One graph per transport mode, including the derived police and black
/// graphs.
///
/// Built once, then only read. Derived graphs are computed at construction
/// and never recomputed per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSet {
    /// Indexed by `TransportMode::index`.
    graphs: [Graph; 6],
}

impl GraphSet {
    /// Build the set from the four physical mode graphs.
    ///
    /// `police` is the union of taxi, bus and subway; `black` is the union
    /// of police and ferry.
    pub fn from_base(taxi: Graph, bus: Graph, subway: Graph, ferry: Graph) -> Self {
        let police = Graph::union([&taxi, &bus, &subway]);
        let black = Graph::union([&police, &ferry]);
        Self {
            graphs: [taxi, bus, subway, ferry, police, black],
        }
    }

    /// Build the set by producing each physical mode graph in turn.
    ///
    /// `build_mode` is called for taxi, bus, subway and ferry, in that order.
    /// The first error stops construction and is returned; no partially built
    /// set escapes.
    pub fn build<E>(
        mut build_mode: impl FnMut(TransportMode) -> Result<Graph, E>,
    ) -> Result<Self, E> {
        let [taxi, bus, subway, ferry] = TransportMode::BASE;
        let set = Self::from_base(
            build_mode(taxi)?,
            build_mode(bus)?,
            build_mode(subway)?,
            build_mode(ferry)?,
        );

        for (mode, graph) in set.iter() {
            debug!(
                mode = %mode,
                nodes = graph.node_count(),
                edges = graph.edge_count(),
                "Built transport graph"
            );
        }

        Ok(set)
    }

    /// Returns the graph for a transport mode.
    pub fn get(&self, mode: TransportMode) -> &Graph {
        &self.graphs[mode.index()]
    }

    /// Iterate over `(mode, graph)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (TransportMode, &Graph)> {
        TransportMode::ALL.into_iter().zip(self.graphs.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;
    use crate::registry::StationRegistry;

    fn id(n: u32) -> StationId {
        StationId::new(n).unwrap()
    }

    fn toy() -> GraphSet {
        let registry = StationRegistry::from_coordinates([(0, 0); 4]);
        let edges = |mode: TransportMode| match mode {
            TransportMode::Taxi => "1 2\n2 3\n",
            TransportMode::Bus => "3 4\n",
            TransportMode::Subway => "",
            TransportMode::Ferry => "1 4\n",
            _ => unreachable!("only physical modes are read"),
        };
        GraphSet::build(|mode| Graph::parse_edges(&registry, edges(mode))).unwrap()
    }

    #[test]
    fn base_graphs_kept_separately() {
        let set = toy();
        assert_eq!(set.get(TransportMode::Taxi).edge_count(), 2);
        assert_eq!(set.get(TransportMode::Bus).edge_count(), 1);
        assert_eq!(set.get(TransportMode::Subway).edge_count(), 0);
        assert_eq!(set.get(TransportMode::Ferry).edge_count(), 1);
    }

    #[test]
    fn police_is_taxi_bus_subway() {
        let set = toy();
        let police = set.get(TransportMode::Police);

        assert_eq!(police.edge_count(), 3);
        assert!(police.contains_edge(id(1), id(2)));
        assert!(police.contains_edge(id(3), id(4)));
        assert!(!police.contains_edge(id(1), id(4)));
    }

    #[test]
    fn black_adds_ferry() {
        let set = toy();
        let black = set.get(TransportMode::Black);

        assert_eq!(black.edge_count(), 4);
        assert!(black.contains_edge(id(4), id(1)));
    }

    #[test]
    fn every_graph_has_all_stations() {
        for (_, graph) in toy().iter() {
            assert_eq!(graph.node_count(), 4);
        }
    }

    #[test]
    fn build_order_and_first_error() {
        let mut seen = Vec::new();
        let result = GraphSet::build(|mode| {
            seen.push(mode);
            if mode == TransportMode::Subway {
                Err("subway failed")
            } else {
                Ok(Graph::new())
            }
        });

        assert_eq!(result, Err("subway failed"));
        assert_eq!(
            seen,
            vec![TransportMode::Taxi, TransportMode::Bus, TransportMode::Subway]
        );
    }

    #[test]
    fn iter_in_table_order() {
        let modes: Vec<TransportMode> = toy().iter().map(|(mode, _)| mode).collect();
        assert_eq!(modes, TransportMode::ALL.to_vec());
    }
}
