//! Where could Mr. X be now?
//!
//! The engine keeps a set of candidate stations and advances it one ticket
//! at a time: [`hop`] replaces every candidate by its neighbours in the
//! ticket's graph, and [`trace`] folds `hop` over a whole ticket list.
//!
//! Queries only read the [`GraphSet`], so any number of them may run at
//! once against the same board.

mod positions;

use tracing::{debug, trace as trace_event};

use crate::domain::{InvalidTicket, StationId, TransportMode};
use crate::graph::GraphSet;

pub use positions::PositionSet;

/// Error from tracing a ticket list given by name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    /// A ticket name is not a transport mode
    #[error("move {number}: {ticket}")]
    UnknownTicket {
        /// 1-based position of the ticket in the list.
        number: usize,
        ticket: InvalidTicket,
    },
}

/// One move: every station reachable from any of `positions` with `ticket`.
///
/// A position without edges in the ticket's graph contributes nothing. The
/// result is deduplicated and ordered by station number.
///
/// # Examples
///
/// ```
/// use scotland_yard::domain::{StationId, TransportMode};
/// use scotland_yard::graph::{Graph, GraphSet};
/// use scotland_yard::reach::hop;
/// use scotland_yard::registry::StationRegistry;
///
/// let registry = StationRegistry::from_coordinates([(0, 0); 3]);
/// let graphs = GraphSet::build(|mode| match mode {
///     TransportMode::Taxi => Graph::parse_edges(&registry, "1 2 3\n"),
///     _ => Ok(Graph::with_stations(&registry)),
/// })
/// .unwrap();
///
/// let start = StationId::new(1).unwrap();
/// let next = hop(&graphs, [start], TransportMode::Taxi);
/// assert_eq!(next.to_string(), "2, 3");
/// ```
pub fn hop(
    graphs: &GraphSet,
    positions: impl IntoIterator<Item = StationId>,
    ticket: TransportMode,
) -> PositionSet {
    let graph = graphs.get(ticket);
    let mut next = PositionSet::new();

    for position in positions {
        if !graph.contains_node(position) {
            debug!(station = %position, mode = %ticket, "Position is not a station on this board");
            continue;
        }
        next.extend(graph.neighbours(position));
    }

    next
}

/// All stations reachable after using `tickets` in order.
///
/// With no tickets the start positions are returned, deduplicated and
/// sorted.
pub fn trace(
    graphs: &GraphSet,
    start: impl IntoIterator<Item = StationId>,
    tickets: impl IntoIterator<Item = TransportMode>,
) -> PositionSet {
    tickets
        .into_iter()
        .fold(start.into_iter().collect(), |positions: PositionSet, ticket| {
            let next = hop(graphs, positions.iter(), ticket);
            trace_event!(
                mode = %ticket,
                from = positions.len(),
                to = next.len(),
                "Hop"
            );
            next
        })
}

/// Like [`trace`], with tickets given by name.
///
/// Names are parsed as the fold reaches them. The first unknown name aborts
/// the whole trace; no partial result is returned.
pub fn trace_named<S: AsRef<str>>(
    graphs: &GraphSet,
    start: impl IntoIterator<Item = StationId>,
    tickets: impl IntoIterator<Item = S>,
) -> Result<PositionSet, TraceError> {
    tickets.into_iter().enumerate().try_fold(
        start.into_iter().collect(),
        |positions: PositionSet, (idx, name)| {
            let ticket = TransportMode::parse(name.as_ref()).map_err(|ticket| {
                TraceError::UnknownTicket {
                    number: idx + 1,
                    ticket,
                }
            })?;
            Ok(hop(graphs, positions.iter(), ticket))
        },
    )
}
