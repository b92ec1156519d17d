//! Board loading error types.

use std::path::PathBuf;

use crate::domain::TransportMode;
use crate::graph::EdgeListError;
use crate::registry::StationFormatError;

/// Errors that can occur while loading a board from disk.
///
/// Any of these leaves no usable board behind.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A board file could not be read
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON for a board configuration
    #[error("invalid board manifest {}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The station list is malformed
    #[error("invalid station list {}", path.display())]
    Stations {
        path: PathBuf,
        #[source]
        source: StationFormatError,
    },

    /// The station list has no stations
    #[error("station list {} has no stations", path.display())]
    NoStations { path: PathBuf },

    /// A mode was asked for an edge list but is built from other modes
    #[error("{mode} has no edge list; it is derived from the other modes")]
    NoEdgeList { mode: TransportMode },

    /// An edge list is malformed or refers to unknown stations
    #[error("invalid {mode} edge list {}", path.display())]
    Edges {
        mode: TransportMode,
        path: PathBuf,
        #[source]
        source: EdgeListError,
    },
}
