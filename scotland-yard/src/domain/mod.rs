//! Domain types for the position tracker.
//!
//! Board stations and transport modes. Both validate at construction time,
//! so code that receives them can trust their validity.

mod station;
mod transport;

pub use station::{InvalidStationId, Station, StationId};
pub use transport::{InvalidTicket, TransportMode};
