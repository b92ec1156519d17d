//! Scotland Yard position tracker.
//!
//! Answers the detectives' question: "Mr. X was last seen at this station
//! and has since used these tickets. Where could he be now?"

pub mod board;
pub mod domain;
pub mod graph;
pub mod reach;
pub mod registry;
