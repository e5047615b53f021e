//! Graph types backed by an incidence matrix.

mod incidence;
mod weighted;

pub use incidence::IncidenceGraph;
pub use weighted::{WeightedIncidenceGraph, DEFAULT_WEIGHT};
