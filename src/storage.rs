//! Backing storage of the graphs.

pub mod incidence_matrix;

pub use incidence_matrix::IncidenceMatrix;
