pub mod edge;
pub mod error;
pub mod id;

pub(crate) mod base;
mod graph;

pub use base::*;
pub use edge::{Edge, EdgeKey};
pub use error::{Error, ErrorKind, Operation};
pub use graph::*;
pub use id::VertexId;

/// Result of a fallible graph operation.
pub type Result<T, E = Error> = std::result::Result<T, E>;
