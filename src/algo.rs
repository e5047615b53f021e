pub mod connected_components;
pub mod cycle;
pub mod shortest_paths;

pub use connected_components::ConnectedComponents;
pub use cycle::is_cyclic;
pub use shortest_paths::ShortestPaths;
