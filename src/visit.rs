//! Graph traversals: breadth-first search, depth-first search and the
//! depth-first forest.
//!
//! Every traversal returns a fresh [`VisitResult`] recording, for each vertex,
//! its [`Color`], its parent in the traversal tree and either its distance
//! from the source (BFS) or its discovery and finish times (DFS).
//!
//! Neighbors are always explored in increasing index order, so a traversal is
//! fully deterministic. In particular, the iterative and the recursive DFS
//! produce identical results.
//!
//! # Examples
//!
//! ```
//! use incidence_graph::{graph::IncidenceGraph, prelude::*, visit::{Color, Time}};
//!
//! let graph = IncidenceGraph::from_edges(4, [(0, 1), (1, 2)]).unwrap();
//! let visit = graph.dfs_tree(VertexId::from(0)).unwrap();
//!
//! assert_eq!(visit.start_time(VertexId::from(2)), Some(Time(3)));
//! assert_eq!(visit.finish_time(VertexId::from(0)), Some(Time(6)));
//! assert_eq!(visit.color(VertexId::from(3)), Some(Color::White));
//! ```

use std::fmt;

use crate::core::VertexId;

pub mod bfs;
pub mod dfs;

/// Visitation state of a vertex. It only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Color {
    /// Not discovered yet.
    #[default]
    White,
    /// Discovered, but not finished.
    Gray,
    /// Finished.
    Black,
}

/// DFS timestamp.
///
/// Timestamps are issued by a single counter per traversal starting at
/// [`Time::START`], each event taking the next value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(pub usize);

impl Time {
    pub const START: Time = Time(1);

    /// Returns the current value and advances the counter.
    pub(crate) fn tick(&mut self) -> Time {
        let time = *self;
        self.0 += 1;
        time
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Record {
    color: Color,
    parent: Option<VertexId>,
    distance: Option<usize>,
    start: Option<Time>,
    finish: Option<Time>,
}

/// Outcome of a traversal, one record per vertex of the traversed graph.
///
/// All getters return `None` for a vertex outside of the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitResult {
    records: Vec<Record>,
}

impl VisitResult {
    /// Creates a result with all `vertex_count` vertices white.
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            records: vec![Record::default(); vertex_count],
        }
    }

    /// Returns the number of vertices covered.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn color(&self, vertex: VertexId) -> Option<Color> {
        self.record(vertex).map(|record| record.color)
    }

    /// Returns the vertex from which `vertex` was discovered.
    ///
    /// `None` for the roots and for undiscovered vertices.
    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.record(vertex).and_then(|record| record.parent)
    }

    /// Returns the number of edges on the BFS tree path from the source.
    pub fn distance(&self, vertex: VertexId) -> Option<usize> {
        self.record(vertex).and_then(|record| record.distance)
    }

    pub fn start_time(&self, vertex: VertexId) -> Option<Time> {
        self.record(vertex).and_then(|record| record.start)
    }

    pub fn finish_time(&self, vertex: VertexId) -> Option<Time> {
        self.record(vertex).and_then(|record| record.finish)
    }

    /// Returns an iterator over the vertices of the given color in
    /// increasing order.
    pub fn vertices_with(&self, color: Color) -> impl Iterator<Item = VertexId> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter(move |(_, record)| record.color == color)
            .map(|(index, _)| VertexId::from(index))
    }

    /// Returns an iterator over the vertices on the tree path from `vertex`
    /// up to its root, excluding `vertex` itself.
    pub fn ancestors(&self, vertex: VertexId) -> Ancestors<'_> {
        Ancestors {
            visit: self,
            current: vertex,
        }
    }

    fn record(&self, vertex: VertexId) -> Option<&Record> {
        self.records.get(vertex.as_usize())
    }

    fn record_mut(&mut self, vertex: VertexId) -> &mut Record {
        &mut self.records[vertex.as_usize()]
    }

    pub(crate) fn is_white(&self, vertex: VertexId) -> bool {
        self.color(vertex) == Some(Color::White)
    }

    pub(crate) fn set_color(&mut self, vertex: VertexId, color: Color) {
        self.record_mut(vertex).color = color;
    }

    pub(crate) fn set_parent(&mut self, vertex: VertexId, parent: VertexId) {
        self.record_mut(vertex).parent = Some(parent);
    }

    pub(crate) fn set_distance(&mut self, vertex: VertexId, distance: usize) {
        self.record_mut(vertex).distance = Some(distance);
    }

    pub(crate) fn set_start_time(&mut self, vertex: VertexId, time: Time) {
        self.record_mut(vertex).start = Some(time);
    }

    pub(crate) fn set_finish_time(&mut self, vertex: VertexId, time: Time) {
        self.record_mut(vertex).finish = Some(time);
    }
}

/// Iterator over the ancestors of a vertex in a traversal tree.
///
/// Returned by [`VisitResult::ancestors`].
pub struct Ancestors<'a> {
    visit: &'a VisitResult,
    current: VertexId,
}

impl Iterator for Ancestors<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.current = self.visit.parent(self.current)?;
        Some(self.current)
    }
}
