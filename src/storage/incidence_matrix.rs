use std::fmt;

use bitvec::vec::BitVec;

use crate::core::{Edge, VertexId};

/// The `|V| × |E|` incidence matrix of an undirected graph.
///
/// Entry `[v][e]` is set iff vertex `v` is an endpoint of the edge in column
/// `e`. Each row is a bit vector of length equal to the number of columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidenceMatrix {
    rows: Vec<BitVec>,
    columns: usize,
}

impl IncidenceMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(row_capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(row_capacity),
            columns: 0,
        }
    }

    /// Builds the matrix from scratch for the given vertex count and edge
    /// sequence.
    ///
    /// All edge endpoints must be lower than `vertex_count`.
    pub fn from_edges(vertex_count: usize, edges: &[Edge]) -> Self {
        let rows = (0..vertex_count)
            .map(|row| {
                let vertex = VertexId::from(row);
                edges.iter().map(|edge| edge.contains(vertex)).collect()
            })
            .collect();

        Self {
            rows,
            columns: edges.len(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Appends a row for a vertex that is not incident to any edge yet.
    pub fn push_row(&mut self) {
        self.rows.push(BitVec::repeat(false, self.columns));
    }

    /// Appends a column for `edge`, marking both its endpoint rows.
    pub fn push_column(&mut self, edge: &Edge) {
        for (row, bits) in self.rows.iter_mut().enumerate() {
            bits.push(edge.contains(VertexId::from(row)));
        }
        self.columns += 1;
    }

    /// Removes column `column`, shifting all subsequent columns to the left.
    pub fn remove_column(&mut self, column: usize) {
        assert!(column < self.columns, "column out of bounds");

        for bits in self.rows.iter_mut() {
            bits.remove(column);
        }
        self.columns -= 1;
    }

    pub fn is_incident(&self, vertex: VertexId, column: usize) -> bool {
        self.rows
            .get(vertex.as_usize())
            .and_then(|bits| bits.get(column).map(|bit| *bit))
            .unwrap_or(false)
    }

    /// Returns an iterator over the columns marked in the row of `vertex`.
    pub fn incident_columns(&self, vertex: VertexId) -> impl Iterator<Item = usize> + '_ {
        self.rows
            .get(vertex.as_usize())
            .into_iter()
            .flat_map(|bits| bits.iter_ones())
    }

    /// Returns an iterator over the vertices marked in column `column`.
    pub fn column_vertices(&self, column: usize) -> impl Iterator<Item = VertexId> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(move |(_, bits)| bits.get(column).map(|bit| *bit).unwrap_or(false))
            .map(|(row, _)| VertexId::from(row))
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.columns = 0;
    }

    /// Writes the matrix one row per line, rendering each entry with
    /// `entry(row, column, is_incident)`.
    pub(crate) fn fmt_with<F>(&self, f: &mut fmt::Formatter<'_>, mut entry: F) -> fmt::Result
    where
        F: FnMut(&mut fmt::Formatter<'_>, VertexId, usize, bool) -> fmt::Result,
    {
        for (row, bits) in self.rows.iter().enumerate() {
            f.write_str("[")?;
            for (column, bit) in bits.iter().enumerate() {
                if column > 0 {
                    f.write_str(", ")?;
                }
                entry(f, VertexId::from(row), column, *bit)?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}

impl fmt::Display for IncidenceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, |f, _, _, incident| {
            f.write_str(if incident { "1" } else { "0" })
        })
    }
}
