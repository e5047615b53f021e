use std::{
    cmp::Reverse,
    collections::{hash_map::Entry, BinaryHeap},
};

use fixedbitset::FixedBitSet;
use rustc_hash::FxHashMap;

use crate::core::{base::ensure_vertex, Edge, Error, Neighbors, Result, VertexId, Weighted};

use super::{Queued, ShortestPaths};

pub fn dijkstra<G>(graph: &G, source: VertexId) -> Result<ShortestPaths>
where
    G: Neighbors + Weighted + ?Sized,
{
    ensure_vertex(graph, source)?;

    let vertex_count = graph.vertex_count();
    let mut settled = FixedBitSet::with_capacity(vertex_count);

    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();
    let mut queue = BinaryHeap::new();

    dist.insert(source, 0.0);
    queue.push(Reverse(Queued {
        dist: 0.0,
        vertex: source,
    }));

    while let Some(Reverse(Queued {
        dist: vertex_dist,
        vertex,
    })) = queue.pop()
    {
        // Stale entry left behind by a relaxation.
        if settled.contains(vertex.as_usize()) {
            continue;
        }

        for next in graph.neighbors(vertex) {
            if settled.contains(next.as_usize()) {
                continue;
            }

            let edge = Edge::new(vertex, next);
            let weight = graph.edge_weight(&edge)?;

            if weight < 0.0 {
                return Err(Error::NegativeWeight { edge, weight });
            }

            let next_dist = vertex_dist + weight;

            match dist.entry(next) {
                Entry::Occupied(mut curr_dist) => {
                    if next_dist < *curr_dist.get() {
                        curr_dist.insert(next_dist);
                        // Instead of decreasing the key, the vertex is pushed
                        // again and the outdated entry is skipped when popped.
                        queue.push(Reverse(Queued {
                            dist: next_dist,
                            vertex: next,
                        }));
                        pred.insert(next, vertex);
                    }
                }
                // Unknown distance is infinite, an infinite weight does not
                // reach the vertex.
                Entry::Vacant(slot) if next_dist < f64::INFINITY => {
                    slot.insert(next_dist);
                    queue.push(Reverse(Queued {
                        dist: next_dist,
                        vertex: next,
                    }));
                    pred.insert(next, vertex);
                }
                Entry::Vacant(_) => {}
            }
        }

        settled.insert(vertex.as_usize());
    }

    tracing::debug!(%source, reached = dist.len(), "dijkstra finished");

    Ok(ShortestPaths {
        source,
        vertex_count,
        dist,
        pred,
    })
}
