#![allow(dead_code)]

use fastrand::Rng;
use incidence_graph::{
    graph::{IncidenceGraph, WeightedIncidenceGraph},
    prelude::*,
};

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        // Geometric skipping over the lower triangle of the adjacency matrix.
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            Some((*v, *w))
        } else {
            None
        }
    }
}

pub fn random_graph(vertex_count: usize, density: f32, rng: &mut Rng) -> IncidenceGraph {
    let mut graph = IncidenceGraph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_vertex();
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(Edge::new(u, v)).unwrap();
    }

    graph
}

pub fn random_weighted_graph(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> WeightedIncidenceGraph {
    let mut graph = WeightedIncidenceGraph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_vertex();
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph
            .add_edge_weighted(Edge::new(u, v), rng.f64() * 100.0)
            .unwrap();
    }

    graph
}
