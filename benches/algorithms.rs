mod common;

use common::{random_graph, random_weighted_graph, RANDOM_SEED};
use fastrand::Rng;
use incidence_graph::{
    algo::{connected_components::Algo, ConnectedComponents, ShortestPaths},
    prelude::*,
};

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 500], args = [0.05, 0.25])]
fn dijkstra_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = random_weighted_graph(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let start = VertexId::from(0);

    bencher.bench(|| ShortestPaths::on(&graph).run(start));
}

#[divan::bench(consts = [100, 500], args = [0.05, 0.25])]
fn dfs_forest_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = random_graph(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| graph.dfs_forest(VertexId::from(0)));
}

#[divan::bench(consts = [100, 500], args = [0.05, 0.25])]
fn bfs_tree_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = random_graph(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| graph.bfs_tree(VertexId::from(0)));
}

#[divan::bench(consts = [100, 500], args = [0.01, 0.05])]
fn is_cyclic_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = random_graph(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| graph.is_cyclic());
}

#[divan::bench(consts = [100, 500])]
fn connected_components_dfs<const N: usize>(bencher: divan::Bencher) {
    let graph = random_graph(N, 0.01, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| ConnectedComponents::on(&graph).using(Algo::Dfs).run());
}

#[divan::bench(consts = [100, 500])]
fn connected_components_bfs<const N: usize>(bencher: divan::Bencher) {
    let graph = random_graph(N, 0.01, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| ConnectedComponents::on(&graph).using(Algo::Bfs).run());
}
