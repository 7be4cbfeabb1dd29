use iai_callgrind::{black_box, library_benchmark, library_benchmark_group, main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use relnet::graph::{Edge, Graph};

// Setup: `size` vertices, each edge `a -> b` with `a < b` kept with probability `density`.
// Acyclic, so vertex 0 is always a root when it has an edge.
fn setup_dag((size, density): (u32, f64)) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut edges = Vec::new();
    for a in 0..size {
        for b in (a + 1)..size {
            if rng.gen::<f64>() < density {
                edges.push(Edge::new(a, b));
            }
        }
    }
    Graph::new(0..size, edges)
}

// Setup: `size` vertices split into `blocks` classes, related exactly when in the same class.
fn setup_equivalence((size, blocks): (u32, u32)) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(43);
    let block_of: Vec<u32> = (0..size).map(|_| rng.gen_range(0..blocks)).collect();
    let mut edges = Vec::new();
    for (a, block_a) in (0..size).zip(&block_of) {
        for (b, block_b) in (0..size).zip(&block_of) {
            if block_a == block_b {
                edges.push(Edge::new(a, b));
            }
        }
    }
    Graph::new(0..size, edges)
}

#[library_benchmark]
#[bench::sparse(args = [(200, 0.02)], setup = setup_dag)]
#[bench::dense(args = [(200, 0.3)], setup = setup_dag)]
fn bench_iterative_bfs(graph: Graph<u32>) -> usize {
    let order = graph.iterative_breadth_first_search();
    black_box(order.len())
}

#[library_benchmark]
#[bench::sparse(args = [(200, 0.02)], setup = setup_dag)]
#[bench::dense(args = [(200, 0.3)], setup = setup_dag)]
fn bench_iterative_dfs(graph: Graph<u32>) -> usize {
    let order = graph.iterative_depth_first_search();
    black_box(order.len())
}

#[library_benchmark]
#[bench::sparse(args = [(200, 0.02)], setup = setup_dag)]
fn bench_recursive_dfs(graph: Graph<u32>) -> usize {
    let order = graph.recursive_depth_first_search();
    black_box(order.len())
}

#[library_benchmark]
#[bench::dense(args = [(200, 0.3)], setup = setup_dag)]
#[bench::few_classes(args = [(60, 3)], setup = setup_equivalence)]
fn bench_relation_profile(graph: Graph<u32>) -> bool {
    black_box(graph.relation_profile().is_equivalence())
}

#[library_benchmark]
#[bench::few_classes(args = [(60, 3)], setup = setup_equivalence)]
#[bench::many_classes(args = [(60, 20)], setup = setup_equivalence)]
fn bench_roots(graph: Graph<u32>) -> usize {
    black_box(graph.roots().len())
}

library_benchmark_group!(
    name = traversal;
    benchmarks = bench_iterative_bfs, bench_iterative_dfs, bench_recursive_dfs
);

library_benchmark_group!(
    name = classification;
    benchmarks = bench_relation_profile, bench_roots
);

main!(library_benchmark_groups = traversal, classification);
