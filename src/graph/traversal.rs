//! # Breadth-First and Depth-First Traversal
//!
//! Both traversals start from the graph's [roots](Graph::roots) and differ only in their
//! [`Frontier`]: a [`Queue`] for breadth-first, a [`Stack`] for depth-first. One step is shared
//! by every variant:
//!
//! 1. take the next vertex from the frontier;
//! 2. record it if it has not been recorded yet;
//! 3. admit its [ordered out-neighbors](Graph::ordered_edge_list) that have not been recorded.
//!
//! Roots and neighbors are always admitted in ascending order. The queue hands them back in
//! that order and the stack pushes them in reverse, so in both cases the smallest vertex comes
//! out first. A vertex may sit in the frontier more than once; only its first take records it.
//!
//! Each traversal has three spellings that yield the same order:
//!
//! - a lazy [`Walk`] from [`Graph::breadth_first`] / [`Graph::depth_first`];
//! - the iterative searches, which collect a `Walk`;
//! - the recursive searches, which recurse once per frontier take.
//!
//! A graph without roots yields nothing, even if it has vertices.
//!
//! ## Stack usage
//!
//! The recursive searches recurse once per frontier take, which is bounded by the number of
//! roots plus the number of edges. Use the iterative forms on graphs large enough for that to
//! matter.

use std::hash::Hash;

use ahash::{AHashMap, AHashSet};
use log::{debug, trace};

use super::Graph;
use crate::{
    collections::{Frontier, Queue, Stack},
    order::VertexOrder,
};

/// Every vertex's out-neighbors, sorted once per traversal.
struct Adjacency<'g, T> {
    successors: AHashMap<&'g T, Vec<&'g T>>,
}

impl<'g, T: Hash + Eq> Adjacency<'g, T> {
    fn new<O: VertexOrder<T>>(graph: &'g Graph<T, O>) -> Self {
        let mut successors = graph.successors_by_source();
        for destinations in successors.values_mut() {
            O::sort(destinations);
        }
        Adjacency { successors }
    }

    fn ordered(&self, vertex: &T) -> &[&'g T] {
        self.successors
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Admits the neighbors of `vertex` that are not in `recorded`.
    fn expand<F>(&self, vertex: &T, frontier: &mut F, recorded: &AHashSet<&'g T>)
    where
        F: Frontier<&'g T>,
    {
        frontier.admit(
            self.ordered(vertex)
                .iter()
                .copied()
                .filter(|next| !recorded.contains(next)),
        );
    }
}

/// A lazy traversal, yielding each reachable vertex the first time the frontier hands it out.
///
/// Created by [`Graph::breadth_first`] and [`Graph::depth_first`].
pub struct Walk<'g, T, F> {
    adjacency: Adjacency<'g, T>,
    frontier: F,
    recorded: AHashSet<&'g T>,
}

impl<'g, T: Hash + Eq, F: Frontier<&'g T>> Walk<'g, T, F> {
    fn seeded<O: VertexOrder<T>>(graph: &'g Graph<T, O>, mut frontier: F) -> Self {
        let roots = graph.sorted_roots();
        trace!("{} walk seeded with {} roots", F::DISCIPLINE, roots.len());
        frontier.admit(roots);
        Walk {
            adjacency: Adjacency::new(graph),
            frontier,
            recorded: AHashSet::new(),
        }
    }
}

impl<'g, T: Hash + Eq, F: Frontier<&'g T>> Iterator for Walk<'g, T, F> {
    type Item = &'g T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(vertex) = self.frontier.take() {
            let first_take = self.recorded.insert(vertex);
            self.adjacency.expand(vertex, &mut self.frontier, &self.recorded);
            if first_take {
                return Some(vertex);
            }
        }
        None
    }
}

/// Visit order plus a set mirroring it for constant-time membership.
struct Visited<'g, T> {
    order: Vec<&'g T>,
    recorded: AHashSet<&'g T>,
}

impl<'g, T: Hash + Eq> Visited<'g, T> {
    fn new() -> Self {
        Visited {
            order: Vec::new(),
            recorded: AHashSet::new(),
        }
    }

    fn record(&mut self, vertex: &'g T) {
        if self.recorded.insert(vertex) {
            self.order.push(vertex);
        }
    }
}

fn drain_recursive<'g, T, F>(
    adjacency: &Adjacency<'g, T>,
    frontier: &mut F,
    visited: &mut Visited<'g, T>,
) where
    T: Hash + Eq,
    F: Frontier<&'g T>,
{
    let Some(vertex) = frontier.take() else {
        return;
    };
    visited.record(vertex);
    adjacency.expand(vertex, frontier, &visited.recorded);
    drain_recursive(adjacency, frontier, visited);
}

impl<T: Hash + Eq, O: VertexOrder<T>> Graph<T, O> {
    /// A lazy breadth-first walk from the roots.
    pub fn breadth_first(&self) -> Walk<'_, T, Queue<&T>> {
        Walk::seeded(self, Queue::new())
    }

    /// A lazy depth-first walk from the roots.
    pub fn depth_first(&self) -> Walk<'_, T, Stack<&T>> {
        Walk::seeded(self, Stack::new())
    }

    fn collect_walk<'g, F>(&'g self, walk: Walk<'g, T, F>, name: &str) -> Vec<T>
    where
        F: Frontier<&'g T>,
        T: Clone,
    {
        let order: Vec<T> = walk.cloned().collect();
        debug!(
            "{name} visited {} of {} vertices",
            order.len(),
            self.vertex_count()
        );
        order
    }

    fn recursive_search<'g, F>(&'g self, mut frontier: F, name: &str) -> Vec<T>
    where
        F: Frontier<&'g T>,
        T: Clone,
    {
        let roots = self.sorted_roots();
        trace!("{name} seeded with {} roots", roots.len());
        frontier.admit(roots);

        let mut visited = Visited::new();
        drain_recursive(&Adjacency::new(self), &mut frontier, &mut visited);
        debug!(
            "{name} visited {} of {} vertices",
            visited.order.len(),
            self.vertex_count()
        );
        visited.order.into_iter().cloned().collect()
    }

    /// Breadth-first order from the roots, driven by a loop over a [`Queue`].
    pub fn iterative_breadth_first_search(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.collect_walk(self.breadth_first(), "iterative breadth-first search")
    }

    /// Breadth-first order from the roots, one recursive call per dequeue.
    pub fn recursive_breadth_first_search(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.recursive_search(Queue::new(), "recursive breadth-first search")
    }

    /// Depth-first order from the roots, driven by a loop over a [`Stack`].
    pub fn iterative_depth_first_search(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.collect_walk(self.depth_first(), "iterative depth-first search")
    }

    /// Depth-first order from the roots, one recursive call per pop.
    pub fn recursive_depth_first_search(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.recursive_search(Stack::new(), "recursive depth-first search")
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use crate::{graph::Graph, order::NumericText, relation};

    fn orders(graph: &Graph<String, NumericText>) -> [String; 4] {
        [
            graph.iterative_breadth_first_search().join(" "),
            graph.recursive_breadth_first_search().join(" "),
            graph.iterative_depth_first_search().join(" "),
            graph.recursive_depth_first_search().join(" "),
        ]
    }

    #[test]
    fn tree_orders() {
        let tree = relation! {
            vertices: [1, 2, 3, 4, 5, 6],
            edges: [(1, 3), (1, 2), (2, 4), (2, 5), (3, 6)],
        };
        let [bfs, rbfs, dfs, rdfs] = orders(&tree);
        insta::assert_snapshot!(bfs, @"1 2 3 4 5 6");
        insta::assert_snapshot!(dfs, @"1 2 4 5 3 6");
        assert_eq!(bfs, rbfs);
        assert_eq!(dfs, rdfs);
    }

    #[test]
    fn several_roots_are_visited_ascending() {
        let forest = relation! {
            vertices: [1, 2, 10, 11, 20],
            edges: [(10, 11), (2, 20), (10, 1)],
        };
        let [bfs, rbfs, dfs, rdfs] = orders(&forest);
        insta::assert_snapshot!(bfs, @"2 10 20 1 11");
        insta::assert_snapshot!(dfs, @"2 20 10 1 11");
        assert_eq!(bfs, rbfs);
        assert_eq!(dfs, rdfs);
    }

    #[test]
    fn diamond_visits_the_join_once() {
        let diamond = relation! {
            vertices: [1, 2, 3, 4, 5],
            edges: [(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)],
        };
        let [bfs, rbfs, dfs, rdfs] = orders(&diamond);
        insta::assert_snapshot!(bfs, @"1 2 3 4 5");
        insta::assert_snapshot!(dfs, @"1 2 4 5 3");
        assert_eq!(bfs, rbfs);
        assert_eq!(dfs, rdfs);
    }

    #[test]
    fn cycles_below_a_root_terminate() {
        let graph = relation! {
            vertices: [0, 1, 2, 3],
            edges: [(0, 1), (1, 2), (2, 3), (3, 1), (2, 2)],
        };
        let [bfs, rbfs, dfs, rdfs] = orders(&graph);
        insta::assert_snapshot!(bfs, @"0 1 2 3");
        insta::assert_snapshot!(dfs, @"0 1 2 3");
        assert_eq!(bfs, rbfs);
        assert_eq!(dfs, rdfs);
    }

    #[test]
    fn equivalence_walks_start_from_class_minima() {
        let graph = relation! {
            vertices: [1, 2, 3, 4],
            edges: [
                (1, 1), (2, 2), (3, 3), (4, 4),
                (1, 4), (4, 1),
                (2, 3), (3, 2),
            ],
        };
        let [bfs, rbfs, dfs, rdfs] = orders(&graph);
        insta::assert_snapshot!(bfs, @"1 2 4 3");
        insta::assert_snapshot!(dfs, @"1 4 2 3");
        assert_eq!(bfs, rbfs);
        assert_eq!(dfs, rdfs);
    }

    #[test]
    fn rootless_graphs_yield_nothing() {
        let cycle = relation! { vertices: [1, 2], edges: [(1, 2), (2, 1)] };
        assert!(orders(&cycle).iter().all(String::is_empty));
        assert_eq!(cycle.breadth_first().count(), 0);
        assert_eq!(cycle.depth_first().count(), 0);
    }

    #[test]
    fn walk_is_lazy() {
        let chain = relation! {
            vertices: [1, 2, 3, 4],
            edges: [(1, 2), (2, 3), (3, 4)],
        };
        let mut walk = chain.depth_first();
        assert_eq!(walk.next().map(String::as_str), Some("1"));
        assert_eq!(walk.next().map(String::as_str), Some("2"));
        assert_eq!(walk.map(String::as_str).join(","), "3,4");
    }
}
