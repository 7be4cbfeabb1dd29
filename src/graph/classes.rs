//! # Equivalence Classes, Roots and Neighbor Order
//!
//! What counts as a root depends on the relation:
//!
//! - **Equivalence relation**: one root per equivalence class, its least member under the
//!   graph's vertex order.
//! - **Anything else**: every vertex with at least one outgoing edge and no incoming edge.
//!   Isolated vertices have no outgoing edge, so they are not roots.
//!
//! In an equivalence relation every member of a class is directly linked to every other
//! member, so a vertex's class is the vertex plus its one-hop neighbors in either direction.

use std::hash::Hash;

use ahash::AHashSet;
use indexmap::{IndexMap, IndexSet};
use log::debug;

use super::Graph;
use crate::order::VertexOrder;

impl<T: Hash + Eq, O> Graph<T, O> {
    /// `vertex` and every vertex it shares an edge with, in either direction.
    ///
    /// Only meaningful as a class when the graph is an equivalence relation.
    fn linked_with<'g>(&'g self, vertex: &'g T) -> IndexSet<&'g T> {
        let mut class = IndexSet::new();
        class.insert(vertex);
        for edge in &self.edges {
            if edge.source == *vertex {
                class.insert(&edge.destination);
            } else if edge.destination == *vertex {
                class.insert(&edge.source);
            }
        }
        class
    }

    /// The equivalence class of `vertex`.
    ///
    /// Empty when the graph is not an equivalence relation or when `vertex` is not one of its
    /// vertices.
    pub fn equivalence_class(&self, vertex: &T) -> IndexSet<T>
    where
        T: Clone,
    {
        let Some(vertex) = self.vertices.get(vertex) else {
            return IndexSet::new();
        };
        if !self.is_equivalence() {
            return IndexSet::new();
        }
        self.linked_with(vertex).into_iter().cloned().collect()
    }

    /// Vertices with outgoing edges and no incoming edges, in vertex insertion order.
    fn sources(&self) -> Vec<&T> {
        let has_out: AHashSet<&T> = self.edges.iter().map(|e| &e.source).collect();
        let has_in: AHashSet<&T> = self.edges.iter().map(|e| &e.destination).collect();

        self.vertices
            .iter()
            .filter(|v| has_out.contains(v) && !has_in.contains(v))
            .collect()
    }
}

impl<T: Hash + Eq, O: VertexOrder<T>> Graph<T, O> {
    /// Maps every vertex to the least member of its one-hop neighborhood.
    ///
    /// Under an equivalence relation this is the least member of the vertex's class.
    fn class_minima(&self) -> IndexMap<&T, &T> {
        let mut minima: IndexMap<&T, &T> = self.vertices.iter().map(|v| (v, v)).collect();
        for edge in &self.edges {
            for (member, other) in [
                (&edge.source, &edge.destination),
                (&edge.destination, &edge.source),
            ] {
                if let Some(least) = minima.get_mut(member) {
                    if O::compare(other, *least).is_lt() {
                        *least = other;
                    }
                }
            }
        }
        minima
    }

    /// The roots, ascending.
    pub(crate) fn sorted_roots(&self) -> Vec<&T> {
        let mut roots: Vec<&T> = if self.is_equivalence() {
            debug!(
                "equivalence relation over {} vertices: taking class minima as roots",
                self.vertex_count()
            );
            self.class_minima()
                .into_values()
                .collect::<IndexSet<_>>()
                .into_iter()
                .collect()
        } else {
            debug!(
                "general relation over {} vertices: taking source vertices as roots",
                self.vertex_count()
            );
            self.sources()
        };
        O::sort(&mut roots);
        roots
    }

    /// The root vertices, ascending under the vertex order.
    ///
    /// For an equivalence relation this is one representative per class, the least member;
    /// otherwise it is every vertex with out-degree at least one and in-degree zero.
    pub fn roots(&self) -> IndexSet<T>
    where
        T: Clone,
    {
        self.sorted_roots().into_iter().cloned().collect()
    }

    /// Every equivalence class once, members ascending, classes ordered by their least member.
    ///
    /// Empty when the graph is not an equivalence relation.
    pub fn equivalence_classes(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        if !self.is_equivalence() {
            return Vec::new();
        }

        let mut classes: IndexMap<&T, Vec<&T>> = IndexMap::new();
        for (member, least) in self.class_minima() {
            classes.entry(least).or_default().push(member);
        }
        classes.sort_by(|a, _, b, _| O::compare(a, b));

        classes
            .into_values()
            .map(|mut members| {
                O::sort(&mut members);
                members.into_iter().cloned().collect()
            })
            .collect()
    }

    /// The destinations of all edges leaving `vertex`, ascending under the vertex order.
    ///
    /// This is the order in which every traversal expands a vertex.
    pub fn ordered_edge_list(&self, vertex: &T) -> Vec<T>
    where
        T: Clone,
    {
        let mut destinations: Vec<&T> = self
            .edges
            .iter()
            .filter(|e| e.source == *vertex)
            .map(|e| &e.destination)
            .collect();
        O::sort(&mut destinations);
        destinations.into_iter().cloned().collect()
    }
}
