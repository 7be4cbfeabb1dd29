//! # Relation Graphs
//!
//! A [`Graph`] is an immutable pair of a vertex set and a directed edge set. Reading the edge
//! set as a binary relation over the vertices, the graph answers three kinds of questions:
//!
//! - **Classification** ([`relation`]): is the relation reflexive, symmetric, transitive,
//!   anti-symmetric, an equivalence?
//! - **Structure** ([`classes`]): equivalence classes, roots, and the ordered out-neighbors of
//!   a vertex.
//! - **Traversal** ([`traversal`]): breadth-first and depth-first orders from the roots, each
//!   available iteratively, recursively and as a lazy [`Walk`](traversal::Walk).
//!
//! Every ordering decision is made by the graph's [`VertexOrder`](crate::order::VertexOrder)
//! parameter `O`, so all results are deterministic.
//!
//! Nothing is cached: each query recomputes what it needs from the two sets.
//!
//! ## Construction
//!
//! [`Graph::new`] takes the sets as they are. Edges whose endpoints are missing from the vertex
//! set are kept and take part in every query like any other edge; use [`Graph::try_new`],
//! [`Graph::validate`] or [`GraphBuilder::try_build`](builder::GraphBuilder::try_build) to reject
//! them instead.

use std::{
    fmt::{self, Debug, Display},
    hash::Hash,
    marker::PhantomData,
};

use ahash::AHashMap;
use indexmap::{Equivalent, IndexSet};
use itertools::Itertools;
use thiserror::Error;

use crate::order::Natural;

pub mod builder;
pub mod classes;
pub mod relation;
pub mod traversal;


pub use builder::GraphBuilder;
pub use relation::RelationProfile;
pub use traversal::Walk;

/// A directed edge from `source` to `destination`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge<T> {
    source: T,
    destination: T,
}

impl<T> Edge<T> {
    pub fn new(source: T, destination: T) -> Self {
        Edge {
            source,
            destination,
        }
    }

    pub fn source(&self) -> &T {
        &self.source
    }

    pub fn destination(&self) -> &T {
        &self.destination
    }

    pub fn is_loop(&self) -> bool
    where
        T: PartialEq,
    {
        self.source == self.destination
    }

    /// The same edge pointing the other way.
    pub fn reversed(self) -> Self {
        Edge::new(self.destination, self.source)
    }
}

impl<T> From<(T, T)> for Edge<T> {
    fn from((source, destination): (T, T)) -> Self {
        Edge::new(source, destination)
    }
}

impl<T: Display> Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// Borrowed edge used to look up `Edge<T>` in the edge set without cloning the endpoints.
///
/// Hashes exactly like `Edge<T>`: both hash `source` then `destination`.
#[derive(Hash)]
struct EdgeKey<'a, T> {
    source: &'a T,
    destination: &'a T,
}

impl<T: Eq> Equivalent<Edge<T>> for EdgeKey<'_, T> {
    fn equivalent(&self, key: &Edge<T>) -> bool {
        *self.source == key.source && *self.destination == key.destination
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<T> {
    #[error("edge {from:?} -> {to:?} refers to {missing:?}, which is not a vertex of the graph")]
    DanglingEdge { from: T, to: T, missing: T },
}

/// An immutable directed graph over vertices of type `T`, ordered by the strategy `O`.
pub struct Graph<T, O = Natural> {
    vertices: IndexSet<T>,
    edges: IndexSet<Edge<T>>,
    order: PhantomData<fn() -> O>,
}

impl<T: Clone, O> Clone for Graph<T, O> {
    fn clone(&self) -> Self {
        Graph {
            vertices: self.vertices.clone(),
            edges: self.edges.clone(),
            order: PhantomData,
        }
    }
}

impl<T: Debug, O> Debug for Graph<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .finish()
    }
}

impl<T: Display, O> Display for Graph<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}} [{}]",
            self.vertices.iter().join(", "),
            self.edges.iter().join(", ")
        )
    }
}

impl<T: Hash + Eq, O> Graph<T, O> {
    /// Builds a graph from its vertices and edges. Repeated vertices or edges collapse.
    ///
    /// Edge endpoints are not checked against the vertex set.
    pub fn new<V, E>(vertices: V, edges: E) -> Self
    where
        V: IntoIterator<Item = T>,
        E: IntoIterator<Item = Edge<T>>,
    {
        Graph {
            vertices: vertices.into_iter().collect(),
            edges: edges.into_iter().collect(),
            order: PhantomData,
        }
    }

    /// Like [`Graph::new`], but rejects edges that name a vertex outside the vertex set.
    pub fn try_new<V, E>(vertices: V, edges: E) -> Result<Self, GraphError<T>>
    where
        V: IntoIterator<Item = T>,
        E: IntoIterator<Item = Edge<T>>,
        T: Clone,
    {
        let graph = Self::new(vertices, edges);
        graph.validate()?;
        Ok(graph)
    }

    /// Checks that every edge endpoint belongs to the vertex set, reporting the first edge that
    /// does not.
    pub fn validate(&self) -> Result<(), GraphError<T>>
    where
        T: Clone,
    {
        for edge in &self.edges {
            let missing = [&edge.source, &edge.destination]
                .into_iter()
                .find(|v| !self.vertices.contains(*v));
            if let Some(missing) = missing {
                return Err(GraphError::DanglingEdge {
                    from: edge.source.clone(),
                    to: edge.destination.clone(),
                    missing: missing.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn vertices(&self) -> &IndexSet<T> {
        &self.vertices
    }

    pub fn edges(&self) -> &IndexSet<Edge<T>> {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.vertices.contains(vertex)
    }

    pub fn contains_edge(&self, source: &T, destination: &T) -> bool {
        self.edges.contains(&EdgeKey {
            source,
            destination,
        })
    }

    /// Number of edges leaving `vertex`, self-loops included.
    pub fn out_degree(&self, vertex: &T) -> usize {
        self.edges.iter().filter(|e| e.source == *vertex).count()
    }

    /// Number of edges entering `vertex`, self-loops included.
    pub fn in_degree(&self, vertex: &T) -> usize {
        self.edges.iter().filter(|e| e.destination == *vertex).count()
    }

    /// Destinations grouped by source, in edge insertion order.
    pub(crate) fn successors_by_source(&self) -> AHashMap<&T, Vec<&T>> {
        let mut successors: AHashMap<&T, Vec<&T>> = AHashMap::new();
        for edge in &self.edges {
            successors
                .entry(&edge.source)
                .or_default()
                .push(&edge.destination);
        }
        successors
    }
}
