use std::{hash::Hash, marker::PhantomData};

use indexmap::IndexSet;

use super::{Edge, Graph, GraphError};
use crate::order::Natural;

/// Collects vertices and edges one at a time before freezing them into a [`Graph`].
#[derive(Clone, Debug)]
pub struct GraphBuilder<T, O = Natural> {
    vertices: IndexSet<T>,
    edges: IndexSet<Edge<T>>,
    order: PhantomData<fn() -> O>,
}

impl<T: Hash + Eq, O> GraphBuilder<T, O> {
    pub fn new() -> Self {
        GraphBuilder {
            vertices: IndexSet::new(),
            edges: IndexSet::new(),
            order: PhantomData,
        }
    }

    /// Adds a vertex, returning its insertion index. Re-adding a vertex returns its first index.
    pub fn add_vertex(&mut self, vertex: T) -> usize {
        self.vertices.insert_full(vertex).0
    }

    /// Adds an edge without touching the vertex set. Returns `false` if the edge was already
    /// present.
    pub fn add_edge(&mut self, source: T, destination: T) -> bool {
        self.edges.insert(Edge::new(source, destination))
    }

    /// Adds both endpoints as vertices, then the edge between them.
    pub fn connect(&mut self, source: T, destination: T) -> bool
    where
        T: Clone,
    {
        self.add_vertex(source.clone());
        self.add_vertex(destination.clone());
        self.add_edge(source, destination)
    }

    pub fn build(self) -> Graph<T, O> {
        self.into()
    }

    /// Builds the graph, rejecting edges whose endpoints were never added as vertices.
    pub fn try_build(self) -> Result<Graph<T, O>, GraphError<T>>
    where
        T: Clone,
    {
        let graph = self.build();
        graph.validate()?;
        Ok(graph)
    }
}

impl<T: Hash + Eq, O> Default for GraphBuilder<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O> From<GraphBuilder<T, O>> for Graph<T, O> {
    fn from(builder: GraphBuilder<T, O>) -> Self {
        Graph {
            vertices: builder.vertices,
            edges: builder.edges,
            order: PhantomData,
        }
    }
}
