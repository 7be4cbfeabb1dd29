//! # Relation Classification
//!
//! Reads the edge set as a binary relation `R` over the vertex set and tests the classic
//! properties:
//!
//! | property | definition |
//! |----------|------------|
//! | reflexive | `v R v` for every vertex `v` |
//! | symmetric | `a R b` implies `b R a` |
//! | transitive | `a R b` and `b R c` imply `a R c` |
//! | anti-symmetric | `a R b` and `b R a` imply `a = b` |
//! | equivalence | reflexive, symmetric and transitive |
//! | partial order | reflexive, anti-symmetric and transitive |
//!
//! All predicates are vacuously true on the empty graph. Vertices are compared by value.

use std::{fmt, hash::Hash};

use itertools::Itertools;

use super::Graph;

/// Which relation properties a graph's edge set has.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RelationProfile {
    pub reflexive: bool,
    pub symmetric: bool,
    pub transitive: bool,
    pub antisymmetric: bool,
}

impl RelationProfile {
    pub fn is_equivalence(&self) -> bool {
        self.reflexive && self.symmetric && self.transitive
    }

    pub fn is_partial_order(&self) -> bool {
        self.reflexive && self.antisymmetric && self.transitive
    }
}

impl fmt::Display for RelationProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let held = [
            ("reflexive", self.reflexive),
            ("symmetric", self.symmetric),
            ("transitive", self.transitive),
            ("anti-symmetric", self.antisymmetric),
        ]
        .into_iter()
        .filter_map(|(name, holds)| holds.then_some(name))
        .join(", ");

        if held.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{held}")
        }
    }
}

impl<T: Hash + Eq, O> Graph<T, O> {
    /// Every vertex has a self-loop.
    pub fn is_reflexive(&self) -> bool {
        self.vertices.iter().all(|v| self.contains_edge(v, v))
    }

    /// Every edge has its mirror image. A self-loop mirrors itself.
    pub fn is_symmetric(&self) -> bool {
        self.edges
            .iter()
            .all(|e| self.contains_edge(&e.destination, &e.source))
    }

    /// Every two-edge chain `a -> b -> c` is short-cut by an edge `a -> c`.
    pub fn is_transitive(&self) -> bool {
        let successors = self.successors_by_source();
        self.edges.iter().all(|e| {
            successors
                .get(&e.destination)
                .map_or(true, |next| next.iter().all(|c| self.contains_edge(&e.source, c)))
        })
    }

    /// No two distinct vertices are linked in both directions.
    pub fn is_antisymmetric(&self) -> bool {
        self.edges
            .iter()
            .all(|e| e.is_loop() || !self.contains_edge(&e.destination, &e.source))
    }

    pub fn is_equivalence(&self) -> bool {
        self.is_reflexive() && self.is_symmetric() && self.is_transitive()
    }

    pub fn is_partial_order(&self) -> bool {
        self.is_reflexive() && self.is_antisymmetric() && self.is_transitive()
    }

    pub fn relation_profile(&self) -> RelationProfile {
        RelationProfile {
            reflexive: self.is_reflexive(),
            symmetric: self.is_symmetric(),
            transitive: self.is_transitive(),
            antisymmetric: self.is_antisymmetric(),
        }
    }
}
