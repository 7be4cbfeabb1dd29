//! # Relnet
//!
//! Relnet reads a directed graph as a binary relation over its vertices. It classifies the
//! relation (reflexive, symmetric, transitive, anti-symmetric, equivalence), extracts
//! equivalence classes and roots, and walks the graph breadth-first or depth-first from those
//! roots in a fully deterministic order.
//!
//! The traversals run on the small [`collections`] shipped with the crate: a singly linked
//! list and the [`Queue`](collections::Queue) and [`Stack`](collections::Stack) built on it.
//!
//! Vertex order is a type parameter of the graph, see [`order`]. Labelled graphs are most
//! easily written with [`relation!`]:
//!
//! ```
//! let graph = relnet::relation! {
//!     vertices: [1, 2, 3],
//!     edges: [(1, 2), (2, 3)],
//! };
//! assert_eq!(graph.iterative_breadth_first_search(), ["1", "2", "3"]);
//! assert!(!graph.is_equivalence());
//! ```

pub mod collections;
pub mod graph;
pub mod order;

/// Builds a `Graph<String, NumericText>` from bare labels.
///
/// Each label is a single token, stringified as written, so `10` becomes `"10"` and `a`
/// becomes `"a"`.
///
/// ```
/// let classes = relnet::relation! {
///     vertices: [1, 2, 3],
///     edges: [(1, 1), (2, 2), (3, 3), (1, 2), (2, 1)],
/// };
/// assert!(classes.is_equivalence());
/// assert_eq!(classes.roots().len(), 2);
/// ```
#[macro_export]
macro_rules! relation {
    (vertices: [$($v:tt),* $(,)?], edges: [$(($s:tt, $d:tt)),* $(,)?] $(,)?) => {
        $crate::graph::Graph::<::std::string::String, $crate::order::NumericText>::new(
            [$(::std::string::String::from(stringify!($v))),*],
            [$($crate::graph::Edge::new(
                ::std::string::String::from(stringify!($s)),
                ::std::string::String::from(stringify!($d)),
            )),*],
        )
    };
}
