//! # Ordered Collections
//!
//! A singly-linked [`LinkedList`] and the two roles traversals need from it:
//!
//! - [`Queue`]: first in, first out. `enqueue` appends at the tail, `dequeue` removes the head.
//! - [`Stack`]: last in, first out. `push` prepends at the head, `pop` removes the head.
//!
//! Both roles wrap a list instead of exposing it, so a queue can never be prepended to and a
//! stack can never be appended to.
//!
//! The [`Frontier`] trait is the seam between these containers and the graph traversals: a
//! traversal hands its frontier vertices in ascending order and the frontier decides how they
//! come back out.

pub mod linked_list;
pub mod queue;
pub mod stack;

pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;

/// The pending-vertex container of a graph traversal.
pub trait Frontier<T> {
    /// Short name of the discipline, used in log messages.
    const DISCIPLINE: &'static str;

    /// Admits `ascending` so that taking from the frontier yields the smallest of them first
    /// among themselves.
    fn admit<I>(&mut self, ascending: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator;

    /// Takes the next pending item, or `None` once the frontier has drained.
    fn take(&mut self) -> Option<T>;

    fn is_empty(&self) -> bool;
}
