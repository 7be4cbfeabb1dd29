//! # Vertex Orders
//!
//! Every ordering decision in a [`Graph`](crate::graph::Graph) (root selection, neighbor order
//! during traversals, the minimum of an equivalence class) goes through one [`VertexOrder`]
//! strategy, chosen statically through the graph's second type parameter.
//!
//! ## Strategies
//!
//! - [`Natural`]: the vertex type's own [`Ord`].
//! - [`NumericText`]: textual labels compared by integer value, so `"2" < "10"`.
//! - [`Reversed`]: the inverse of any other strategy.
//!
//! A strategy must be a total order that agrees with the vertex type's equality: two vertices
//! compare [`Ordering::Equal`] exactly when they are equal.

use std::{cmp::Ordering, marker::PhantomData};

/// A total order over vertices of type `T`.
///
/// Strategies are zero-sized marker types; the order is a property of the type, not of a value.
pub trait VertexOrder<T: ?Sized> {
    fn compare(a: &T, b: &T) -> Ordering;

    /// Sorts `vertices` ascending under this order.
    fn sort(vertices: &mut [&T]) {
        vertices.sort_by(|a, b| Self::compare(a, b));
    }

    /// The least element of `vertices`, or `None` if it is empty.
    fn min_of<'a, I>(vertices: I) -> Option<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        vertices.into_iter().min_by(|a, b| Self::compare(a, b))
    }
}

/// Orders vertices by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> VertexOrder<T> for Natural {
    fn compare(a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders textual labels by their integer value.
///
/// - Labels that parse as integers (surrounding whitespace ignored) compare numerically and
///   come before every other label.
/// - All other labels compare lexically.
/// - Labels with the same integer value but a different spelling (`"01"` and `"1"`) fall back
///   to a lexical comparison, so distinct labels never compare equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NumericText;

impl NumericText {
    fn integer(label: &str) -> Option<i128> {
        label.trim().parse().ok()
    }
}

impl<T: AsRef<str> + ?Sized> VertexOrder<T> for NumericText {
    fn compare(a: &T, b: &T) -> Ordering {
        let (a, b) = (a.as_ref(), b.as_ref());
        match (Self::integer(a), Self::integer(b)) {
            (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    }
}

/// The inverse of the order `O`.
pub struct Reversed<O>(PhantomData<O>);

impl<T: ?Sized, O: VertexOrder<T>> VertexOrder<T> for Reversed<O> {
    fn compare(a: &T, b: &T) -> Ordering {
        O::compare(b, a)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn numeric_labels_order_by_value() {
        let mut labels = vec!["10", "2", "1", "33", "0"];
        NumericText::sort(&mut labels);
        assert_eq!(labels, ["0", "1", "2", "10", "33"]);
    }

    #[test]
    fn integer_labels_precede_words() {
        let mut labels = vec!["b", "10", "a", "-3", "9"];
        NumericText::sort(&mut labels);
        assert_eq!(labels, ["-3", "9", "10", "a", "b"]);
    }

    #[test]
    fn equal_values_with_different_spelling_stay_distinct() {
        assert_eq!(NumericText::compare("01", "1"), Ordering::Less);
        assert_eq!(NumericText::compare("1", "01"), Ordering::Greater);
        assert_eq!(NumericText::compare("7", "7"), Ordering::Equal);
    }

    #[test]
    fn mixed_labels_stay_transitive() {
        // A plain "numeric if both parse, else lexical" rule would cycle on these three.
        let (two, ten, word) = ("2", "10", "1a");
        assert_eq!(NumericText::compare(two, ten), Ordering::Less);
        assert_eq!(NumericText::compare(ten, word), Ordering::Less);
        assert_eq!(NumericText::compare(two, word), Ordering::Less);
    }

    #[test]
    fn min_of_and_reversed() {
        let values = [4, 1, 7];
        assert_eq!(Natural::min_of(&values), Some(&1));
        assert_eq!(<Reversed<Natural>>::min_of(&values), Some(&7));
        assert_eq!(Natural::min_of(&[] as &[i32]), None);
    }
}
