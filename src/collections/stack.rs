use super::{Frontier, LinkedList};

/// A last-in, first-out stack over a [`LinkedList`]. The top of the stack is the list head.
#[derive(Clone, Debug, Default)]
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack {
            list: LinkedList::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.list.prepend(value);
    }

    /// Removes and returns the top value, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.list.remove_head()
    }

    pub fn peek(&self) -> Option<&T> {
        self.list.fetch(1)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<T> Frontier<T> for Stack<T> {
    const DISCIPLINE: &'static str = "lifo";

    /// Pushes in descending order so the smallest value ends up on top.
    fn admit<I>(&mut self, ascending: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        for value in ascending.into_iter().rev() {
            self.push(value);
        }
    }

    fn take(&mut self) -> Option<T> {
        self.pop()
    }

    fn is_empty(&self) -> bool {
        Stack::is_empty(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn last_in_first_out() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.pop(), Some(2));
        stack.push(3);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn admitted_values_pop_ascending() {
        let mut stack = Stack::new();
        stack.admit([7, 8]);
        stack.admit([1, 2, 3]);
        let drained: Vec<_> = std::iter::from_fn(|| stack.take()).collect();
        assert_eq!(drained, [1, 2, 3, 7, 8]);
    }
}
