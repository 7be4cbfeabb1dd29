use super::{Frontier, LinkedList};

/// A first-in, first-out queue over a [`LinkedList`].
#[derive(Clone, Debug, Default)]
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            list: LinkedList::new(),
        }
    }

    /// Adds `value` at the back.
    pub fn enqueue(&mut self, value: T) {
        self.list.append(value);
    }

    /// Removes and returns the front value, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.list.remove_head()
    }

    /// The front value, without removing it.
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

impl<T> Frontier<T> for Queue<T> {
    const DISCIPLINE: &'static str = "fifo";

    fn admit<I>(&mut self, ascending: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        for value in ascending {
            self.enqueue(value);
        }
    }

    fn take(&mut self) -> Option<T> {
        self.dequeue()
    }

    fn is_empty(&self) -> bool {
        Queue::is_empty(self)
    }
}
