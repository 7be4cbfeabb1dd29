//! A singly-linked list with O(1) access to both ends.
//!
//! Nodes live in a slot vector and link to each other through [`SlotId`]s instead of pointers,
//! which keeps the tail reference safe without `Rc`/`RefCell`. Slots freed by
//! [`LinkedList::remove_head`] are reused by later insertions.

use std::fmt::{self, Debug};

use derive_more::{From, Into};

/// Index of a node slot inside a [`LinkedList`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, From, Into)]
pub struct SlotId(usize);

#[derive(Clone, Debug)]
struct Slot<T> {
    value: Option<T>,
    next: Option<SlotId>,
}

/// A singly-linked sequence with head and tail references and an element count.
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | [`prepend`](Self::prepend) | O(1) |
/// | [`append`](Self::append) | O(1) |
/// | [`remove_head`](Self::remove_head) | O(1) |
/// | [`fetch`](Self::fetch) | O(pos) |
/// | [`len`](Self::len) | O(1) |
#[derive(Clone)]
pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    free: Vec<SlotId>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    fn alloc(&mut self, value: T, next: Option<SlotId>) -> SlotId {
        let slot = Slot {
            value: Some(value),
            next,
        };
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = slot;
                id
            }
            None => {
                self.slots.push(slot);
                SlotId::from(self.slots.len() - 1)
            }
        }
    }

    /// Inserts `value` as the new head.
    pub fn prepend(&mut self, value: T) {
        let id = self.alloc(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.head = Some(id);
        self.len += 1;
    }

    /// Inserts `value` as the new tail.
    pub fn append(&mut self, value: T) {
        let id = self.alloc(value, None);
        match self.tail {
            Some(tail) => self.slots[tail.0].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Returns the value at the 1-indexed position `pos`, counting from the head.
    ///
    /// `None` if the list is empty, if `pos` is 0, or if `pos` runs past the tail.
    pub fn fetch(&self, pos: usize) -> Option<&T> {
        if pos == 0 {
            return None;
        }
        self.iter().nth(pos - 1)
    }

    /// Removes and returns the head value, or `None` if the list is empty.
    pub fn remove_head(&mut self) -> Option<T> {
        let head = self.head?;
        let slot = &mut self.slots[head.0];
        let value = slot.value.take();
        self.head = slot.next.take();
        self.free.push(head);
        self.len -= 1;

        if self.head.is_none() {
            self.tail = None;
            self.slots.clear();
            self.free.clear();
        }
        value
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

/// Head-to-tail iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = &self.list.slots[self.current?.0];
        self.current = slot.next;
        slot.value.as_ref()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
