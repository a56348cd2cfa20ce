use std::collections::VecDeque;

use crate::node::Node;

/// An [`Iterator`] performing a breadth-first walk of a subtree, yielding the
/// nodes of each level from left to right before descending to the next.
#[derive(Debug)]
pub struct LevelOrderIter<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrderIter<'a, T> {
    pub(crate) fn new(root: &'a Node<T>) -> Self {
        Self {
            queue: VecDeque::from([root]),
        }
    }
}

impl<'a, T> Iterator for LevelOrderIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.queue.pop_front()?;

        self.queue.extend(v.left());
        self.queue.extend(v.right());

        Some(v)
    }
}
