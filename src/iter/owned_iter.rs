use crate::node::{self, Node};

/// An [`Iterator`] consuming a tree and yielding its elements in ascending
/// order.
///
/// Returned by the `into_iter()` impl of [`Tree`](crate::Tree).
#[derive(Debug)]
pub struct OwnedIter<T> {
    /// Nodes whose left subtree has been detached, still owning their right
    /// subtree. The next element to yield is on top.
    pending: Vec<Box<Node<T>>>,

    /// A subtree none of whose elements has been yielded yet.
    unvisited: Option<Box<Node<T>>>,
}

impl<T> OwnedIter<T> {
    pub(crate) fn new(root: Option<Box<Node<T>>>) -> Self {
        Self {
            pending: vec![],
            unvisited: root,
        }
    }
}

impl<T> Iterator for OwnedIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        // Walk the left spine of the unvisited subtree, detaching each node
        // from its left child as it is queued.
        while let Some(mut n) = self.unvisited.take() {
            self.unvisited = n.take_left();
            self.pending.push(n);
        }

        let mut n = self.pending.pop()?;
        self.unvisited = n.take_right();

        Some(n.into_data())
    }
}

impl<T> Drop for OwnedIter<T> {
    fn drop(&mut self) {
        // The queued nodes each own a right subtree of unbounded depth.
        node::dismantle(self.pending.drain(..).chain(self.unvisited.take()));
    }
}
