use crate::node::Node;

/// An [`Iterator`] performing a depth-first, pre-order walk of a subtree,
/// yielding each node before the nodes of its left subtree, and those before
/// the nodes of its right subtree.
#[derive(Debug)]
pub struct PreorderIter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreorderIter<'a, T> {
    pub(crate) fn new(root: &'a Node<T>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a, T> Iterator for PreorderIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Push the right child first so the left subtree is visited first.
        self.stack.extend(v.right());
        self.stack.extend(v.left());

        Some(v)
    }
}
