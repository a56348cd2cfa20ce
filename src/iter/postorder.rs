use crate::node::Node;

/// An [`Iterator`] performing a depth-first, post-order walk of a subtree,
/// yielding each node after all the nodes of its left and right subtrees.
#[derive(Debug)]
pub struct PostorderIter<'a, T> {
    /// Nodes to visit, paired with whether their children have already been
    /// pushed onto the stack.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostorderIter<'a, T> {
    pub(crate) fn new(root: &'a Node<T>) -> Self {
        Self {
            stack: vec![(root, false)],
        }
    }
}

impl<'a, T> Iterator for PostorderIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (v, expanded) = self.stack.pop()?;
            if expanded {
                return Some(v);
            }

            // Revisit this node once both subtrees have been yielded, left
            // before right.
            self.stack.push((v, true));
            self.stack.extend(v.right().map(|n| (n, false)));
            self.stack.extend(v.left().map(|n| (n, false)));
        }
    }
}
