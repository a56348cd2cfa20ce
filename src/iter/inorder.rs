use crate::node::Node;

/// An [`Iterator`] performing a depth-first, in-order walk of a subtree,
/// yielding nodes in ascending order of their elements.
#[derive(Debug)]
pub struct InorderIter<'a, T> {
    /// Ancestors whose left subtree is being walked.
    ancestors: Vec<&'a Node<T>>,

    /// The subtree to walk before the next ancestor is yielded.
    cursor: Option<&'a Node<T>>,
}

impl<'a, T> InorderIter<'a, T> {
    pub(crate) fn new(root: &'a Node<T>) -> Self {
        Self {
            ancestors: vec![],
            cursor: Some(root),
        }
    }
}

impl<'a, T> Iterator for InorderIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(n) = self.cursor {
            self.ancestors.push(n);
            self.cursor = n.left();
        }

        let n = self.ancestors.pop()?;
        self.cursor = n.right();

        Some(n)
    }
}
