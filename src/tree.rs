use std::{fmt, io};

use tracing::{debug, trace};

use crate::{
    iter::{InorderIter, LevelOrderIter, OwnedIter, PostorderIter, PreorderIter},
    node::{self, Node},
    render,
};

/// How [`Tree::insert()`] treats an element equal to one already stored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Route the element into the right subtree of the equal node, storing
    /// it alongside the existing one.
    #[default]
    Right,

    /// Leave the tree unchanged.
    Ignore,
}

/// A binary search tree of ordered elements.
///
/// Balance is established by [`Tree::build()`] and restored on request by
/// [`Tree::rebalance()`]; insertions and deletions do not rebalance.
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
    duplicates: DuplicatePolicy,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        node::dismantle(self.root.take());
    }
}

/// Copies the tree node for node, preserving its shape and duplicate policy.
///
/// The copy is made without recursion, so cloning a degenerate tree does not
/// grow the call stack.
impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root().and_then(node::clone_subtree),
            duplicates: self.duplicates,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("duplicates", &self.duplicates)
            .field("inorder", &self.inorder())
            .finish()
    }
}

/// Draws the shape of the tree, one element per line, with the right subtree
/// above and the left subtree below each node.
///
/// ```
/// use bstree::Tree;
///
/// let t = Tree::build([2, 1, 3]);
///
/// assert_eq!(t.to_string(), "│   ┌── 3\n└── 2\n    └── 1\n");
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => render::write_text(root, f),
            None => Ok(()),
        }
    }
}

impl<T> Tree<T> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self {
            root: None,
            duplicates: DuplicatePolicy::default(),
        }
    }

    /// Construct a balanced tree holding the distinct elements of `items`.
    ///
    /// The resulting tree has a height of ⌈log2(n+1)⌉-1 for `n` distinct
    /// elements.
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let t = Tree::build([5, 3, 8, 1, 4, 7, 9, 5, 3]);
    ///
    /// assert_eq!(t.inorder(), [&1, &3, &4, &5, &7, &8, &9]);
    /// assert_eq!(t.height(), 2);
    /// assert!(t.is_balanced());
    /// ```
    pub fn build<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut items = items.into_iter().collect::<Vec<_>>();
        items.sort_unstable();
        items.dedup();

        let t = Self::from_sorted(items);
        debug!(n_values = t.len(), height = t.height(), "built tree");
        t
    }

    /// Build a balanced tree from `items` in ascending order.
    fn from_sorted(items: Vec<T>) -> Self
    where
        T: Ord,
    {
        let mut slots = items.into_iter().map(Some).collect::<Vec<_>>();
        Self {
            root: node::build(&mut slots),
            duplicates: DuplicatePolicy::default(),
        }
    }

    /// Set the policy applied when inserting an element equal to one already
    /// in the tree.
    ///
    /// ```
    /// use bstree::{DuplicatePolicy, Tree};
    ///
    /// let mut t = Tree::build([1, 2, 3]).with_duplicate_policy(DuplicatePolicy::Ignore);
    /// t.insert(2);
    ///
    /// assert_eq!(t.inorder(), [&1, &2, &3]);
    /// ```
    pub fn with_duplicate_policy(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// The policy applied when inserting an element equal to one already in
    /// the tree.
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// The root node, or [`None`] if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Insert `data` as a new leaf of the tree.
    ///
    /// The tree is not rebalanced.
    pub fn insert(&mut self, data: T)
    where
        T: Ord,
    {
        let inserted = node::insert(&mut self.root, data, self.duplicates);
        trace!(inserted, "insert");
    }

    /// Remove the node holding `data` from the tree, returning true if it was
    /// found.
    ///
    /// Removing an element that is not in the tree is a no-op. The tree is not
    /// rebalanced.
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut t = Tree::build([5, 3, 8, 1, 4, 7, 9]);
    ///
    /// assert!(t.delete(&5));
    /// assert!(!t.delete(&5));
    ///
    /// assert_eq!(t.inorder(), [&1, &3, &4, &7, &8, &9]);
    /// ```
    pub fn delete(&mut self, data: &T) -> bool
    where
        T: Ord,
    {
        let removed = node::remove(&mut self.root, data);
        trace!(removed, "delete");
        removed
    }

    /// Locate the node holding `data`.
    ///
    /// When the tree holds more than one equal element, the one closest to
    /// the root is returned.
    pub fn find(&self, data: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root().and_then(|v| v.find(data))
    }

    /// Returns true if the tree holds an element equal to `data`.
    pub fn contains(&self, data: &T) -> bool
    where
        T: Ord,
    {
        self.find(data).is_some()
    }

    /// The smallest element in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root().map(|v| v.min().data())
    }

    /// The largest element in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root().map(|v| v.max().data())
    }

    /// The number of elements in the tree.
    ///
    /// This walks the whole tree.
    pub fn len(&self) -> usize {
        self.iter_inorder().count()
    }

    /// Returns true if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Remove all elements from the tree.
    pub fn clear(&mut self) {
        // Let Drop unlink the nodes.
        drop(Self {
            root: self.root.take(),
            duplicates: self.duplicates,
        });
    }

    /// Iterate over the nodes breadth-first, level by level from the root and
    /// left to right within each level.
    pub fn iter_level_order(&self) -> impl Iterator<Item = &Node<T>> {
        self.root().into_iter().flat_map(LevelOrderIter::new)
    }

    /// Iterate over the nodes depth-first, visiting each node before its left
    /// and then right subtrees.
    pub fn iter_preorder(&self) -> impl Iterator<Item = &Node<T>> {
        self.root().into_iter().flat_map(PreorderIter::new)
    }

    /// Iterate over the nodes depth-first in ascending order of their
    /// elements.
    pub fn iter_inorder(&self) -> impl Iterator<Item = &Node<T>> {
        self.root().into_iter().flat_map(InorderIter::new)
    }

    /// Iterate over the nodes depth-first, visiting each node after its left
    /// and then right subtrees.
    pub fn iter_postorder(&self) -> impl Iterator<Item = &Node<T>> {
        self.root().into_iter().flat_map(PostorderIter::new)
    }

    /// The elements in breadth-first order.
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let t = Tree::build([5, 3, 8, 1, 4, 7, 9]);
    ///
    /// assert_eq!(t.level_order(), [&5, &3, &8, &1, &4, &7, &9]);
    /// ```
    pub fn level_order(&self) -> Vec<&T> {
        self.level_order_with(Node::data)
    }

    /// Apply `f` to each node in breadth-first order, collecting the results.
    pub fn level_order_with<'a, F, U>(&'a self, f: F) -> Vec<U>
    where
        F: FnMut(&'a Node<T>) -> U,
    {
        self.iter_level_order().map(f).collect()
    }

    /// The elements in pre-order.
    pub fn preorder(&self) -> Vec<&T> {
        self.preorder_with(Node::data)
    }

    /// Apply `f` to each node in pre-order, collecting the results.
    pub fn preorder_with<'a, F, U>(&'a self, f: F) -> Vec<U>
    where
        F: FnMut(&'a Node<T>) -> U,
    {
        self.iter_preorder().map(f).collect()
    }

    /// The elements in ascending order.
    pub fn inorder(&self) -> Vec<&T> {
        self.inorder_with(Node::data)
    }

    /// Apply `f` to each node in ascending order, collecting the results.
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let t = Tree::build([5, 3, 8]);
    ///
    /// assert_eq!(t.inorder_with(|n| n.data() * 10), [30, 50, 80]);
    /// ```
    pub fn inorder_with<'a, F, U>(&'a self, f: F) -> Vec<U>
    where
        F: FnMut(&'a Node<T>) -> U,
    {
        self.iter_inorder().map(f).collect()
    }

    /// The elements in post-order.
    pub fn postorder(&self) -> Vec<&T> {
        self.postorder_with(Node::data)
    }

    /// Apply `f` to each node in post-order, collecting the results.
    pub fn postorder_with<'a, F, U>(&'a self, f: F) -> Vec<U>
    where
        F: FnMut(&'a Node<T>) -> U,
    {
        self.iter_postorder().map(f).collect()
    }

    /// The number of edges on the longest path from the root to a leaf.
    ///
    /// An empty tree has a height of -1, a tree of one element a height of 0.
    pub fn height(&self) -> isize {
        node::height(self.root())
    }

    /// The number of edges between the root and `node`.
    ///
    /// Nodes are matched by identity; returns -1 if `node` is not part of this
    /// tree.
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let t = Tree::build([5, 3, 8, 1, 4, 7, 9]);
    ///
    /// let n = t.find(&4).unwrap();
    /// assert_eq!(t.depth(n), 2);
    ///
    /// let other = Tree::build([4]);
    /// assert_eq!(t.depth(other.root().unwrap()), -1);
    /// ```
    pub fn depth(&self, node: &Node<T>) -> isize {
        self.root().map_or(-1, |v| v.depth_of(node))
    }

    /// Returns true if, for every node, the heights of the left and right
    /// subtrees differ by at most 1. An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, Node::is_balanced)
    }

    /// Rebuild the tree from its elements in ascending order, restoring
    /// balance without changing the stored elements.
    ///
    /// Elements inserted more than once under [`DuplicatePolicy::Right`] are
    /// all kept; as an equal element can only be placed in a right subtree, a
    /// tree holding many copies of one element may not be fully balanced
    /// afterwards.
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut t = Tree::build([1, 2, 3]);
    /// for v in [4, 5, 6] {
    ///     t.insert(v);
    /// }
    /// assert!(!t.is_balanced());
    ///
    /// t.rebalance();
    /// assert!(t.is_balanced());
    /// assert_eq!(t.inorder(), [&1, &2, &3, &4, &5, &6]);
    /// ```
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        let items = OwnedIter::new(self.root.take()).collect::<Vec<_>>();
        let n_values = items.len();

        self.root = Self::from_sorted(items).root.take();

        debug!(n_values, height = self.height(), "rebalanced tree");
    }

    /// Write the shape of the tree to `out`, as rendered by the [`Display`]
    /// implementation.
    ///
    /// [`Display`]: fmt::Display
    pub fn render<W>(&self, mut out: W) -> io::Result<()>
    where
        W: io::Write,
        T: fmt::Display,
    {
        write!(out, "{self}")?;
        out.flush()
    }

    /// Render the tree as a graphviz digraph.
    pub fn to_dot(&self) -> String
    where
        T: fmt::Display,
    {
        render::print_dot(self.root())
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = OwnedIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        OwnedIter::new(self.root.take())
    }
}
