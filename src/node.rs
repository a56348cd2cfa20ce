use std::{cmp::Ordering, fmt};

use crate::{iter::PostorderIter, tree::DuplicatePolicy};

/// A single element of a [`Tree`](crate::Tree), exclusively owning its (up to)
/// two child subtrees.
///
/// Nodes are handed out by reference from lookups and traversals; their
/// contents cannot be mutated from outside the tree as doing so could break
/// the ordering of the tree.
pub struct Node<T> {
    data: T,

    /// Child nodes pointers.
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

/// Shows the element of this node and of its immediate children only, so
/// formatting a node of a deep tree does not walk the whole subtree.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("left", &self.left().map(Node::data))
            .field("right", &self.right().map(Node::data))
            .finish()
    }
}

impl<T> Node<T> {
    pub(crate) fn new(data: T) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }

    /// The element stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The root of the left subtree, holding elements strictly less than
    /// [`Node::data()`].
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, holding elements greater than or equal
    /// to [`Node::data()`].
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Explode this [`Node`] into the element it contains.
    pub(crate) fn into_data(self) -> T {
        self.data
    }

    /// Return the number of edges on the longest path from this node down to
    /// a leaf.
    ///
    /// A node without children has a height of 0.
    pub fn height(&self) -> isize {
        height(Some(self))
    }

    /// Return the number of edges between this node and `target`, a node
    /// within the subtree rooted at `self`.
    ///
    /// Nodes are matched by identity, not by value: two distinct nodes holding
    /// equal elements are told apart.
    ///
    /// Returns -1 if `target` is not reachable from `self`.
    pub fn depth_of(&self, target: &Node<T>) -> isize {
        let mut stack = vec![(self, 0)];
        while let Some((n, depth)) = stack.pop() {
            if std::ptr::eq(n, target) {
                return depth;
            }

            stack.extend(
                n.right()
                    .into_iter()
                    .chain(n.left())
                    .map(|child| (child, depth + 1)),
            );
        }

        -1
    }

    /// Returns true if, for every node in the subtree rooted at `self`, the
    /// heights of the left and right subtrees differ by at most 1.
    ///
    /// Heights are recomputed at every level, making this superlinear in the
    /// size of the subtree. See [`Node::is_balanced_linear()`] for an O(n)
    /// equivalent.
    pub fn is_balanced(&self) -> bool {
        height(self.left()).abs_diff(height(self.right())) <= 1
            && self.left().map_or(true, Node::is_balanced)
            && self.right().map_or(true, Node::is_balanced)
    }

    /// Returns the same result as [`Node::is_balanced()`] in a single
    /// post-order pass over the subtree.
    pub fn is_balanced_linear(&self) -> bool {
        // Heights of the subtrees visited but not yet claimed by their parent.
        let mut heights: Vec<isize> = Vec::new();

        for n in PostorderIter::new(self) {
            // The right subtree completes after the left, so its height is on
            // top of the stack.
            let right = match n.right() {
                Some(_) => heights.pop().unwrap_or(-1),
                None => -1,
            };
            let left = match n.left() {
                Some(_) => heights.pop().unwrap_or(-1),
                None => -1,
            };

            if left.abs_diff(right) > 1 {
                return false;
            }

            heights.push(left.max(right) + 1);
        }

        debug_assert_eq!(heights.len(), 1);
        true
    }

    /// Locate the node holding `data` in the subtree rooted at `self`.
    pub(crate) fn find(&self, data: &T) -> Option<&Self>
    where
        T: Ord,
    {
        let mut ptr = Some(self);

        while let Some(n) = ptr {
            ptr = match data.cmp(&n.data) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(n),
                Ordering::Greater => n.right(),
            };
        }

        None
    }

    /// Follow the left-most edge of the subtree rooted at `self`.
    pub(crate) fn min(&self) -> &Self {
        let mut n = self;
        while let Some(left) = n.left() {
            n = left;
        }
        n
    }

    /// Follow the right-most edge of the subtree rooted at `self`.
    pub(crate) fn max(&self) -> &Self {
        let mut n = self;
        while let Some(right) = n.right() {
            n = right;
        }
        n
    }
}

/// Return the height of the (possibly empty) subtree rooted at `n`.
///
/// An absent subtree has a height of -1, a single node a height of 0.
pub fn height<T>(n: Option<&Node<T>>) -> isize {
    let mut max = -1;

    let mut stack: Vec<(&Node<T>, isize)> = n.map(|v| (v, 0)).into_iter().collect();
    while let Some((n, depth)) = stack.pop() {
        max = max.max(depth);
        stack.extend(
            n.left()
                .into_iter()
                .chain(n.right())
                .map(|child| (child, depth + 1)),
        );
    }

    max
}

/// Build a subtree from `items`, which must be in ascending order, taking
/// each element out of its slot.
///
/// The lower-middle element of each range becomes the subtree root, with the
/// elements before it forming the left subtree and the elements after it the
/// right subtree. For `n` distinct elements the resulting subtree has a
/// height of ⌈log2(n+1)⌉-1.
///
/// If the lower-middle element is one of a run of equal elements, the first
/// of the run becomes the root so that the left subtree holds only strictly
/// smaller elements.
pub(crate) fn build<T>(items: &mut [Option<T>]) -> Option<Box<Node<T>>>
where
    T: Ord,
{
    if items.is_empty() {
        return None;
    }

    let mut middle = (items.len() - 1) / 2;
    while middle > 0 && items[middle - 1] == items[middle] {
        middle -= 1;
    }

    let (left, rest) = items.split_at_mut(middle);
    let (data, right) = rest.split_first_mut()?;

    Some(Box::new(Node {
        data: data.take()?,
        left: build(left),
        right: build(right),
    }))
}

/// Insert `data` as a new leaf of the subtree in `slot`.
///
/// Values equal to an existing node are routed into its right subtree, or
/// dropped when `duplicates` is [`DuplicatePolicy::Ignore`].
///
/// Returns true if a node was added.
pub(crate) fn insert<T>(
    slot: &mut Option<Box<Node<T>>>,
    data: T,
    duplicates: DuplicatePolicy,
) -> bool
where
    T: Ord,
{
    let mut slot = slot;

    while let Some(n) = slot {
        slot = match data.cmp(&n.data) {
            Ordering::Less => &mut n.left,
            Ordering::Equal if duplicates == DuplicatePolicy::Ignore => return false,
            Ordering::Equal | Ordering::Greater => &mut n.right,
        };
    }

    *slot = Some(Box::new(Node::new(data)));
    true
}

/// Remove the node holding `data` from the subtree in `slot`, if any.
///
/// A node with a single child is replaced by that child. A node with two
/// children is kept in place and takes on the minimum element of its right
/// subtree, which is then unlinked from that subtree instead.
///
/// Returns true if a node was removed.
pub(crate) fn remove<T>(slot: &mut Option<Box<Node<T>>>, data: &T) -> bool
where
    T: Ord,
{
    let Some(slot) = find_slot(slot, data) else {
        return false;
    };
    let Some(mut n) = slot.take() else {
        return false;
    };

    *slot = match (n.take_left(), n.take_right()) {
        (None, None) => None,
        (None, Some(right)) => Some(right),
        (Some(left), None) => Some(left),
        (Some(left), Some(right)) => {
            n.left = Some(left);
            n.right = Some(right);

            // The successor always exists as the right subtree is non-empty.
            if let Some(successor) = take_min(&mut n.right) {
                n.data = successor;
            }

            Some(n)
        }
    };

    true
}

/// Descend from `slot` to the link holding the node with `data`, if any.
fn find_slot<'a, T>(
    slot: &'a mut Option<Box<Node<T>>>,
    data: &T,
) -> Option<&'a mut Option<Box<Node<T>>>>
where
    T: Ord,
{
    let mut slot = slot;

    loop {
        let ord = data.cmp(&slot.as_ref()?.data);
        slot = match ord {
            Ordering::Less => &mut slot.as_mut()?.left,
            Ordering::Equal => return Some(slot),
            Ordering::Greater => &mut slot.as_mut()?.right,
        };
    }
}

/// Unlink the left-most node of the subtree in `slot`, splicing its right
/// subtree (if any) into its place, and return the element it held.
fn take_min<T>(slot: &mut Option<Box<Node<T>>>) -> Option<T> {
    let mut slot = slot;

    while slot.as_ref().map_or(false, |n| n.left.is_some()) {
        slot = &mut slot.as_mut()?.left;
    }

    let mut min = slot.take()?;
    debug_assert!(min.left.is_none());

    *slot = min.take_right();
    Some(min.into_data())
}

/// Copy the subtree rooted at `root`.
///
/// Nodes are copied in post-order, each one adopting the already copied roots
/// of its subtrees from the top of `done`.
pub(crate) fn clone_subtree<T>(root: &Node<T>) -> Option<Box<Node<T>>>
where
    T: Clone,
{
    let mut done: Vec<Box<Node<T>>> = Vec::new();

    for n in PostorderIter::new(root) {
        // The right subtree completes after the left.
        let right = n.right().and_then(|_| done.pop());
        let left = n.left().and_then(|_| done.pop());

        done.push(Box::new(Node {
            data: n.data.clone(),
            left,
            right,
        }));
    }

    debug_assert_eq!(done.len(), 1);
    done.pop()
}

/// Free every node reachable from `nodes`, unlinking the children of each node
/// before it is dropped so a long chain does not recurse once per node.
pub(crate) fn dismantle<T, I>(nodes: I)
where
    I: IntoIterator<Item = Box<Node<T>>>,
{
    let mut stack = nodes.into_iter().collect::<Vec<_>>();
    while let Some(mut n) = stack.pop() {
        stack.extend(n.take_left());
        stack.extend(n.take_right());
    }
}

/// Link `items` into a chain of right children, in a single pass from the
/// bottom up.
#[cfg(test)]
pub(crate) fn right_chain<T, I>(items: I) -> Option<Box<Node<T>>>
where
    I: DoubleEndedIterator<Item = T>,
{
    items.rev().fold(None, |right, data| {
        Some(Box::new(Node {
            data,
            left: None,
            right,
        }))
    })
}
