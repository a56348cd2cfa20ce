use std::fmt::Debug;

use proptest::prelude::*;

use crate::{node::Node, Tree};

/// The maximum number of values generated for a single test case.
pub(crate) const N_VALUES: usize = 100;

const VALUE_MAX: u8 = 50;

/// Generate arbitrary values from a small domain [0..[`VALUE_MAX`]), so that
/// generated collections contain repeats.
pub(crate) fn arbitrary_value() -> impl Strategy<Value = u8> {
    0..VALUE_MAX
}

/// Assert the BST ordering property of every node in `t`.
///
/// Every element in the left subtree of a node must be strictly less than the
/// node's element, and every element in the right subtree greater than or
/// equal to it.
pub(crate) fn validate_tree_structure<T>(t: &Tree<T>)
where
    T: Ord + Debug,
{
    let root = match t.root() {
        Some(v) => v,
        None => return,
    };

    // Perform a pre-order traversal of the tree, carrying the inclusive lower
    // bound and exclusive upper bound each subtree must fall within.
    let mut stack: Vec<(&Node<T>, Option<&T>, Option<&T>)> = vec![(root, None, None)];
    while let Some((n, lower, upper)) = stack.pop() {
        // Invariant 1: the element is within the bounds set by the ancestors.
        if let Some(lower) = lower {
            assert!(
                n.data() >= lower,
                "node {:?} is in the right subtree of {:?}",
                n.data(),
                lower
            );
        }
        if let Some(upper) = upper {
            assert!(
                n.data() < upper,
                "node {:?} is in the left subtree of {:?}",
                n.data(),
                upper
            );
        }

        // Prepare to visit the children, narrowing the bounds.
        if let Some(left) = n.left() {
            stack.push((left, lower, Some(n.data())));
        }
        if let Some(right) = n.right() {
            stack.push((right, Some(n.data()), upper));
        }
    }

    // The in-order traversal of a valid tree is always sorted.
    assert!(t.inorder().windows(2).all(|w| w[0] <= w[1]));
}
