//! Iterators over the nodes of a subtree.
//!
//! All traversals are driven by an explicit stack (or queue) rather than
//! recursion, so walking a degenerate tree does not grow the call stack.

mod inorder;
mod level_order;
mod owned_iter;
mod postorder;
mod preorder;

pub use inorder::*;
pub use level_order::*;
pub use owned_iter::*;
pub use postorder::*;
pub use preorder::*;
