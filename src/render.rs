use std::fmt::{self, Display, Write};

use crate::node::Node;

const BRANCH_LEFT: &str = "└── ";
const BRANCH_RIGHT: &str = "┌── ";
const INDENT_EDGE: &str = "│   ";
const INDENT_EMPTY: &str = "    ";

/// A pending step of the text rendering.
struct Frame<'a, T> {
    node: &'a Node<T>,

    /// The indentation carried down from the ancestors of `node`.
    prefix: String,

    /// True if `node` is the left child of its parent (or the root).
    is_left: bool,

    /// True once the right subtree has been scheduled and `node` itself is
    /// due to be written.
    emit: bool,
}

/// Write the shape of the subtree rooted at `root`, one node per line, with
/// the right subtree drawn above each node and the left subtree below it.
///
/// ```text
/// │   ┌── 8
/// └── 5
///     └── 3
/// ```
pub(crate) fn write_text<T, W>(root: &Node<T>, buf: &mut W) -> fmt::Result
where
    T: Display,
    W: Write,
{
    let mut stack = vec![Frame {
        node: root,
        prefix: String::new(),
        is_left: true,
        emit: false,
    }];

    while let Some(f) = stack.pop() {
        if f.emit {
            let branch = if f.is_left { BRANCH_LEFT } else { BRANCH_RIGHT };
            writeln!(buf, "{}{}{}", f.prefix, branch, f.node.data())?;
            continue;
        }

        // Frames are popped in reverse: the right subtree, then this node,
        // then the left subtree.
        if let Some(left) = f.node.left() {
            let indent = if f.is_left { INDENT_EMPTY } else { INDENT_EDGE };
            stack.push(Frame {
                node: left,
                prefix: format!("{}{}", f.prefix, indent),
                is_left: true,
                emit: false,
            });
        }

        let right = f.node.right().map(|right| {
            let indent = if f.is_left { INDENT_EDGE } else { INDENT_EMPTY };
            Frame {
                node: right,
                prefix: format!("{}{}", f.prefix, indent),
                is_left: false,
                emit: false,
            }
        });

        stack.push(Frame { emit: true, ..f });
        stack.extend(right);
    }

    Ok(())
}

/// Render the subtree rooted at `root` as a graphviz digraph.
///
/// Nodes are identified by the order in which they are discovered, so equal
/// elements are drawn as distinct nodes.
pub(crate) fn print_dot<T>(root: Option<&Node<T>>) -> String
where
    T: Display,
{
    let mut buf = String::new();
    write_dot(root, &mut buf).expect("writing to a String cannot fail");
    buf
}

fn write_dot<T, W>(root: Option<&Node<T>>, buf: &mut W) -> fmt::Result
where
    T: Display,
    W: Write,
{
    writeln!(buf, "digraph {{")?;

    let mut next_id = 1_usize;
    let mut stack: Vec<(&Node<T>, usize)> = root.map(|v| (v, 0)).into_iter().collect();

    while let Some((n, id)) = stack.pop() {
        writeln!(buf, "{id} [label={:?}];", n.data().to_string())?;

        for (child, side) in [(n.left(), "l"), (n.right(), "r")] {
            match child {
                Some(child) => {
                    let child_id = next_id;
                    next_id += 1;

                    writeln!(buf, "{id} -> {child_id};")?;
                    stack.push((child, child_id));
                }
                None => {
                    writeln!(buf, "null_{id}_{side} [shape=point,style=invis];")?;
                    writeln!(buf, "{id} -> null_{id}_{side} [style=invis];")?;
                }
            };
        }
    }

    writeln!(buf, "}}")
}
