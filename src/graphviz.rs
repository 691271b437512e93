//! Graphviz export of the tree structure.
//!
//! Every node is declared with a numeric id and its value as label. Absent
//! children are declared as invisible `nill` placeholders, so the drawing keeps
//! the shape of a complete binary tree. Edges to left children are blue, edges to
//! right children red, and a `"Root"` node points at the tree root:
//!
//! ```text
//! digraph {
//!     0 [label="20"];
//!     1 [label="10"];
//!     2 [label=nill, style = invis];
//!     ...
//!     "Root" -> 0;
//!     0 -> 1 [color=blue];
//!     1 -> 2 [ style = invis];
//!     ...
//! }
//! ```

use std::fmt;

use crate::node::Node;

/// Renders a tree as a Graphviz digraph, see [`AvlTree::graphviz`](crate::AvlTree::graphviz).
pub struct Graphviz<'a, T> {
    root: Option<&'a Node<T>>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Nodes,
    Edges,
}

impl<'a, T> Graphviz<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self { root }
    }
}

impl<T: fmt::Display> Graphviz<'_, T> {
    // Both sections walk the tree in the same order, so they hand out the same ids.
    fn write_subtree(
        f: &mut fmt::Formatter<'_>,
        section: Section,
        node: &Node<T>,
        next_id: &mut usize,
    ) -> fmt::Result {
        let id = *next_id;
        if section == Section::Nodes {
            writeln!(f, "\t{} [label=\"{}\"];", id, node.value)?;
        }
        for (child, color) in [(node.left.as_deref(), "blue"), (node.right.as_deref(), "red")] {
            *next_id += 1;
            let child_id = *next_id;
            match (child, section) {
                (Some(child), Section::Nodes) => Self::write_subtree(f, section, child, next_id)?,
                (Some(child), Section::Edges) => {
                    writeln!(f, "\t{} -> {} [color={}];", id, child_id, color)?;
                    Self::write_subtree(f, section, child, next_id)?;
                }
                (None, Section::Nodes) => {
                    writeln!(f, "\t{} [label=nill, style = invis];", child_id)?;
                }
                (None, Section::Edges) => {
                    writeln!(f, "\t{} -> {} [ style = invis];", id, child_id)?;
                }
            }
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Graphviz<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = match self.root {
            None => return Ok(()),
            Some(root) => root,
        };
        writeln!(f, "digraph {{")?;
        Self::write_subtree(f, Section::Nodes, root, &mut 0)?;
        writeln!(f, "\t\"Root\" -> 0;")?;
        Self::write_subtree(f, Section::Edges, root, &mut 0)?;
        write!(f, "}}")
    }
}
