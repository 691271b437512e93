//! Recursive insertion and removal with AVL rebalancing.
//!
//! Every function takes ownership of a subtree and returns the subtree that
//! replaces it, so the caller simply stores the result back into its link.

use std::cmp::Ordering;

use log::trace;

use crate::node::{Link, Node};

/// Largest height difference tolerated between two sibling subtrees.
pub const ALLOWED_IMBALANCE: i32 = 1;

/// Inserts `value` into the subtree and returns the new subtree root.
/// Sets `inserted` if the value was not present yet.
///
/// A single insertion grows at most one subtree by one level, so at most one
/// single or double rotation is needed on the way back up.
pub(crate) fn insert<T: Ord>(link: Link<T>, value: T, inserted: &mut bool) -> Box<Node<T>> {
    let mut node = match link {
        None => {
            *inserted = true;
            return Node::create(value);
        }
        Some(node) => node,
    };

    match value.cmp(&node.value) {
        Ordering::Less => {
            let outer = node.left.as_ref().map_or(true, |left| value < left.value);
            node.left = Some(insert(node.left.take(), value, inserted));
            if node.left_height() - node.right_height() == 2 {
                node = if outer {
                    rotate_right(node)
                } else {
                    double_with_left_child(node)
                };
            }
        }
        Ordering::Greater => {
            let outer = node.right.as_ref().map_or(true, |right| right.value < value);
            node.right = Some(insert(node.right.take(), value, inserted));
            if node.right_height() - node.left_height() == 2 {
                node = if outer {
                    rotate_left(node)
                } else {
                    double_with_right_child(node)
                };
            }
        }
        // Already present
        Ordering::Equal => {}
    }

    node.adjust_height();
    node
}

/// Removes `value` from the subtree and returns the remaining subtree.
/// Sets `removed` if the value was found.
///
/// Unlike insertion, a removal can unbalance every ancestor on the search path,
/// so the subtree is rebalanced on each level on the way back up.
pub(crate) fn remove<T: Ord>(link: Link<T>, value: &T, removed: &mut bool) -> Link<T> {
    let mut node = link?;

    match value.cmp(&node.value) {
        Ordering::Less => node.left = remove(node.left.take(), value, removed),
        Ordering::Greater => node.right = remove(node.right.take(), value, removed),
        Ordering::Equal => {
            *removed = true;
            match (node.left.take(), node.right.take()) {
                (Some(left), Some(right)) => {
                    // Replace by in-order successor
                    let (right, successor) = remove_min(right);
                    node.value = successor;
                    node.left = Some(left);
                    node.right = right;
                }
                // Stem or leaf, splice out
                (left, right) => return left.or(right),
            }
        }
    }

    Some(rebalance(node))
}

/// Unlinks the smallest node of a non-empty subtree.
/// Returns the remaining subtree together with the smallest value.
fn remove_min<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (right, value)
        }
        Some(left) => {
            let (left, min) = remove_min(left);
            node.left = left;
            (Some(rebalance(node)), min)
        }
    }
}

/// Restores the AVL condition at the subtree root if necessary and adjusts its height.
/// On equally high grandchildren the single rotation is chosen.
pub(crate) fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let left_height = node.left_height();
    let right_height = node.right_height();

    if left_height - right_height > ALLOWED_IMBALANCE {
        let left_is_inner_heavy = node
            .left
            .as_ref()
            .map_or(false, |left| left.left_height() < left.right_height());
        if left_is_inner_heavy {
            double_with_left_child(node)
        } else {
            rotate_right(node)
        }
    } else if right_height - left_height > ALLOWED_IMBALANCE {
        let right_is_inner_heavy = node
            .right
            .as_ref()
            .map_or(false, |right| right.right_height() < right.left_height());
        if right_is_inner_heavy {
            double_with_right_child(node)
        } else {
            rotate_left(node)
        }
    } else {
        node.adjust_height();
        node
    }
}

/// Promotes the left child above the node (rotation with left child).
fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    match node.left.take() {
        None => node,
        Some(mut left) => {
            node.left = left.right.take();
            node.adjust_height();
            left.right = Some(node);
            left.adjust_height();
            trace!("rotated right, subtree height is now {}", left.height);
            left
        }
    }
}

/// Promotes the right child above the node (rotation with right child).
fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    match node.right.take() {
        None => node,
        Some(mut right) => {
            node.right = right.left.take();
            node.adjust_height();
            right.left = Some(node);
            right.adjust_height();
            trace!("rotated left, subtree height is now {}", right.height);
            right
        }
    }
}

fn double_with_left_child<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.left = node.left.take().map(rotate_left);
    rotate_right(node)
}

fn double_with_right_child<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.right = node.right.take().map(rotate_right);
    rotate_left(node)
}
