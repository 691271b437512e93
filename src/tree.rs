//! The AVL tree container.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use log::{debug, trace};

use crate::balance;
use crate::error::TreeError;
use crate::graphviz::Graphviz;
use crate::node::{self, Link, Node};

/// An ordered set of unique values kept in an AVL tree.
///
/// ```
/// use avltree::{AvlTree, TreeError};
/// let mut tree = AvlTree::new();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(30);
/// assert_eq!(tree.root(), Some(&20));
/// assert_eq!(tree.height(), 1);
/// assert_eq!(tree.inorder(), vec![10, 20, 30]);
/// tree.clear();
/// assert_eq!(tree.min(), Err(TreeError::Underflow));
/// ```
pub struct AvlTree<T> {
    root: Link<T>,
    num_nodes: usize,
}

impl<T: Ord> AvlTree<T> {
    /// Creates an empty tree.
    /// No memory is allocated until the first value is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns true if the tree contains the value.
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return true,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Inserts a value and rebalances the tree.
    /// Returns false, leaving the tree untouched, if the value was already present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut inserted = false;
        self.root = Some(balance::insert(self.root.take(), value, &mut inserted));
        if inserted {
            self.num_nodes += 1;
        }
        inserted
    }

    /// Removes a value and rebalances the tree.
    /// Returns whether the value was previously in the tree.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut removed = false;
        self.root = balance::remove(self.root.take(), value, &mut removed);
        if removed {
            debug_assert!(self.num_nodes >= 1);
            self.num_nodes -= 1;
        }
        removed
    }

    /// Asserts that the internal tree structure is consistent:
    /// ordering, AVL balance, cached heights and node count.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        let mut num_nodes = 0;
        Self::traverse(
            &self.root,
            &mut |node: &Node<T>| {
                if let Some(left) = node.left.as_deref() {
                    assert!(left.value < node.value);
                }
                if let Some(right) = node.right.as_deref() {
                    assert!(right.value > node.value);
                }

                // Check height
                let left_height = node.left_height();
                let right_height = node.right_height();
                assert_eq!(node.height, 1 + left_height.max(right_height));

                // Check AVL condition (nearly balance)
                assert!((left_height - right_height).abs() <= balance::ALLOWED_IMBALANCE);

                num_nodes += 1;
            },
            &mut |_| {},
            &mut |_| {},
        );
        assert_eq!(num_nodes, self.num_nodes);

        // Check ordering across subtrees
        let values = self.inorder_refs();
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

impl<T> AvlTree<T> {
    /// Returns true if the tree contains no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of values in the tree.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree: 0 for a single node, -1 if empty.
    pub fn height(&self) -> i32 {
        node::height(&self.root)
    }

    /// Returns the value stored at the root node.
    pub fn root(&self) -> Option<&T> {
        self.root.as_deref().map(|node| &node.value)
    }

    /// Returns the smallest value.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Underflow`] if the tree is empty.
    pub fn min(&self) -> Result<&T, TreeError> {
        let mut node = self.root.as_deref().ok_or_else(|| {
            debug!("min requested on an empty tree");
            TreeError::Underflow
        })?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// Returns the largest value.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Underflow`] if the tree is empty.
    pub fn max(&self) -> Result<&T, TreeError> {
        let mut node = self.root.as_deref().ok_or_else(|| {
            debug!("max requested on an empty tree");
            TreeError::Underflow
        })?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    /// Clears the tree, deallocating all nodes children first.
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            trace!("releasing {} nodes", self.num_nodes);
            Node::destroy(root);
        }
        self.num_nodes = 0;
    }

    /// Renders the tree structure in the Graphviz dot language.
    /// An empty tree renders as an empty string.
    pub fn to_graphviz(&self) -> String
    where
        T: fmt::Display,
    {
        self.graphviz().to_string()
    }

    /// Returns a [`Display`](fmt::Display) adapter rendering the tree as a Graphviz digraph.
    pub fn graphviz(&self) -> Graphviz<'_, T> {
        Graphviz::new(self.root.as_deref())
    }

    /// Returns the values in pre-order: node, left subtree, right subtree.
    pub fn preorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.num_nodes);
        Self::traverse(
            &self.root,
            &mut |node| values.push(node.value.clone()),
            &mut |_| {},
            &mut |_| {},
        );
        values
    }

    /// Returns the values in in-order, i.e. in ascending order.
    pub fn inorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inorder_refs().into_iter().cloned().collect()
    }

    /// Returns the values in post-order: left subtree, right subtree, node.
    pub fn postorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.num_nodes);
        Self::traverse(
            &self.root,
            &mut |_| {},
            &mut |_| {},
            &mut |node| values.push(node.value.clone()),
        );
        values
    }

    fn inorder_refs(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.num_nodes);
        Self::traverse(
            &self.root,
            &mut |_| {},
            &mut |node| values.push(&node.value),
            &mut |_| {},
        );
        values
    }

    fn traverse<'a, Pre, In, Post>(
        link: &'a Link<T>,
        preorder: &mut Pre,
        inorder: &mut In,
        postorder: &mut Post,
    ) where
        Pre: FnMut(&'a Node<T>),
        In: FnMut(&'a Node<T>),
        Post: FnMut(&'a Node<T>),
    {
        if let Some(node) = link.as_deref() {
            preorder(node);
            Self::traverse(&node.left, preorder, inorder, postorder);
            inorder(node);
            Self::traverse(&node.right, preorder, inorder, postorder);
            postorder(node);
        }
    }
}

impl<T> Drop for AvlTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Ord> Default for AvlTree<T> {
    /// Creates an empty tree.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for AvlTree<T> {
    /// Deep copies every node; the copy shares nothing with the original.
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            num_nodes: self.num_nodes,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = source.root.clone();
        self.num_nodes = source.num_nodes;
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlTree<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_set().entries(self.inorder_refs()).finish()
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        iter.into_iter().for_each(move |value| {
            self.insert(value);
        });
    }
}

impl<'a, T> Extend<&'a T> for AvlTree<T>
where
    T: Ord + Copy,
    T: 'a,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a T>,
    {
        self.extend(iter.into_iter().copied());
    }
}
