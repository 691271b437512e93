//! A generic AVL tree.
//!
//! [`AvlTree`] stores unique, totally ordered values and keeps itself balanced on
//! every insertion and removal. Besides lookups it offers the smallest and largest
//! value, the tree height, pre-, in- and post-order walks and a Graphviz rendering
//! of its structure.
//!
//! ```
//! use avltree::AvlTree;
//! let mut tree: AvlTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//! tree.remove(&3);
//! assert_eq!(tree.inorder(), vec![1, 4, 5, 7, 8, 9]);
//! assert_eq!(tree.min(), Ok(&1));
//! assert_eq!(tree.max(), Ok(&9));
//! println!("{}", tree.graphviz());
//! ```

mod balance;
mod error;
mod graphviz;
mod node;
mod tree;

pub use balance::ALLOWED_IMBALANCE;
pub use error::TreeError;
pub use graphviz::Graphviz;
pub use tree::AvlTree;
