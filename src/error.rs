use thiserror::Error;

/// Errors reported by [`AvlTree`](crate::AvlTree).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The minimum or maximum of an empty tree was requested.
    #[error("underflow: tree is empty")]
    Underflow,
}
