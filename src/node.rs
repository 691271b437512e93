use std::cmp;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) height: i32,
}

impl<T> Node<T> {
    pub(crate) fn create(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
            height: 0,
        })
    }

    /// Releases a subtree children first, then the node itself.
    pub(crate) fn destroy(mut node: Box<Self>) {
        if let Some(left) = node.left.take() {
            Self::destroy(left);
        }
        if let Some(right) = node.right.take() {
            Self::destroy(right);
        }
    }

    pub(crate) fn left_height(&self) -> i32 {
        height(&self.left)
    }

    pub(crate) fn right_height(&self) -> i32 {
        height(&self.right)
    }

    pub(crate) fn adjust_height(&mut self) {
        self.height = cmp::max(self.left_height(), self.right_height()) + 1;
    }
}

/// Cached height of a subtree, -1 if the subtree is empty.
pub(crate) fn height<T>(link: &Link<T>) -> i32 {
    match link {
        None => -1,
        Some(node) => node.height,
    }
}
