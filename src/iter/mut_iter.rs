use crate::node::Node;

/// An in-order traversal yielding each key alongside a mutable reference to
/// its value.
///
/// Values may be mutated through the yielded pairs; the tree shape itself is
/// never modified (keys are immutable, so the binary search property cannot be
/// violated).
#[derive(Debug)]
pub struct IterMut<'a, K, V> {
    /// Ancestors whose right subtree has not yet been visited, pre-split into
    /// disjoint key/value/right-child borrows.
    stack: Vec<(&'a K, &'a mut V, Option<&'a mut Node<K, V>>)>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(crate) fn new(root: Option<&'a mut Node<K, V>>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a mut Node<K, V>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            let (key, value, left, right) = v.parts_mut();
            self.stack.push((key, value, right));
            ptr = left;
        }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value, right) = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = right {
            self.push_subtree(right);
        }

        Some((key, value))
    }
}
