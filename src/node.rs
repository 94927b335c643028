use std::cmp::Ordering;

#[derive(Debug)]
pub(super) enum RemoveResult<V> {
    /// The value was removed from the tree.
    Removed(V),

    /// The direct descendent node contains the value, but contains no children
    /// and must be unlinked by the parent.
    ParentUnlink,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    /// Child node pointers.
    left: Option<Box<Node<K, V>>>,
    right: Option<Box<Node<K, V>>>,

    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    /// Descend the subtree rooted at `self`, returning a mutable reference to
    /// the value stored against `key`.
    ///
    /// If `key` is absent, exactly one new leaf [`Node`] holding `key` and the
    /// value returned by `default` is linked at the point the search ran out
    /// of tree. An existing value is never overwritten, and `default` is not
    /// called.
    pub(crate) fn find_or_insert_with(
        self: &mut Box<Self>,
        key: K,
        default: impl FnOnce() -> V,
    ) -> &mut V
    where
        K: Ord,
    {
        let child = match key.cmp(&self.key) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return &mut self.value,
            Ordering::Greater => &mut self.right,
        };

        match child {
            Some(v) => v.find_or_insert_with(key, default),
            None => {
                // Insert the key as a new immediate descendent of self.
                let v = child.insert(Box::new(Self::new(key, default())));
                &mut v.value
            }
        }
    }

    pub(crate) fn insert(self: &mut Box<Self>, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        let child = match key.cmp(&self.key) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => {
                return Some(std::mem::replace(&mut self.value, value));
            }
            Ordering::Greater => &mut self.right,
        };

        match child {
            Some(v) => v.insert(key, value),
            None => {
                // Insert the value as a new immediate descendent of self.
                *child = Some(Box::new(Self::new(key, value)));
                None
            }
        }
    }

    pub(super) fn remove(self: &mut Box<Self>, key: &K) -> Option<RemoveResult<V>>
    where
        K: Ord,
    {
        // Recurse down the subtree rooted at `self`.
        //
        // If the value is not found, or successfully removed, the result is
        // returned. If the direct descendent node contains the value and no
        // children, it returns [`RemoveResult::ParentUnlink`] and the node is
        // unlinked here in the parent before returning the result to the
        // caller.
        match key.cmp(&self.key) {
            Ordering::Less => return remove_recurse(&mut self.left, key),
            Ordering::Greater => return remove_recurse(&mut self.right, key),
            Ordering::Equal => {
                // This node holds the value to be removed from the tree.
            }
        };

        // This node may have 0, 1 or 2 child node(s):
        //
        //                          +----------+
        //                          |  parent  |
        //                          +----------+
        //                                |
        //                                v
        //                          +----------+
        //                     +----|   self   |----+
        //                     |    +----------+    |
        //                     |                    |
        //                     v                    v
        //               +-----------+       +------------+
        //               | self.left |       | self.right |
        //               +-----------+       +------------+
        //
        // With two children, the in-order predecessor of "self" (the maximum
        // node of the "self.left" subtree, found by descending the right-most
        // edge) is unlinked from the left subtree and its key/value pair moves
        // into "self" - the node itself stays in place, so no child links need
        // restructuring and the binary search property is preserved.
        //
        // With one child, that child replaces "self".
        //
        // With no children, the parent unlinks "self".
        let old_value = match (self.left.take(), self.right.take()) {
            (Some(mut left), Some(right)) => {
                self.right = Some(right);

                // Extract the maximum node in the left subtree, if any.
                let pred = match extract_subtree_max(&mut left) {
                    Some(pred) => {
                        self.left = Some(left);
                        pred
                    }
                    None => {
                        // Otherwise "left" itself is the maximum of the left
                        // subtree (it has no right child), and its own left
                        // subtree (if any) is linked in its place.
                        debug_assert!(left.right.is_none());

                        self.left = left.left.take();
                        left
                    }
                };

                // Invariant: the extracted predecessor is a detached leaf.
                debug_assert!(pred.left.is_none());
                debug_assert!(pred.right.is_none());

                // Move the predecessor's key/value pair into this node,
                // yielding the removed value.
                let pred = *pred;
                self.key = pred.key;

                // Invariant: the replacement key sorts strictly less than the
                // removed key.
                debug_assert!(self.key < *key);

                std::mem::replace(&mut self.value, pred.value)
            }

            (Some(left), None) => {
                // "self" has a left child only, which replaces it as the
                // subtree root.
                std::mem::replace(self, left).value
            }

            (None, Some(right)) => {
                // Symmetric: the right child replaces "self".
                std::mem::replace(self, right).value
            }

            (None, None) => {
                // Parent will unlink this "self" node.
                return Some(RemoveResult::ParentUnlink);
            }
        };

        Some(RemoveResult::Removed(old_value))
    }

    /// Pure recursive search for `key` in the subtree rooted at `self`.
    ///
    /// Matching on [`Ordering`] makes the three-way comparison exhaustive -
    /// every probe either matches, or descends towards the only subtree that
    /// can contain `key`.
    pub(crate) fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let node = match key.cmp(&self.key) {
            Ordering::Less => self.left(),
            Ordering::Equal => return true,
            Ordering::Greater => self.right(),
        };

        node.map(|v| v.contains(key)).unwrap_or_default()
    }

    pub(crate) fn get(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        let node = match key.cmp(&self.key) {
            Ordering::Less => self.left(),
            Ordering::Equal => return Some(&self.value),
            Ordering::Greater => self.right(),
        }?;

        node.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        let node = match key.cmp(&self.key) {
            Ordering::Less => self.left.as_deref_mut(),
            Ordering::Equal => return Some(&mut self.value),
            Ordering::Greater => self.right.as_deref_mut(),
        }?;

        node.get_mut(key)
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Split this [`Node`] into disjoint borrows of its key, value, and child
    /// pointers.
    pub(crate) fn parts_mut(&mut self) -> (&K, &mut V, Option<&mut Self>, Option<&mut Self>) {
        (
            &self.key,
            &mut self.value,
            self.left.as_deref_mut(),
            self.right.as_deref_mut(),
        )
    }

    /// Explode this [`Node`] into the key and value `V` it contains.
    pub(crate) fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// Extracts the node holding the maximum subtree value in a descendent of
/// `root`, if any, linking the left subtree of the extracted node in its
/// place.
fn extract_subtree_max<K, V>(root: &mut Box<Node<K, V>>) -> Option<Box<Node<K, V>>> {
    // Descend right to the leaf.
    match extract_subtree_max(root.right.as_mut()?) {
        Some(v) => Some(v),
        None => {
            // The right child is the end of the right edge.
            //
            // ```text
            //                 4
            //                / \
            //               2  <6>   <- here
            //                  / \
            //                 5   7
            // ```
            //
            // Unlink the left node of the right root, which will take its
            // place as the new right node of "root" (if any).
            let right_left = root.right.as_mut().and_then(|v| v.left.take());

            std::mem::replace(&mut root.right, right_left)
        }
    }
}

/// Recurse into `node`, calling [`Node::remove()`] to remove the provided
/// `key` from the subtree rooted at `node`, if it exists.
///
/// Returns [`None`] if the key is not found.
///
/// Clears the `node` pointer if the [`Node::remove()`] call returns
/// [`RemoveResult::ParentUnlink`], returning the extracted value within a
/// [`RemoveResult::Removed`] variant.
pub(super) fn remove_recurse<K, V>(
    node: &mut Option<Box<Node<K, V>>>,
    key: &K,
) -> Option<RemoveResult<V>>
where
    K: Ord,
{
    let remove_ret = node.as_mut().and_then(|v| v.remove(key))?;

    let v = match remove_ret {
        RemoveResult::Removed(v) => v,
        RemoveResult::ParentUnlink => {
            let node = node.take().unwrap();
            debug_assert!(node.key == *key);

            node.value
        }
    };

    Some(RemoveResult::Removed(v))
}
