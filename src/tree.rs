use crate::{
    entry::Entry,
    iter::{Iter, IterMut, OwnedIter},
    node::{remove_recurse, Node, RemoveResult},
};

/// An ordered key/value map backed by a plain binary search tree.
///
/// Keys are stored in ascending order as defined by their [`Ord`]
/// implementation. The tree performs no rebalancing - lookups, inserts and
/// removals cost `O(depth)`, with the depth defined by the insertion order.
#[derive(Debug, Clone)]
pub struct BstMap<K, V>(Option<Box<Node<K, V>>>);

impl<K, V> Default for BstMap<K, V> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<K, V> BstMap<K, V>
where
    K: Ord,
{
    /// Return a mutable reference to the value stored against `key`, creating
    /// the entry with a default-initialised value if absent.
    ///
    /// Looking up an absent key creates exactly one new node holding `key` and
    /// [`V::default()`]; an existing value is never overwritten.
    ///
    /// ```
    /// use bstmap::BstMap;
    ///
    /// let mut map: BstMap<&str, usize> = BstMap::default();
    ///
    /// *map.get_or_create("bananas") += 42;
    /// assert_eq!(map.get(&"bananas"), Some(&42));
    /// ```
    ///
    /// [`V::default()`]: Default::default
    pub fn get_or_create(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// As [`get_or_create()`], but an absent key is initialised with the value
    /// returned by `default` instead of [`V::default()`].
    ///
    /// `default` is not called if the key exists.
    ///
    /// [`get_or_create()`]: Self::get_or_create
    /// [`V::default()`]: Default::default
    pub(crate) fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        match self.0 {
            Some(ref mut v) => v.find_or_insert_with(key, default),
            None => {
                // Lazily initialise the root node on first use.
                let root = self.0.insert(Box::new(Node::new(key, default())));
                root.value_mut()
            }
        }
    }

    /// Store `value` against `key`, returning the displaced value if the key
    /// was already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.0 {
            Some(ref mut v) => v.insert(key, value),
            None => {
                self.0 = Some(Box::new(Node::new(key, value)));
                None
            }
        }
    }

    /// Return a reference to the value stored against `key`, if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.0.as_ref().and_then(|v| v.get(key))
    }

    /// Return a mutable reference to the value stored against `key`, if any.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.0.as_mut().and_then(|v| v.get_mut(key))
    }

    /// Return true if `key` exists in the map.
    pub fn contains_key(&self, key: &K) -> bool {
        self.0.as_ref().map(|v| v.contains(key)).unwrap_or_default()
    }

    /// Remove `key` from the map, returning the value stored against it.
    ///
    /// Removing an absent key is a no-op, returning [`None`].
    pub fn remove(&mut self, key: &K) -> Option<V> {
        match remove_recurse(&mut self.0, key)? {
            RemoveResult::Removed(v) => Some(v),
            RemoveResult::ParentUnlink => unreachable!(),
        }
    }

    /// Return a view into the entry stored against `key`, which may be vacant.
    ///
    /// ```
    /// use bstmap::BstMap;
    ///
    /// let mut map: BstMap<&str, usize> = BstMap::default();
    ///
    /// map.entry("platanos").and_modify(|v| *v += 1).or_insert(42);
    /// assert_eq!(map.get(&"platanos"), Some(&42));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        Entry::new(key, self)
    }
}

impl<K, V> BstMap<K, V> {
    /// Iterate over all key/value pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.0.as_deref())
    }

    /// Iterate over all keys in ascending order, yielding a mutable reference
    /// to each value.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(self.0.as_deref_mut())
    }

    /// Return true if the map contains no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl<'a, K, V> IntoIterator for &'a BstMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut BstMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V> IntoIterator for BstMap<K, V> {
    type Item = (K, V);
    type IntoIter = OwnedIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        OwnedIter::new(self.0)
    }
}

impl<K, V> Extend<(K, V)> for BstMap<K, V>
where
    K: Ord,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for BstMap<K, V>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}
