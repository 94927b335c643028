use crate::BstMap;

/// A view into a single entry in a [`BstMap`], which may either be vacant or
/// occupied.
///
/// This `enum` is constructed from the [`entry`] method on [`BstMap`].
///
/// [`entry`]: BstMap::entry
#[derive(Debug)]
pub enum Entry<'a, K, V> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V>),
}

/// A view into a vacant entry in a [`BstMap`].
/// It is part of the [`Entry`] enum.
#[derive(Debug)]
pub struct VacantEntry<'a, K, V> {
    key: K,
    tree: &'a mut BstMap<K, V>,
}

/// A view into an occupied entry in a [`BstMap`].
/// It is part of the [`Entry`] enum.
#[derive(Debug)]
pub struct OccupiedEntry<'a, K, V> {
    key: K,
    tree: &'a mut BstMap<K, V>,
}

impl<'a, K, V> VacantEntry<'a, K, V>
where
    K: Ord,
{
    /// Gets a reference to the key that would be used when inserting a value
    /// through the VacantEntry.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Take ownership of the key.
    #[inline]
    pub fn into_key(self) -> K {
        self.key
    }

    /// Sets the value of the entry with the VacantEntry's key,
    /// and returns a mutable reference to it.
    #[inline]
    pub fn insert(self, value: V) -> &'a mut V {
        // The key is known to be absent, so this single descent always
        // creates the node holding `value`.
        self.tree.get_or_insert_with(self.key, || value)
    }
}

impl<'a, K, V> OccupiedEntry<'a, K, V>
where
    K: Ord,
{
    /// Gets a reference to the key in the entry.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Gets a reference to the value in the entry.
    #[inline]
    pub fn get(&self) -> &V {
        self.tree.get(&self.key).unwrap()
    }

    /// Gets a mutable reference to the value in the entry.
    #[inline]
    pub fn get_mut(&mut self) -> &mut V {
        self.tree.get_mut(&self.key).unwrap()
    }

    /// Converts the entry into a mutable reference to its value.
    #[inline]
    pub fn into_mut(self) -> &'a mut V {
        self.tree.get_mut(&self.key).unwrap()
    }

    /// Sets the value of the entry with the OccupiedEntry's key,
    /// and returns the entry's old value.
    #[inline]
    pub fn insert(&mut self, value: V) -> V {
        std::mem::replace(self.get_mut(), value)
    }

    /// Takes the value of the entry out of the map, and returns it.
    #[inline]
    pub fn remove(self) -> V {
        self.tree.remove(&self.key).unwrap()
    }
}

impl<'a, K, V> Entry<'a, K, V>
where
    K: Ord,
{
    /// Create a new Entry for the given key and tree.
    pub(crate) fn new(key: K, tree: &'a mut BstMap<K, V>) -> Self {
        if tree.contains_key(&key) {
            Entry::Occupied(OccupiedEntry { key, tree })
        } else {
            Entry::Vacant(VacantEntry { key, tree })
        }
    }

    /// Returns a reference to this entry's key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BstMap;
    ///
    /// let mut map: BstMap<i32, &str> = BstMap::default();
    /// assert_eq!(map.entry(42).key(), &42);
    /// ```
    #[inline]
    pub fn key(&self) -> &K {
        match self {
            Entry::Vacant(entry) => entry.key(),
            Entry::Occupied(entry) => entry.key(),
        }
    }

    /// Ensures a value is in the entry by inserting the default if empty,
    /// and returns a mutable reference to the value in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BstMap;
    ///
    /// let mut map: BstMap<i32, u32> = BstMap::default();
    ///
    /// map.entry(42).or_insert(1);
    /// assert_eq!(map.get(&42), Some(&1));
    ///
    /// *map.entry(42).or_insert(100) += 1;
    /// assert_eq!(map.get(&42), Some(&2));
    /// ```
    #[inline]
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Ensures a value is in the entry by inserting the result of the default
    /// function if empty, and returns a mutable reference to the value in the
    /// entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BstMap;
    ///
    /// let mut map: BstMap<i32, String> = BstMap::default();
    /// let s = "hello".to_string();
    ///
    /// map.entry(42).or_insert_with(|| s);
    ///
    /// assert_eq!(map.get(&42), Some(&"hello".to_string()));
    /// ```
    #[inline]
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Ensures a value is in the entry by inserting, if empty, the result of
    /// the default function. This method allows for generating key-derived
    /// values for insertion by providing the default function a reference to
    /// the key that was moved during the `.entry(key)` method call.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BstMap;
    ///
    /// let mut map: BstMap<i32, i32> = BstMap::default();
    ///
    /// map.entry(42).or_insert_with_key(|key| key * 2);
    ///
    /// assert_eq!(map.get(&42), Some(&84));
    /// ```
    #[inline]
    pub fn or_insert_with_key<F: FnOnce(&K) -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let value = default(entry.key());
                entry.insert(value)
            }
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts into the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BstMap;
    ///
    /// let mut map: BstMap<i32, u32> = BstMap::default();
    ///
    /// map.entry(42)
    ///     .and_modify(|v| *v += 1)
    ///     .or_insert(1);
    /// assert_eq!(map.get(&42), Some(&1));
    ///
    /// map.entry(42)
    ///     .and_modify(|v| *v += 1)
    ///     .or_insert(1);
    /// assert_eq!(map.get(&42), Some(&2));
    /// ```
    #[inline]
    pub fn and_modify<F: FnOnce(&mut V)>(mut self, f: F) -> Self {
        match &mut self {
            Entry::Occupied(entry) => {
                f(entry.get_mut());
            }
            Entry::Vacant(_) => {}
        }
        self
    }

    /// Sets the value of the entry, and returns an OccupiedEntry.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BstMap;
    ///
    /// let mut map: BstMap<i32, &str> = BstMap::default();
    /// let entry = map.entry(42).insert_entry("hello");
    ///
    /// assert_eq!(entry.key(), &42);
    /// ```
    #[inline]
    pub fn insert_entry(self, value: V) -> OccupiedEntry<'a, K, V>
    where
        K: Clone,
    {
        match self {
            Entry::Occupied(mut entry) => {
                entry.insert(value);
                entry
            }
            Entry::Vacant(entry) => {
                let VacantEntry { key, tree } = entry;
                tree.get_or_insert_with(key.clone(), || value);
                OccupiedEntry { key, tree }
            }
        }
    }
}

impl<'a, K, V> Entry<'a, K, V>
where
    K: Ord,
    V: Default,
{
    /// Ensures a value is in the entry by inserting the default value if empty,
    /// and returns a mutable reference to the value in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::BstMap;
    ///
    /// let mut map: BstMap<i32, Option<u32>> = BstMap::default();
    /// map.entry(42).or_default();
    ///
    /// assert_eq!(map.get(&42), Some(&None));
    /// ```
    #[inline]
    pub fn or_default(self) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(V::default()),
        }
    }
}
