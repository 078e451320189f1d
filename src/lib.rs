//! # assoc-array
//!
//! `assoc-array` provides [`AssociativeArray`], a key-value container backed by a single
//! growable sequence of entries.
//!
//! Lookups are plain linear scans over the entries, compared by value equality, so keys only
//! need to implement `Eq`. There is no hashing and no sorting: entries are kept in insertion
//! order, and removal closes the gap by shifting the following entries left, so the relative
//! order of everything else is preserved.
//!
//! Rust references are never null, yet callers of this container may need to express a
//! missing key. Key arguments therefore accept an `Option`, with `None` playing the role of
//! the null key:
//!
//! - [`set`](AssociativeArray::set), [`get`](AssociativeArray::get) and
//!   [`get_mut`](AssociativeArray::get_mut) reject it with [`Error::NullKey`];
//! - [`has_key`](AssociativeArray::has_key) answers `false`;
//! - [`remove`](AssociativeArray::remove) does nothing.
//!
//! ### Example
//! ```rust
//! use assoc_array::{AssociativeArray, Error};
//!
//! let mut sut: AssociativeArray<&str, i32> = AssociativeArray::new();
//! sut.set("One", 1)?;
//! sut.set("Two", 2)?;
//!
//! assert_eq!(sut.get("One"), Ok(&1));
//! assert_eq!(sut.get("Three"), Err(Error::KeyNotFound));
//! assert_eq!(sut.set(None::<&str>, 3), Err(Error::NullKey));
//!
//! sut.remove("One");
//! assert_eq!(sut.to_string(), "{Two:2}");
//! # Ok::<(), Error>(())
//! ```

mod error;
mod iter;
mod lookup;
mod macros;

pub use error::{Error, Result};
pub use iter::{IntoIter, Iter, Keys, Values};
pub use lookup::Lookup;

use lookup::Located;

use core::fmt;

/// Number of entries an [`AssociativeArray`] can hold before its first growth.
pub const DEFAULT_CAPACITY: usize = 16;

/// A key-value container backed by a growable sequence of entries.
///
/// Every keyed operation scans the entries from the front, so they all run in `O(n)`.
/// The backing store starts at [`DEFAULT_CAPACITY`] slots and doubles whenever an insertion
/// would not fit; it never shrinks.
///
/// Cloning is deep: every key and value is cloned into a fresh buffer, so the clone and the
/// source evolve independently afterwards. Values that are shared handles (`Rc`, `Arc`)
/// still point at the same data after cloning, as their own `Clone` dictates.
///
/// ### Example
/// ```rust
/// use assoc_array::AssociativeArray;
///
/// let mut sut: AssociativeArray<String, u32> = AssociativeArray::new();
/// sut.set(String::from("a"), 1)?;
/// sut.set(String::from("b"), 2)?;
///
/// // `String` keys can be probed with `&str`.
/// assert!(sut.has_key("a"));
/// assert_eq!(sut.to_string(), "{a:1, b:2}");
/// # Ok::<(), assoc_array::Error>(())
/// ```
#[derive(PartialEq, Eq)]
pub struct AssociativeArray<K, V> {
    pairs: Vec<(K, V)>,
}

impl<K, V> Default for AssociativeArray<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq, V> FromIterator<(K, V)> for AssociativeArray<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<K, V> AssociativeArray<K, V> {
    /// Creates a new, empty `AssociativeArray` with room for [`DEFAULT_CAPACITY`] entries.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_array::{AssociativeArray, DEFAULT_CAPACITY};
    ///
    /// let sut: AssociativeArray<&str, &str> = AssociativeArray::new();
    /// assert_eq!(sut.size(), 0);
    /// assert!(sut.capacity() >= DEFAULT_CAPACITY);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new, empty `AssociativeArray` with room for at least `capacity` entries.
    ///
    /// A capacity of zero is bumped to one, so that doubling always makes room.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity.max(1)),
        }
    }

    /// Associates `value` with `key`.
    ///
    /// If an entry with an equal key already exists its value is replaced in place, keeping
    /// the entry's position, and the previous value is returned. Otherwise the entry is
    /// appended, growing the backing store first when it is full.
    ///
    /// ### Errors
    /// - [`Error::NullKey`] if `key` is `None`. The container is left untouched.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_array::{AssociativeArray, Error};
    ///
    /// let mut sut: AssociativeArray<&str, &str> = AssociativeArray::new();
    ///
    /// assert_eq!(sut.set("key1", "value1"), Ok(None));
    /// assert_eq!(sut.set("key1", "new_value"), Ok(Some("value1")));
    /// assert_eq!(sut.set(None::<&str>, "value2"), Err(Error::NullKey));
    ///
    /// assert_eq!(sut.size(), 1);
    /// ```
    pub fn set(&mut self, key: impl Into<Option<K>>, value: V) -> Result<Option<V>>
    where
        K: Eq,
    {
        let key = key.into().ok_or(Error::NullKey)?;
        Ok(self.insert(key, value))
    }

    /// Returns a reference to the value associated with `key`.
    ///
    /// ### Errors
    /// - [`Error::NullKey`] if `key` is `None`.
    /// - [`Error::KeyNotFound`] if no entry has an equal key.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_array::{AssociativeArray, Error};
    ///
    /// let mut sut: AssociativeArray<&str, i32> = AssociativeArray::new();
    /// sut.set("key1", 1)?;
    ///
    /// assert_eq!(sut.get("key1"), Ok(&1));
    /// assert_eq!(sut.get("key2"), Err(Error::KeyNotFound));
    /// assert_eq!(sut.get(None::<&str>), Err(Error::NullKey));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn get(&self, key: impl Lookup<K>) -> Result<&V> {
        let position = self.find(key)?;
        let (_, v) = &self.pairs[position];
        Ok(v)
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// Fails exactly like [`get`](Self::get).
    pub fn get_mut(&mut self, key: impl Lookup<K>) -> Result<&mut V> {
        let position = self.find(key)?;
        let (_, v) = &mut self.pairs[position];
        Ok(v)
    }

    /// Checks whether an entry with an equal key is stored.
    ///
    /// Unlike [`get`](Self::get), a null key is not an error here: it is simply never present.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_array::AssociativeArray;
    ///
    /// let mut sut: AssociativeArray<&str, i32> = AssociativeArray::new();
    /// sut.set("key1", 1)?;
    ///
    /// assert!(sut.has_key("key1"));
    /// assert!(!sut.has_key("key2"));
    /// assert!(!sut.has_key(None::<&str>));
    /// # Ok::<(), assoc_array::Error>(())
    /// ```
    pub fn has_key(&self, key: impl Lookup<K>) -> bool {
        matches!(key.locate(&self.pairs), Located::At(_))
    }

    /// Removes the entry whose key equals `key`, returning its value.
    ///
    /// Every entry after the removed one shifts one position to the left, so the relative
    /// order of the remaining entries is preserved. A null or missing key is a no-op.
    /// Capacity is not affected.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_array::AssociativeArray;
    ///
    /// let mut sut: AssociativeArray<&str, i32> = AssociativeArray::new();
    /// sut.set("a", 1)?;
    /// sut.set("b", 2)?;
    /// sut.set("c", 3)?;
    ///
    /// assert_eq!(sut.remove("a"), Some(1));
    /// assert_eq!(sut.remove("a"), None);
    /// assert_eq!(sut.remove(None::<&str>), None);
    /// assert_eq!(sut.to_string(), "{b:2, c:3}");
    /// # Ok::<(), assoc_array::Error>(())
    /// ```
    pub fn remove(&mut self, key: impl Lookup<K>) -> Option<V> {
        match key.locate(&self.pairs) {
            Located::At(position) => {
                let (_, v) = self.pairs.remove(position);
                Some(v)
            }
            Located::Missing | Located::Null => None,
        }
    }

    /// Returns the number of entries.
    pub fn size(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of entries the backing store can hold before it has to grow.
    pub fn capacity(&self) -> usize {
        self.pairs.capacity()
    }

    /// Returns an iterator over the entries, in storage order.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_array::assoc;
    ///
    /// let sut = assoc! { "key1" => 1, "key2" => 2 };
    ///
    /// let pairs: Vec<_> = sut.iter().collect();
    /// assert_eq!(&pairs[..], &[(&"key1", &1), (&"key2", &2)]);
    /// ```
    pub fn iter(&self) -> Iter<K, V> {
        Iter::from_delegate(self.pairs.iter())
    }

    /// Returns an iterator over the keys, in storage order.
    pub fn keys(&self) -> Keys<K, V> {
        Keys::from_delegate(self.pairs.iter())
    }

    /// Returns an iterator over the values, in storage order.
    pub fn values(&self) -> Values<K, V> {
        Values::from_delegate(self.pairs.iter())
    }

    /// Index of the entry whose key equals `key`.
    pub(crate) fn find(&self, key: impl Lookup<K>) -> Result<usize> {
        key.locate(&self.pairs).into_position()
    }

    fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Eq,
    {
        match self.pairs.iter().position(|(k, _)| *k == key) {
            Some(position) => {
                let (_, v) = &mut self.pairs[position];
                Some(std::mem::replace(v, value))
            }
            None => {
                if self.pairs.len() == self.pairs.capacity() {
                    self.expand();
                }
                self.pairs.push((key, value));
                None
            }
        }
    }

    /// Doubles the capacity of the backing store.
    fn expand(&mut self) {
        let capacity = self.pairs.capacity();
        self.pairs.reserve_exact(capacity.max(1));
        log::trace!(
            "expanded associative array from {} to {} slots",
            capacity,
            self.pairs.capacity()
        );
    }
}

impl<K: Eq, V> Extend<(K, V)> for AssociativeArray<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K: Eq + Clone, V: Clone> Extend<(&'a K, &'a V)> for AssociativeArray<K, V> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        self.extend(iter.into_iter().map(|(k, v)| (k.clone(), v.clone())))
    }
}

impl<K, V> IntoIterator for AssociativeArray<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_delegate(self.pairs.into_iter())
    }
}

impl<'a, K, V> IntoIterator for &'a AssociativeArray<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Clone, V: Clone> Clone for AssociativeArray<K, V> {
    fn clone(&self) -> Self {
        let mut pairs = Vec::with_capacity(self.pairs.capacity());
        pairs.extend(self.pairs.iter().cloned());
        Self { pairs }
    }

    fn clone_from(&mut self, source: &Self) {
        self.pairs.clone_from(&source.pairs)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for AssociativeArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}:{v}")?;
        }
        f.write_str("}")
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AssociativeArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.pairs.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}
