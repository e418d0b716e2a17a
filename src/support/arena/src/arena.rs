use crate::{
    Id, Idx,
    iter::{Iter, Keys},
};
use alloc::vec::Vec;
use core::{
    fmt,
    marker::PhantomData,
    ops::{Index, IndexMut},
};

/// An index-based arena.
///
/// [`Arena`] allocates objects and refers to them by a strongly-typed index
/// ([`Idx<K, V>`]). Values are never removed; an index stays valid for the
/// lifetime of the arena.
pub struct Arena<K: Id, V> {
    data: Vec<V>,
    phantom: PhantomData<(K, V)>,
}

impl<K: Id, V> Arena<K, V> {
    /// Creates a new empty arena.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arena::Arena;
    /// let arena: Arena<u32, i32> = Arena::new();
    /// assert!(arena.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            phantom: PhantomData,
        }
    }

    /// Returns the number of elements stored in the arena.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arena::Arena;
    /// let mut arena = Arena::<u32, _>::new();
    /// assert_eq!(arena.len(), 0);
    ///
    /// arena.alloc("foo");
    /// assert_eq!(arena.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the arena contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Allocates an element in the arena and returns its index.
    ///
    /// # Panics
    ///
    /// Panics if the number of elements would exceed `K::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena::{Arena, Idx};
    ///
    /// let mut arena: Arena<u32, &str> = Arena::new();
    /// let idx: Idx<u32, &str> = arena.alloc("hello");
    /// assert_eq!(arena[idx], "hello");
    /// ```
    #[inline]
    pub fn alloc(&mut self, value: V) -> Idx<K, V> {
        assert!(self.data.len() < K::MAX, "arena is full");
        let id = K::from_usize(self.data.len());
        self.data.push(value);
        Idx::from_raw(id)
    }

    /// Returns a reference to the value at `idx`, or `None` if out of range.
    #[inline]
    pub fn get(&self, idx: Idx<K, V>) -> Option<&V> {
        self.data.get(idx.raw.into_usize())
    }

    /// Returns an iterator over the elements and their indices.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arena::Arena;
    /// let mut arena = Arena::<u32, _>::new();
    ///
    /// let idx1 = arena.alloc(20);
    /// let idx2 = arena.alloc(40);
    ///
    /// let mut iter = arena.iter();
    /// assert_eq!(iter.next(), Some((idx1, &20)));
    /// assert_eq!(iter.next(), Some((idx2, &40)));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            iter: self.data.iter().enumerate(),
            phantom: PhantomData,
        }
    }

    /// Returns an iterator over the indices in allocation order.
    #[inline]
    pub fn keys(&self) -> Keys<K, V> {
        Keys {
            next: 0,
            end: self.data.len(),
            phantom: PhantomData,
        }
    }
}

impl<K: Id, V> Default for Arena<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Id, V> Index<Idx<K, V>> for Arena<K, V> {
    type Output = V;

    #[inline]
    fn index(&self, idx: Idx<K, V>) -> &Self::Output {
        &self.data[idx.raw.into_usize()]
    }
}

impl<K: Id, V> IndexMut<Idx<K, V>> for Arena<K, V> {
    #[inline]
    fn index_mut(&mut self, idx: Idx<K, V>) -> &mut Self::Output {
        &mut self.data[idx.raw.into_usize()]
    }
}

impl<K: Id, V: fmt::Debug> fmt::Debug for Arena<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("len", &self.len())
            .field("data", &self.data)
            .finish()
    }
}

impl<'a, K: Id, V> IntoIterator for &'a Arena<K, V> {
    type Item = (Idx<K, V>, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
