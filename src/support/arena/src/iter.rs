use crate::{Id, Idx};
use core::{iter::Enumerate, marker::PhantomData, slice};

pub struct Iter<'a, K: Id, V> {
    pub(crate) iter: Enumerate<slice::Iter<'a, V>>,
    pub(crate) phantom: PhantomData<K>,
}

impl<'a, K: Id, V> Iterator for Iter<'a, K, V> {
    type Item = (Idx<K, V>, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .map(|(i, value)| (Idx::from_raw(K::from_usize(i)), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

pub struct Keys<K: Id, V> {
    pub(crate) next: usize,
    pub(crate) end: usize,
    pub(crate) phantom: PhantomData<fn() -> (K, V)>,
}

impl<K: Id, V> Iterator for Keys<K, V> {
    type Item = Idx<K, V>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (self.next < self.end).then(|| {
            let idx = Idx::from_raw(K::from_usize(self.next));
            self.next += 1;
            idx
        })
    }
}
