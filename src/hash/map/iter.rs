use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::slice::Iter as ArrIter;
use std::vec::IntoIter as ArrIntoIter;

use super::{Bucket, HashMap};

impl<K: Hash + Eq, V, B: BuildHasher> IntoIterator for HashMap<K, V, B> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len(),
            inner: self.arr.into_vec().into_iter(),
        }
    }
}

/// Owned iteration over the entries of a [`HashMap`], in bucket order.
pub(crate) struct IntoIter<K, V> {
    pub(crate) inner: ArrIntoIter<Bucket<K, V>>,
    pub(crate) len: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.inner.find_map(|bucket| bucket);
        if next.is_some() {
            self.len -= 1;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a HashMap<K, V, B> {
    type Item = &'a (K, V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            len: self.len(),
            inner: self.arr.iter(),
        }
    }
}

/// Borrowed iteration over the entries of a [`HashMap`], in bucket order.
pub(crate) struct Iter<'a, K, V> {
    pub(crate) inner: ArrIter<'a, Bucket<K, V>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.inner.find_map(|bucket| bucket.as_ref());
        if next.is_some() {
            self.len -= 1;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
            len: self.len,
        }
    }
}

pub(crate) struct IntoKeys<K, V>(
    pub(crate) IntoIter<K, V>
);

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoKeys<K, V> {}

impl<K, V> FusedIterator for IntoKeys<K, V> {}

pub(crate) struct Keys<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| &e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys(self.0.clone())
    }
}
