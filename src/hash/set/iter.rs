use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use super::HashSet;
use crate::hash::map::{IntoKeys, Keys};

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for HashSet<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_keys())
    }
}

/// A type for owned iteration over a [`HashSet`]. Produces values of type `T`.
///
/// See [`HashSet::into_iter`].
pub struct IntoIter<T>(pub(crate) IntoKeys<T, ()>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a HashSet<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.keys())
    }
}

/// A type for borrowed iteration over a [`HashSet`]. Produces values of type `&T`.
///
/// The borrow keeps the set from being modified while the iteration is in progress.
///
/// See [`HashSet::iter`].
pub struct Iter<'a, T>(pub(crate) Keys<'a, T, ()>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}
