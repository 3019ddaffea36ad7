use std::iter::{Chain, FusedIterator};
use std::marker::PhantomData;

/// The operations every set-like type supports, so that code can be written generically over the
/// implementation.
///
/// Implementors provide insertion, removal, membership, length and borrowed iteration. Everything
/// else (bulk insertion, equality, subset relations and the set operations themselves) is
/// provided on top of those. Binary operations accept any other implementation of `Set<T>` as the
/// right hand side, so a [`HashSet`](crate::hash::HashSet) can be compared with or combined with
/// a [`std::collections::HashSet`].
///
/// The owned set operations ([`union`](Set::union), [`intersection`](Set::intersection),
/// [`difference`](Set::difference), [`symmetric_difference`](Set::symmetric_difference)) always
/// return a newly allocated `Self`, which shares nothing with either operand. Their lazy
/// counterparts (`iter_union` and friends) borrow both operands instead.
pub trait Set<T>: FromIterator<T> + Sized {
    /// A borrowed iterator over the elements of the set.
    type Iter<'a>: Iterator<Item = &'a T> where Self: 'a, T: 'a;

    /// Inserts `item`, returning true if it wasn't already present. An equal element that is
    /// already present is left in place.
    fn insert(&mut self, item: T) -> bool;

    /// Removes `item` if it is present, returning the removed element. Removing an element that
    /// isn't present does nothing.
    fn remove(&mut self, item: &T) -> Option<T>;

    /// Returns true if the set contains `item`.
    fn contains(&self, item: &T) -> bool;

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns an iterator over all elements in the set, as references.
    ///
    /// Every element is produced exactly once, in no particular order. The order isn't guaranteed
    /// to be the same between calls, and each call starts a new traversal.
    fn iter<'a>(&'a self) -> Self::Iter<'a>
    where
        T: 'a;

    /// Returns true if the set contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts all of the provided `items`, ignoring any that are already present, and returns
    /// the set to allow chaining.
    fn add<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self {
        for item in items {
            self.insert(item);
        }
        self
    }

    /// Copies every element of the set into a new [`Vec`], in no particular order.
    fn elements(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut elements = Vec::with_capacity(self.len());
        elements.extend(self.iter().cloned());
        elements
    }

    /// Returns true if both sets contain exactly the same elements.
    fn equals<S: Set<T>>(&self, other: &S) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    fn is_subset<S: Set<T>>(&self, other: &S) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    fn is_superset<S: Set<T>>(&self, other: &S) -> bool {
        other.is_subset(self)
    }

    /// Returns true if `self` and `other` have no elements in common. (`self ∩ other = ∅`)
    fn is_disjoint<S: Set<T>>(&self, other: &S) -> bool {
        self.iter_intersection(other).next().is_none()
    }

    /// Creates a new set with all items that are in either `self` or `other`. (`self ∪ other`)
    fn union<S: Set<T>>(&self, other: &S) -> Self
    where
        T: Clone,
    {
        self.iter_union(other).cloned().collect()
    }

    /// Creates a new set with all items that are in both `self` and `other`. (`self ∩ other`)
    fn intersection<S: Set<T>>(&self, other: &S) -> Self
    where
        T: Clone,
    {
        self.iter_intersection(other).cloned().collect()
    }

    /// Creates a new set with all items that are in `self` but not `other`. (`self \ other`)
    fn difference<S: Set<T>>(&self, other: &S) -> Self
    where
        T: Clone,
    {
        self.iter_difference(other).cloned().collect()
    }

    /// Creates a new set with all items that are in `self` or `other` but not both. (`self △
    /// other`)
    fn symmetric_difference<S: Set<T>>(&self, other: &S) -> Self
    where
        T: Clone,
    {
        self.iter_symmetric_difference(other).cloned().collect()
    }

    /// Creates a borrowed iterator over all items that are in `self` but not `other`. (`self \
    /// other`)
    fn iter_difference<'a, S: Set<T>>(&'a self, other: &'a S) -> Difference<'a, T, Self, S>
    where
        T: 'a,
    {
        Difference {
            inner: self.iter(),
            other,
            _phantom: PhantomData,
        }
    }

    /// Creates a borrowed iterator over all items that are in `self` or `other` but not both.
    /// (`self △ other`)
    fn iter_symmetric_difference<'a, S: Set<T>>(
        &'a self,
        other: &'a S,
    ) -> SymmetricDifference<'a, T, Self, S>
    where
        T: 'a,
    {
        SymmetricDifference {
            inner: self.iter_difference(other).chain(other.iter_difference(self)),
        }
    }

    /// Creates a borrowed iterator over all items that are in both `self` and `other`. (`self ∩
    /// other`)
    fn iter_intersection<'a, S: Set<T>>(&'a self, other: &'a S) -> Intersection<'a, T, Self, S>
    where
        T: 'a,
    {
        Intersection {
            inner: self.iter(),
            other,
            _phantom: PhantomData,
        }
    }

    /// Creates a borrowed iterator over all items that are in either `self` or `other`. (`self ∪
    /// other`)
    fn iter_union<'a, S: Set<T>>(&'a self, other: &'a S) -> Union<'a, T, Self, S>
    where
        T: 'a,
    {
        Union {
            inner: self.iter().chain(other.iter_difference(self)),
        }
    }
}

/// A borrowed iterator over the items of `A` that aren't in `B`.
///
/// See [`Set::iter_difference`].
pub struct Difference<'a, T: 'a, A: Set<T> + 'a, B: Set<T>> {
    pub(crate) inner: A::Iter<'a>,
    pub(crate) other: &'a B,
    // The iterator type is all we need from A, but A itself has to be named somewhere.
    pub(crate) _phantom: PhantomData<&'a A>,
}

impl<'a, T: 'a, A: Set<T> + 'a, B: Set<T>> Iterator for Difference<'a, T, A, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = &next
            && self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, T: 'a, A: Set<T> + 'a, B: Set<T>> FusedIterator for Difference<'a, T, A, B>
where
    A::Iter<'a>: FusedIterator,
{}

/// A borrowed iterator over the items that are in exactly one of `A` and `B`.
///
/// See [`Set::iter_symmetric_difference`].
pub struct SymmetricDifference<'a, T: 'a, A: Set<T> + 'a, B: Set<T> + 'a> {
    pub(crate) inner: Chain<Difference<'a, T, A, B>, Difference<'a, T, B, A>>,
}

impl<'a, T: 'a, A: Set<T> + 'a, B: Set<T> + 'a> Iterator for SymmetricDifference<'a, T, A, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: 'a, A: Set<T> + 'a, B: Set<T> + 'a> FusedIterator for SymmetricDifference<'a, T, A, B>
where
    A::Iter<'a>: FusedIterator,
    B::Iter<'a>: FusedIterator,
{}

/// A borrowed iterator over the items of `A` that are also in `B`.
///
/// See [`Set::iter_intersection`].
pub struct Intersection<'a, T: 'a, A: Set<T> + 'a, B: Set<T>> {
    pub(crate) inner: A::Iter<'a>,
    pub(crate) other: &'a B,
    pub(crate) _phantom: PhantomData<&'a A>,
}

impl<'a, T: 'a, A: Set<T> + 'a, B: Set<T>> Iterator for Intersection<'a, T, A, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = &next
            && !self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, T: 'a, A: Set<T> + 'a, B: Set<T>> FusedIterator for Intersection<'a, T, A, B>
where
    A::Iter<'a>: FusedIterator,
{}

/// A borrowed iterator over the items that are in either `A` or `B`. Items of `A` come first,
/// followed by the items of `B` that `A` doesn't contain.
///
/// See [`Set::iter_union`].
pub struct Union<'a, T: 'a, A: Set<T> + 'a, B: Set<T> + 'a> {
    pub(crate) inner: Chain<A::Iter<'a>, Difference<'a, T, B, A>>,
}

impl<'a, T: 'a, A: Set<T> + 'a, B: Set<T> + 'a> Iterator for Union<'a, T, A, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: 'a, A: Set<T> + 'a, B: Set<T> + 'a> FusedIterator for Union<'a, T, A, B>
where
    A::Iter<'a>: FusedIterator,
    B::Iter<'a>: FusedIterator,
{}
