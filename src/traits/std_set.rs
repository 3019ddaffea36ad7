use std::collections::HashSet as StdHashSet;
use std::collections::hash_set::Iter as StdIter;
use std::hash::{BuildHasher, Hash};

use super::Set;

impl<T: Hash + Eq, S: BuildHasher + Default> Set<T> for StdHashSet<T, S> {
    type Iter<'a> = StdIter<'a, T> where Self: 'a, T: 'a;

    fn insert(&mut self, item: T) -> bool {
        StdHashSet::insert(self, item)
    }

    fn remove(&mut self, item: &T) -> Option<T> {
        StdHashSet::take(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        StdHashSet::contains(self, item)
    }

    fn len(&self) -> usize {
        StdHashSet::len(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a>
    where
        T: 'a,
    {
        StdHashSet::iter(self)
    }
}
