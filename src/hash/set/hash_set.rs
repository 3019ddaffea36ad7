use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::Iter;
use crate::hash::map::HashMap;
use crate::traits::Set;
use crate::util::error::CapacityOverflow;

/// A set of unique elements, stored as the keys of a hash table. Elements must implement [`Hash`]
/// and [`Eq`], and it is a logic error for an element to be changed in a way that changes its hash
/// or equality while it is in the set.
///
/// Most of the set algebra lives on the [`Set`] trait, which this type implements:
/// ```
/// use mutable_set::hash::HashSet;
/// use mutable_set::traits::Set;
///
/// let mut set = HashSet::<i32>::new();
/// set.add([1, 2, 2, 3]);
/// assert_eq!(set.len(), 3);
///
/// let other = HashSet::from([3, 4]);
/// assert!(set.symmetric_difference(&other).equals(&HashSet::from([1, 2, 4])));
/// ```
///
/// Iteration order depends on the hasher. With the default [`RandomState`], it differs between
/// sets and between runs of the program.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashSet.
/// - `m`: The number of items in the other set of a binary operation.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n)` |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `equals` | `O(n)` |
/// | `union`, `symmetric_difference` | `O(n + m)` |
/// | `intersection`, `difference` | `O(n)` |
///
/// \* Expected time, assuming few hash collisions. `insert` takes `O(n)` when the table has to
/// grow.
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    // Yay, we get to do the thing where unit type evaluates to a no-op.
    pub(crate) inner: HashMap<T, (), B>,
}

impl<T: Hash + Eq> HashSet<T> {
    /// Creates a new, empty HashSet. No memory is allocated until the first insertion.
    pub fn new() -> HashSet<T> {
        HashSet::with_hasher(RandomState::new())
    }

    /// Creates a new, empty HashSet that can hold at least `cap` elements before reallocating.
    ///
    /// # Panics
    /// Panics if the required capacity overflows.
    pub fn with_cap(cap: usize) -> HashSet<T> {
        HashSet::with_cap_and_hasher(cap, RandomState::new())
    }

    /// Creates a HashSet holding a copy of each distinct element in `items`.
    pub fn from_slice(items: &[T]) -> HashSet<T>
    where
        T: Clone,
    {
        items.iter().cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Creates a new, empty HashSet which will use the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates a new, empty HashSet which will use the provided `hasher` and can hold at least
    /// `cap` elements before reallocating.
    ///
    /// # Panics
    /// Panics if the required capacity overflows.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        let mut set = HashSet::with_hasher(hasher);
        set.reserve(cap);
        set
    }

    /// Returns the number of elements in the set.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the set contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of buckets in the underlying table. The set grows before this is
    /// filled.
    pub const fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Returns the hasher used by the set.
    pub const fn hasher(&self) -> &B {
        &self.inner.hasher
    }

    /// Inserts `item` into the set, returning true if it wasn't present before. If an equal
    /// element is already present, it is kept and `item` is dropped.
    ///
    /// # Panics
    /// Panics if the capacity overflows while growing.
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item, ()).is_none()
    }

    /// Removes the element equal to `item` from the set and returns it, if there is one.
    pub fn remove<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(item).map(|e| e.0)
    }

    /// Returns true if the set contains an element equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(item)
    }

    /// Returns a reference to the element in the set that is equal to `item`, if there is one.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_entry(item).map(|e| e.0)
    }

    /// Keeps only the elements for which `keep` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        self.inner.retain(|item, _| keep(item))
    }

    /// Removes every element from the set, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Ensures that `extra` more elements can be inserted without reallocating.
    ///
    /// # Panics
    /// Panics if the required capacity overflows. See [`HashSet::try_reserve`] for a version that
    /// returns an error instead.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Ensures that `extra` more elements can be inserted without reallocating, or returns a
    /// [`CapacityOverflow`] if the required capacity can't be allocated. The set is unchanged on
    /// error.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        self.inner.try_reserve(extra)
    }

    /// Returns an iterator over all elements in the set, as references, in no particular order.
    ///
    /// The iterator borrows the set, so the set can't be modified until the iterator is dropped.
    /// Each call starts a fresh traversal and the iterator may be dropped part way through.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Set<T> for HashSet<T, B> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn insert(&mut self, item: T) -> bool {
        HashSet::insert(self, item)
    }

    fn remove(&mut self, item: &T) -> Option<T> {
        HashSet::remove(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a>
    where
        T: 'a,
    {
        HashSet::iter(self)
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for HashSet<T, B> {
    fn default() -> Self {
        HashSet::with_hasher(B::default())
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for HashSet<T, B> {
    fn clone(&self) -> Self {
        HashSet {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = HashSet::with_cap_and_hasher(iter.size_hint().0, B::default());

        for item in iter {
            set.insert(item);
        }

        set
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for HashSet<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashSet<T, B> {}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitOr for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitOrAssign for HashSet<T, B> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.extend(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitAnd for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitAndAssign for HashSet<T, B> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.retain(|item| rhs.contains(item))
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitXor for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitXorAssign for HashSet<T, B> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for item in rhs {
            if self.remove(&item).is_none() {
                self.insert(item);
            }
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Sub for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> SubAssign for HashSet<T, B> {
    fn sub_assign(&mut self, rhs: Self) {
        for item in rhs {
            self.remove(&item);
        }
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Formats the elements as a bracketed list, like `[a, b, c]`, in iteration order.
impl<T: Hash + Eq + Display, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
