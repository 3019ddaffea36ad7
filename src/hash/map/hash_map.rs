use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash, RandomState};
use std::{cmp, iter, mem};

use tracing::trace;

use super::{IntoKeys, Iter, Keys};
use crate::util::error::CapacityOverflow;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 4;
const LOAD_FACTOR_DENOMINATOR: usize = 5;

/// A table of keys to values which relies on the keys implementing [`Hash`]. This is the storage
/// behind [`HashSet`](crate::hash::HashSet), which maps every element to `()`.
///
/// Collisions are resolved with linear probing. Removal shifts the following entries of the cluster
/// back into the freed bucket where their probe sequence allows it, so there are no tombstones. A
/// custom load factor is not supported, the default being 4/5.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashMap.
/// - `c`: The capacity of the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `get_entry` | `O(1)`* |
/// | `remove_entry` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `reserve` | `O(n)`***, `O(1)` |
/// | `retain` | `O(c)` |
///
/// \* In the event of a hash collision, these functions will take additional time, while a valid
/// / correct location is found. This additional time is kept at a minimum and hash collisions are
/// unlikely especially with a large capacity.
///
/// \** If the HashMap doesn't have enough capacity for the new entry, `insert` will take `O(n)`.
/// \* applies as well.
///
/// \*** If the HashMap has enough capacity for the additional entries already, `reserve` is `O(1)`.
#[derive(Clone)]
pub(crate) struct HashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) arr: Box<[Bucket<K, V>]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

pub(crate) type Bucket<K, V> = Option<(K, V)>;

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates a new HashMap with capacity 0 and the provided `hasher`.
    pub(crate) fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        HashMap {
            arr: Box::new([]),
            len: 0,
            hasher,
        }
    }

    /// Returns the length of the HashMap.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current capacity of the HashMap, in buckets.
    pub(crate) const fn cap(&self) -> usize {
        self.arr.len()
    }

    /// Inserts the provided `key`-`value` pair into the HashMap, increasing the capacity if
    /// required. If the key was already associated with a value, the previous value is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    ///
    /// # Panics
    /// Panics if the capacity overflows while growing.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.should_grow() {
            self.grow()
        }

        // SAFETY: We've just grown if necessary, so the capacity isn't 0.
        let index = unsafe { self.find_index_for_key(&key).unreachable() };

        // The bucket at index is either empty or contains an equal key.
        match &mut self.arr[index] {
            Some(existing) => {
                // Replace the value with the provided one.
                Some(mem::replace(&mut existing.1, value))
            },
            None => {
                // Create a new bucket with the provided values.
                self.arr[index] = Some((key, value));
                self.len += 1;
                None
            },
        }
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub(crate) fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of K
        // where equality and hashing carries over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index_for_key(key)?;

        // If the bucket at index is empty, the map doesn't contain the key.
        self.arr[index].as_ref().map(|(k, v)| (k, v))
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index_for_key(key)?;

        // If the bucket at index is empty, the map doesn't contain the key and nothing moves.
        let removed = mem::take(&mut self.arr[index])?;
        self.len -= 1;

        // Walk the rest of the cluster after the freed bucket. An entry can be moved back into the
        // gap unless its ideal bucket lies cyclically in (gap, next_index], in which case moving
        // it would put it before the start of its own probe sequence.
        let mut gap = index;
        // UNCHECKED: find_index_for_key returned some, so the cap is not 0.
        let mut next_index = (gap + 1) % self.cap();

        while let Some(next) = &self.arr[next_index] {
            // SAFETY: find_index_for_key returned Some, so the cap is not 0 and index_from_key
            // returns Some as well.
            let ideal = unsafe { self.index_from_key(&next.0).unreachable() };

            if !is_cyclically_between(gap, ideal, next_index) {
                let moving = mem::take(&mut self.arr[next_index]);
                let _none = mem::replace(&mut self.arr[gap], moving);
                gap = next_index;
            }

            // UNCHECKED: find_index_for_key returned some, so the cap is not 0.
            next_index = (next_index + 1) % self.cap();
        }

        Some(removed)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.find_index_for_key(key) {
            Some(i) => self.arr[i].is_some(),
            None => false,
        }
    }

    /// Increases the capacity of the HashMap to ensure that len + `extra` entries will fit without
    /// exceeding the load factor.
    ///
    /// # Panics
    /// Panics if the required capacity overflows. See [`HashMap::try_reserve`].
    pub(crate) fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    /// Increases the capacity of the HashMap to ensure that len + `extra` entries will fit without
    /// exceeding the load factor, returning an error if the required capacity can't be
    /// represented. The map is left untouched on error.
    pub(crate) fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        let new_cap = self.len
            .checked_add(extra)
            .and_then(|wanted| wanted.checked_mul(LOAD_FACTOR_DENOMINATOR))
            .map(|scaled| scaled.div_ceil(LOAD_FACTOR_NUMERATOR))
            .ok_or(CapacityOverflow)?;

        if new_cap <= self.cap() { return Ok(()); }

        Self::check_layout(new_cap)?;
        self.realloc_with_cap(new_cap);
        Ok(())
    }

    /// Keeps only the entries for which `keep` returns true. The capacity is unchanged.
    pub(crate) fn retain<F: FnMut(&K, &V) -> bool>(&mut self, mut keep: F) {
        let cap = self.cap();
        let old_arr = mem::replace(&mut self.arr, Self::empty_buckets(cap));
        self.len = 0;

        for entry in old_arr.into_vec().into_iter().flatten() {
            if keep(&entry.0, &entry.1) {
                self.place(entry);
            }
        }
    }

    /// Removes every entry, keeping the allocated capacity.
    pub(crate) fn clear(&mut self) {
        self.arr.iter_mut().for_each(|bucket| *bucket = None);
        self.len = 0;
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references.
    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub(crate) fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub(crate) fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Determines whether the HashMap's length exceeds the load capacity, suggesting that it should
    /// grow before inserting new entries.
    pub(crate) const fn should_grow(&self) -> bool {
        self.len >= self.cap().saturating_mul(LOAD_FACTOR_NUMERATOR) / LOAD_FACTOR_DENOMINATOR
    }

    /// Grows the HashMap by the growth factor, ensuring that it can hold additional entries.
    ///
    /// # Panics
    /// Panics if the new capacity overflows.
    pub(crate) fn grow(&mut self) {
        let new_cap = self.cap()
            .checked_mul(GROWTH_FACTOR)
            .ok_or(CapacityOverflow)
            .and_then(|cap| Self::check_layout(cap).map(|()| cap))
            .throw();

        self.realloc_with_cap(cmp::max(new_cap, MIN_ALLOCATED_CAP))
    }

    /// Reallocates the HashMap to have capacity equal to `new_cap`, if doing so wouldn't cause the
    /// map to overload. (There isn't a logical way for the map to shrink and drop entries, so this
    /// isn't allowed.)
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        // Can't handle dropping values at this point.
        if new_cap.saturating_mul(LOAD_FACTOR_NUMERATOR) / LOAD_FACTOR_DENOMINATOR < self.len { return; }

        trace!(old_cap = self.cap(), new_cap, len = self.len, "reallocating hash table");

        // Replace the buckets first so that we can consume the old ones.
        let old_arr = mem::replace(&mut self.arr, Self::empty_buckets(new_cap));
        self.len = 0;

        for entry in old_arr.into_vec().into_iter().flatten() {
            self.place(entry);
        }
    }

    /// Moves an entry whose key isn't in the HashMap into its bucket, without checking the load.
    fn place(&mut self, entry: (K, V)) {
        // SAFETY: place is only called with entries that came out of this map's buckets, which
        // have at least as much capacity now as they did when those entries were inserted, so the
        // capacity isn't 0.
        let index = unsafe { self.find_index_for_key(&entry.0).unreachable() };

        self.arr[index] = Some(entry);
        self.len += 1;
    }

    /// Calculates the ideal index of a bucket for the provided `hashable` (or None if the HashMap
    /// has 0 capacity). This method doesn't consider hash collisions, see
    /// [`HashMap::find_index_for_key`] for that functionality.
    pub(crate) fn index_from_key<H: Hash + ?Sized>(&self, hashable: &H) -> Option<usize> {
        let key_hash = self.hasher.hash_one(hashable);
        key_hash.checked_rem(self.cap() as u64).map(|i| i as usize)
    }

    /// Finds the first valid index for the provided `key` (or None if the HashMap has 0 capacity).
    /// This is done by calculating the ideal index and then iterating until a bucket is found that
    /// is empty or has an equal key.
    pub(crate) fn find_index_for_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut index = self.index_from_key(key)?;

        // This is where Eq comes in: while there is a value at the current index, but the key
        // isn't equal, increment the index (wrapping at the capacity) and check again.
        // Can't loop forever unless the load factor is 100%.
        while let Some(existing) = &self.arr[index]
            && existing.0.borrow() != key
        {
            // UNCHECKED: index_from_key returned some, so the cap is not 0.
            index = (index + 1) % self.cap();
        }

        // After that loop, index is either empty or contains an equal key.
        Some(index)
    }

    fn empty_buckets(cap: usize) -> Box<[Bucket<K, V>]> {
        iter::repeat_with(|| None).take(cap).collect()
    }

    /// Checks that `cap` buckets fit in the address space an allocation is allowed to span.
    fn check_layout(cap: usize) -> Result<(), CapacityOverflow> {
        match cap.checked_mul(mem::size_of::<Bucket<K, V>>()) {
            Some(bytes) if bytes <= isize::MAX as usize => Ok(()),
            _ => Err(CapacityOverflow),
        }
    }
}

/// Returns true if `value` lies in the cyclic range `(low, high]` of bucket indices.
const fn is_cyclically_between(low: usize, value: usize, high: usize) -> bool {
    if low <= high {
        low < value && value <= high
    } else {
        low < value || value <= high
    }
}
