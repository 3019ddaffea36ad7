//! The hash table behind [`HashSet`](crate::hash::HashSet) and its iterators, providing owned and
//! borrowed iteration over entries or keys.
//!
//! As a note, there is no mutable iterator over entries or keys because mutating the keys of a
//! HashMap in place would cause a logic error.

mod hash_map;
mod iter;

pub(crate) use hash_map::*;
pub(crate) use iter::*;
